use crate::catalog::{Agent, AgentPatch};
use crate::geometry::Point;
use crate::workflow::{InputRef, OutputRef};

/// A single requested change to the canvas or its workflow.
///
/// Intents come from the interaction controller, from shortcuts and from
/// panel buttons. `Canvas::dispatch` is the only place that applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetOffset(Point),
    ZoomWheel { delta_y: f64 },
    ZoomIn,
    ZoomOut,
    ResetView,
    /// Places agents around a canvas-space point.
    PlaceAgents { agents: Vec<Agent>, at: Point },
    /// Moves nodes to final canvas positions.
    MoveNodes(Vec<(String, Point)>),
    SelectNode(String),
    AddToSelection(String),
    SetSelection(Vec<String>),
    SelectAll,
    ClearSelection,
    Connect { from: OutputRef, to: InputRef },
    DeleteSelection,
    DuplicateSelection,
    ToggleRunSelection,
    RemoveNode(String),
    RemoveConnection(String),
    ToggleNodeRunning(String),
    UpdateNodeData { node_id: String, patch: AgentPatch },
    ToggleGrid,
    ToggleSnap,
}
