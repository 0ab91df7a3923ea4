//! The node-graph editor: viewport, selection, gestures and the reducer that
//! applies every edit to the active workflow.

pub mod controller;
pub mod event;
pub mod gesture;
pub mod grid;
pub mod intent;
pub mod layout;
pub mod minimap;
pub mod routing;
pub mod selection;
pub mod shortcuts;
pub mod status;
pub mod viewport;

pub use controller::*;
pub use event::*;
pub use gesture::*;
pub use grid::*;
pub use intent::*;
pub use layout::*;
pub use minimap::*;
pub use routing::*;
pub use selection::*;
pub use shortcuts::*;
pub use status::*;
pub use viewport::*;

use crate::catalog::Agent;
use crate::config::EditorConfig;
use crate::geometry::{Point, Size};
use crate::ids::{Clock, IdGenerator};
use crate::run::RunState;
use crate::workflow::{Workflow, WorkflowNode};
use std::sync::Arc;
use tracing::debug;

/// View-only state. None of it is saved with the workflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub viewport: Viewport,
    pub grid: GridSettings,
    pub selection: Selection,
}

pub struct CanvasBuilder {
    config: EditorConfig,
    ids: IdGenerator,
}

impl Default for CanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasBuilder {
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            ids: IdGenerator::default(),
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Clock used for node and connection ids.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.ids = IdGenerator::new(clock);
        self
    }

    pub fn build(self) -> Canvas {
        Canvas {
            view: ViewState {
                viewport: Viewport::default(),
                grid: GridSettings::from_config(&self.config),
                selection: Selection::default(),
            },
            controller: InteractionController::default(),
            layout: NodeLayout::from_config(&self.config),
            config: self.config,
            ids: self.ids,
        }
    }
}

/// Editor for one workflow at a time.
///
/// Event handlers translate input into intents through the
/// `InteractionController` and apply them with [`Canvas::dispatch`]. Each
/// handler returns the intents it applied.
#[derive(Debug)]
pub struct Canvas {
    view: ViewState,
    controller: InteractionController,
    layout: NodeLayout,
    config: EditorConfig,
    ids: IdGenerator,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Canvas {
    pub fn builder() -> CanvasBuilder {
        CanvasBuilder::new()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn viewport(&self) -> &Viewport {
        &self.view.viewport
    }

    pub fn grid(&self) -> &GridSettings {
        &self.view.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.view.selection
    }

    pub fn gesture(&self) -> &Gesture {
        self.controller.gesture()
    }

    pub fn layout(&self) -> &NodeLayout {
        &self.layout
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn status(&self, workflow: &Workflow) -> StatusLine {
        StatusLine::of(workflow, &self.view.selection)
    }

    pub fn hit_test(&self, workflow: &Workflow, screen: Point) -> HitTarget {
        self.layout
            .hit_test(workflow, self.view.viewport.screen_to_canvas(screen))
    }

    pub fn routes<'a>(&self, workflow: &'a Workflow, run: &RunState) -> Vec<RoutedConnection<'a>> {
        route_connections(workflow, self.layout.size, run)
    }

    pub fn pending_route(&self) -> Option<Route> {
        self.controller.gesture().pending_connection().map(route_pending)
    }

    /// Forgets the selection and any gesture, e.g. when another workflow
    /// becomes active. The viewport is kept.
    pub fn reset_interaction(&mut self) {
        self.controller.cancel();
        self.view.selection.clear();
    }

    pub fn pointer_down(
        &mut self,
        workflow: &mut Workflow,
        run: &mut RunState,
        event: &PointerEvent,
    ) -> Vec<Intent> {
        let intents = self
            .controller
            .pointer_down(&self.view, &self.layout, workflow, event);
        self.apply(workflow, run, intents)
    }

    pub fn pointer_move(
        &mut self,
        workflow: &mut Workflow,
        run: &mut RunState,
        event: &PointerEvent,
    ) -> Vec<Intent> {
        let intents = self.controller.pointer_move(&self.view, workflow, event);
        self.apply(workflow, run, intents)
    }

    pub fn pointer_up(
        &mut self,
        workflow: &mut Workflow,
        run: &mut RunState,
        event: &PointerEvent,
    ) -> Vec<Intent> {
        let intents = self
            .controller
            .pointer_up(&self.view, &self.layout, workflow, event);
        self.apply(workflow, run, intents)
    }

    pub fn wheel(&mut self, workflow: &mut Workflow, run: &mut RunState, event: &WheelEvent) -> Vec<Intent> {
        let intents = self.controller.wheel(event);
        self.apply(workflow, run, intents)
    }

    pub fn key(&mut self, workflow: &mut Workflow, run: &mut RunState, event: &KeyEvent) -> Vec<Intent> {
        let intents = self.controller.key(&self.view, event);
        self.apply(workflow, run, intents)
    }

    /// Drops catalog agents at a screen point.
    pub fn drop_agents(
        &mut self,
        workflow: &mut Workflow,
        run: &mut RunState,
        agents: Vec<Agent>,
        at: Point,
    ) -> Vec<Intent> {
        let intents = self.controller.drop_agents(&self.view, agents, at);
        self.apply(workflow, run, intents)
    }

    /// Recenters the view on a mini-map click.
    pub fn minimap_click(
        &mut self,
        workflow: &mut Workflow,
        run: &mut RunState,
        minimap: &MiniMap,
        at: Point,
        window: Size,
    ) -> Vec<Intent> {
        let offset = minimap.recenter(at, &self.view.viewport, window);
        self.apply(workflow, run, vec![Intent::SetOffset(offset)])
    }

    fn apply(&mut self, workflow: &mut Workflow, run: &mut RunState, intents: Vec<Intent>) -> Vec<Intent> {
        for intent in &intents {
            self.dispatch(workflow, run, intent.clone());
        }
        intents
    }

    /// Applies one intent. Intents naming missing nodes or connections are
    /// ignored.
    pub fn dispatch(&mut self, workflow: &mut Workflow, run: &mut RunState, intent: Intent) {
        debug!(workflow_id = %workflow.id, ?intent, "dispatch");
        let view = &mut self.view;
        match intent {
            Intent::SetOffset(offset) => view.viewport.pan_to(offset),
            Intent::ZoomWheel { delta_y } => view.viewport.wheel_zoom(delta_y, &self.config.wheel_zoom),
            Intent::ZoomIn => view.viewport.zoom_in(&self.config.button_zoom),
            Intent::ZoomOut => view.viewport.zoom_out(&self.config.button_zoom),
            Intent::ResetView => view.viewport.reset(),
            Intent::PlaceAgents { agents, at } => self.place_agents(workflow, &agents, at),
            Intent::MoveNodes(moves) => {
                for (node_id, position) in moves {
                    workflow.move_node(&node_id, position);
                }
            }
            Intent::SelectNode(node_id) => {
                if workflow.contains_node(&node_id) {
                    view.selection.select_only(&node_id);
                }
            }
            Intent::AddToSelection(node_id) => {
                if workflow.contains_node(&node_id) {
                    view.selection.add(&node_id);
                }
            }
            Intent::SetSelection(mut ids) => {
                ids.retain(|id| workflow.contains_node(id));
                view.selection.set(ids);
            }
            Intent::SelectAll => view.selection.set(workflow.node_ids()),
            Intent::ClearSelection => view.selection.clear(),
            Intent::Connect { from, to } => {
                let id = self.ids.next("connection");
                workflow.connect(id, from, to);
            }
            Intent::DeleteSelection => {
                let doomed = view.selection.ids().to_vec();
                if !doomed.is_empty() {
                    workflow.remove_nodes(&doomed);
                    run.forget(&doomed);
                    view.selection.clear();
                }
            }
            Intent::DuplicateSelection => self.duplicate_selection(workflow),
            Intent::ToggleRunSelection => run.toggle_all(view.selection.ids()),
            Intent::RemoveNode(node_id) => {
                if workflow.remove_node(&node_id) {
                    run.forget(std::slice::from_ref(&node_id));
                    view.selection.retain_existing(workflow);
                }
            }
            Intent::RemoveConnection(connection_id) => {
                if !workflow.remove_connection(&connection_id) {
                    debug!(connection_id = %connection_id, "removal of missing connection skipped");
                }
            }
            Intent::ToggleNodeRunning(node_id) => {
                if workflow.contains_node(&node_id) {
                    run.toggle_node(&node_id);
                }
            }
            Intent::UpdateNodeData { node_id, patch } => {
                workflow.update_node_data(&node_id, &patch);
            }
            Intent::ToggleGrid => view.grid.toggle_visible(),
            Intent::ToggleSnap => view.grid.toggle_snap(),
        }
    }

    fn overlaps_existing(&self, workflow: &Workflow, p: Point) -> bool {
        let d = self.config.overlap_distance;
        workflow
            .nodes
            .iter()
            .any(|n| (n.position.x - p.x).abs() < d && (n.position.y - p.y).abs() < d)
    }

    fn place_agents(&mut self, workflow: &mut Workflow, agents: &[Agent], at: Point) {
        match agents {
            [] => {}
            [agent] => {
                let mut position = self.view.grid.apply(at);
                if self.overlaps_existing(workflow, position) {
                    position = position.nudged(self.config.nudge);
                }
                let id = self.ids.next("node");
                workflow.add_node(WorkflowNode::from_agent(id.clone(), agent, position));
                self.view.selection.select_only(&id);
            }
            _ => {
                let ids = self.ids.next_batch("node", agents.len());
                for (i, (agent, id)) in agents.iter().zip(&ids).enumerate() {
                    let position = self
                        .view
                        .grid
                        .apply(at.nudged(self.config.batch_spacing * i as f64));
                    workflow.add_node(WorkflowNode::from_agent(id.clone(), agent, position));
                }
                self.view.selection.set(ids);
            }
        }
    }

    fn duplicate_selection(&mut self, workflow: &mut Workflow) {
        let originals: Vec<WorkflowNode> = workflow
            .nodes
            .iter()
            .filter(|n| self.view.selection.contains(&n.id))
            .cloned()
            .collect();
        if originals.is_empty() {
            return;
        }
        let ids = self.ids.next_batch("node", originals.len());
        for (original, id) in originals.into_iter().zip(&ids) {
            workflow.add_node(WorkflowNode {
                id: id.clone(),
                position: original.position.nudged(self.config.duplicate_offset),
                ..original
            });
        }
        self.view.selection.set(ids);
    }
}
