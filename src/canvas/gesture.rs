use crate::geometry::{Point, Rect};
use crate::workflow::OutputRef;

/// A connection being dragged out of an output port.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConnection {
    pub from: OutputRef,
    /// Canvas-space anchor of the source port.
    pub anchor: Point,
    /// Canvas-space pointer position.
    pub pointer: Point,
}

/// The pointer gesture in progress. Exactly one is active per pointer
/// sequence; pointer-up always returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Panning {
        /// Pointer position minus view offset at pointer-down.
        grab: Point,
    },
    NodeDragging {
        node_id: String,
        start: Point,
        origin: Point,
    },
    MultiDragging {
        start: Point,
        origins: Vec<(String, Point)>,
    },
    RubberBandSelecting {
        start: Point,
        end: Point,
    },
    Connecting(PendingConnection),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn pending_connection(&self) -> Option<&PendingConnection> {
        match self {
            Gesture::Connecting(pending) => Some(pending),
            _ => None,
        }
    }

    /// The rubber band rectangle in canvas space, while one is being drawn.
    pub fn rubber_band(&self) -> Option<Rect> {
        match self {
            Gesture::RubberBandSelecting { start, end } => Some(Rect::from_corners(*start, *end)),
            _ => None,
        }
    }
}
