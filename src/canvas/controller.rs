//! Pointer gesture handling.
//!
//! The controller owns the gesture state machine and turns raw pointer,
//! wheel and key events into `Intent`s. It never mutates the workflow.

use super::ViewState;
use super::event::{KeyEvent, MouseButton, PointerEvent, WheelEvent};
use super::gesture::{Gesture, PendingConnection};
use super::intent::Intent;
use super::layout::{HitTarget, NodeLayout};
use super::shortcuts::Shortcut;
use crate::catalog::Agent;
use crate::geometry::{Point, Rect};
use crate::workflow::{InputRef, OutputRef, Workflow};
use tracing::debug;

#[derive(Debug, Default)]
pub struct InteractionController {
    gesture: Gesture,
    /// Last pointer position in canvas space.
    pointer: Point,
}

impl InteractionController {
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Abandons the current gesture without emitting anything.
    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    fn resolve_target(
        event: &PointerEvent,
        layout: &NodeLayout,
        workflow: &Workflow,
        canvas_point: Point,
    ) -> HitTarget {
        event
            .target
            .clone()
            .unwrap_or_else(|| layout.hit_test(workflow, canvas_point))
    }

    pub fn pointer_down(
        &mut self,
        view: &ViewState,
        layout: &NodeLayout,
        workflow: &Workflow,
        event: &PointerEvent,
    ) -> Vec<Intent> {
        let p = view.viewport.screen_to_canvas(event.position);
        self.pointer = p;

        match Self::resolve_target(event, layout, workflow, p) {
            HitTarget::Empty => {
                if event.button == MouseButton::Secondary {
                    return Vec::new();
                }
                if event.modifiers.shift {
                    self.gesture = Gesture::RubberBandSelecting { start: p, end: p };
                    Vec::new()
                } else {
                    self.gesture = Gesture::Panning {
                        grab: event.position - view.viewport.offset(),
                    };
                    vec![Intent::ClearSelection]
                }
            }
            HitTarget::NodeHeader(node_id) => {
                if event.button != MouseButton::Primary {
                    return Vec::new();
                }
                self.begin_drag(view, workflow, &node_id, event)
            }
            HitTarget::NodeBody(node_id) if workflow.contains_node(&node_id) => {
                vec![Intent::SelectNode(node_id)]
            }
            HitTarget::OutputPort { node_id, output } => {
                let anchor = workflow
                    .node(&node_id)
                    .and_then(|node| layout.output_anchor_named(node, &output));
                match anchor {
                    Some(anchor) => {
                        debug!(node_id = %node_id, output = %output, "connection started");
                        self.gesture = Gesture::Connecting(PendingConnection {
                            from: OutputRef::new(&node_id, &output),
                            anchor,
                            pointer: p,
                        });
                    }
                    None => debug!(node_id = %node_id, output = %output, "unknown output port"),
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn begin_drag(
        &mut self,
        view: &ViewState,
        workflow: &Workflow,
        node_id: &str,
        event: &PointerEvent,
    ) -> Vec<Intent> {
        let Some(node) = workflow.node(node_id) else {
            return Vec::new();
        };
        let start = event.position;
        let selection = &view.selection;

        if event.modifiers.shift || (selection.is_multi() && selection.contains(node_id)) {
            let mut dragged: Vec<&str> = selection.ids().iter().map(String::as_str).collect();
            if !selection.contains(node_id) {
                dragged.push(node_id);
            }
            let origins = dragged
                .into_iter()
                .filter_map(|id| workflow.node(id))
                .map(|n| (n.id.clone(), n.position))
                .collect();
            self.gesture = Gesture::MultiDragging { start, origins };
            if event.modifiers.shift {
                vec![Intent::AddToSelection(node_id.to_string())]
            } else {
                Vec::new()
            }
        } else {
            self.gesture = Gesture::NodeDragging {
                node_id: node_id.to_string(),
                start,
                origin: node.position,
            };
            vec![Intent::SelectNode(node_id.to_string())]
        }
    }

    pub fn pointer_move(
        &mut self,
        view: &ViewState,
        workflow: &Workflow,
        event: &PointerEvent,
    ) -> Vec<Intent> {
        let p = view.viewport.screen_to_canvas(event.position);
        self.pointer = p;
        let scale = view.viewport.scale();
        let dragged_to = |start: Point, origin: Point| {
            view.grid.apply(origin + (event.position - start) / scale)
        };

        match &mut self.gesture {
            Gesture::Idle => Vec::new(),
            Gesture::Panning { grab } => vec![Intent::SetOffset(event.position - *grab)],
            Gesture::NodeDragging {
                node_id,
                start,
                origin,
            } => vec![Intent::MoveNodes(vec![(
                node_id.clone(),
                dragged_to(*start, *origin),
            )])],
            Gesture::MultiDragging { start, origins } => vec![Intent::MoveNodes(
                origins
                    .iter()
                    .map(|(id, origin)| (id.clone(), dragged_to(*start, *origin)))
                    .collect(),
            )],
            Gesture::RubberBandSelecting { start, end } => {
                *end = p;
                let band = Rect::from_corners(*start, *end);
                let ids = workflow
                    .nodes
                    .iter()
                    .filter(|n| band.contains(n.position))
                    .map(|n| n.id.clone())
                    .collect();
                vec![Intent::SetSelection(ids)]
            }
            Gesture::Connecting(pending) => {
                pending.pointer = p;
                Vec::new()
            }
        }
    }

    pub fn pointer_up(
        &mut self,
        view: &ViewState,
        layout: &NodeLayout,
        workflow: &Workflow,
        event: &PointerEvent,
    ) -> Vec<Intent> {
        let p = view.viewport.screen_to_canvas(event.position);
        self.pointer = p;

        let Gesture::Connecting(pending) = std::mem::take(&mut self.gesture) else {
            return Vec::new();
        };
        match Self::resolve_target(event, layout, workflow, p) {
            HitTarget::InputPort { node_id, input } if node_id != pending.from.node_id => {
                vec![Intent::Connect {
                    from: pending.from,
                    to: InputRef::new(&node_id, &input),
                }]
            }
            _ => {
                debug!(from = %pending.from.node_id, "pending connection cancelled");
                Vec::new()
            }
        }
    }

    pub fn wheel(&mut self, event: &WheelEvent) -> Vec<Intent> {
        if event.modifiers.ctrl {
            vec![Intent::ZoomWheel {
                delta_y: event.delta_y,
            }]
        } else {
            Vec::new()
        }
    }

    /// Maps a key press to intents. Escape cancels a pending connection or
    /// rubber band; otherwise it clears the selection, and a drag in progress
    /// keeps moving the nodes it picked up.
    pub fn key(&mut self, view: &ViewState, event: &KeyEvent) -> Vec<Intent> {
        let Some(shortcut) = Shortcut::from_key(event) else {
            return Vec::new();
        };
        match shortcut {
            Shortcut::Cancel => match self.gesture {
                Gesture::Connecting(_) | Gesture::RubberBandSelecting { .. } => {
                    self.gesture = Gesture::Idle;
                    Vec::new()
                }
                _ => vec![Intent::ClearSelection],
            },
            Shortcut::DeleteSelection if view.selection.is_empty() => Vec::new(),
            Shortcut::DeleteSelection => vec![Intent::DeleteSelection],
            Shortcut::DuplicateSelection => vec![Intent::DuplicateSelection],
            Shortcut::SelectAll => vec![Intent::SelectAll],
            Shortcut::ToggleGrid => vec![Intent::ToggleGrid],
            Shortcut::ToggleSnap => vec![Intent::ToggleSnap],
        }
    }

    /// A drop of catalog agents at a screen point.
    pub fn drop_agents(&mut self, view: &ViewState, agents: Vec<Agent>, at: Point) -> Vec<Intent> {
        if agents.is_empty() {
            return Vec::new();
        }
        vec![Intent::PlaceAgents {
            agents,
            at: view.viewport.screen_to_canvas(at),
        }]
    }
}
