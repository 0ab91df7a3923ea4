//! Bézier routing of connection curves.

use super::gesture::PendingConnection;
use crate::geometry::{Point, Size};
use crate::run::RunState;
use crate::workflow::{Connection, Workflow};

const MAX_CONTROL_OFFSET: f64 = 100.0;

/// A cubic Bézier from a source card's right edge to a target card's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub start: Point,
    pub end: Point,
    pub control_start: Point,
    pub control_end: Point,
}

impl Route {
    /// Routes between two cards with their top-left corners at `from` and `to`.
    pub fn between(from: Point, from_size: Size, to: Point, to_size: Size) -> Self {
        let start = Point::new(from.x + from_size.width, from.y + from_size.height / 2.0);
        let end = Point::new(to.x, to.y + to_size.height / 2.0);
        let offset = MAX_CONTROL_OFFSET.min((end.x - start.x).abs() / 3.0);
        Self {
            start,
            end,
            control_start: Point::new(start.x + offset, start.y),
            control_end: Point::new(end.x - offset, end.y),
        }
    }

    /// SVG path data, e.g. `M 320 250 C 420 250, 400 250, 500 250`.
    pub fn svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control_start.x,
            self.control_start.y,
            self.control_end.x,
            self.control_end.y,
            self.end.x,
            self.end.y
        )
    }

    /// Where the label and delete button sit.
    pub fn midpoint(&self) -> Point {
        (self.start + self.end) / 2.0
    }

    /// Direction of the straight line from start to end, in degrees.
    pub fn angle_degrees(&self) -> f64 {
        (self.end.y - self.start.y)
            .atan2(self.end.x - self.start.x)
            .to_degrees()
    }
}

/// A connection ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedConnection<'a> {
    pub connection: &'a Connection,
    pub route: Route,
    pub label: String,
    /// Animated while the workflow runs and both endpoints are running.
    pub active: bool,
}

/// Routes every connection whose endpoints still exist. The rest are skipped.
pub fn route_connections<'a>(
    workflow: &'a Workflow,
    card: Size,
    run: &RunState,
) -> Vec<RoutedConnection<'a>> {
    workflow
        .connections
        .iter()
        .filter_map(|connection| {
            let (from, to) = workflow.endpoints(connection)?;
            Some(RoutedConnection {
                connection,
                route: Route::between(from.position, card, to.position, card),
                label: connection.label(),
                active: run.is_workflow_running()
                    && run.is_running(&from.id)
                    && run.is_running(&to.id),
            })
        })
        .collect()
}

/// The temporary curve from a port to the pointer while connecting.
pub fn route_pending(pending: &PendingConnection) -> Route {
    Route::between(pending.anchor, Size::ZERO, pending.pointer, Size::ZERO)
}
