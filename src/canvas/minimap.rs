//! The scaled-down overview of the whole canvas.

use super::viewport::Viewport;
use crate::geometry::{Point, Rect, Size};
use crate::workflow::Workflow;

/// A node as drawn on the mini-map.
#[derive(Debug, Clone, PartialEq)]
pub struct MiniMapNode {
    pub node_id: String,
    pub rect: Rect,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiniMapScene {
    pub nodes: Vec<MiniMapNode>,
    pub links: Vec<(Point, Point)>,
    /// The visible part of the canvas.
    pub viewport: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiniMap {
    pub scale: f64,
    pub size: Size,
    pub marker: Size,
    /// Offsets from a node's position to where its link leaves and enters.
    pub link_out: Point,
    pub link_in: Point,
}

impl Default for MiniMap {
    fn default() -> Self {
        Self {
            scale: 0.05,
            size: Size::new(200.0, 150.0),
            marker: Size::new(10.0, 6.0),
            link_out: Point::new(200.0, 50.0),
            link_in: Point::new(0.0, 50.0),
        }
    }
}

impl MiniMap {
    pub fn project(&self, workflow: &Workflow, viewport: &Viewport, window: Size) -> MiniMapScene {
        let nodes = workflow
            .nodes
            .iter()
            .map(|n| MiniMapNode {
                node_id: n.id.clone(),
                rect: Rect::from_origin_size(n.position * self.scale, self.marker),
                color: n.data.color.clone(),
            })
            .collect();

        let links = workflow
            .connections
            .iter()
            .filter_map(|c| workflow.endpoints(c))
            .map(|(from, to)| {
                (
                    (from.position + self.link_out) * self.scale,
                    (to.position + self.link_in) * self.scale,
                )
            })
            .collect();

        let visible = Size::new(
            window.width * self.scale / viewport.scale(),
            window.height * self.scale / viewport.scale(),
        );
        MiniMapScene {
            nodes,
            links,
            viewport: Rect::from_origin_size(viewport.offset() * -self.scale, visible),
        }
    }

    /// The view offset that recenters the canvas on a click at `at`
    /// (mini-map coordinates).
    pub fn recenter(&self, at: Point, viewport: &Viewport, window: Size) -> Point {
        let scale = viewport.scale();
        let target = at / self.scale;
        Point::new(
            -target.x * scale + window.width / 2.0 * scale,
            -target.y * scale + window.height / 2.0 * scale,
        )
    }
}
