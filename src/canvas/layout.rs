//! Card geometry and hit testing.

use crate::config::EditorConfig;
use crate::geometry::{Point, Rect, Size};
use crate::workflow::{Workflow, WorkflowNode};

/// What lies under a canvas-space point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Empty,
    NodeHeader(String),
    NodeBody(String),
    OutputPort { node_id: String, output: String },
    InputPort { node_id: String, input: String },
    Connection(String),
}

/// Dimensions of a node card and where its ports sit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    pub size: Size,
    pub header_height: f64,
    pub port_offset: f64,
    pub port_spacing: f64,
    pub port_hit_radius: f64,
}

impl Default for NodeLayout {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl NodeLayout {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            size: config.node_size,
            header_height: config.header_height,
            port_offset: config.port_offset,
            port_spacing: config.port_spacing,
            port_hit_radius: config.port_hit_radius,
        }
    }

    pub fn card(&self, node: &WorkflowNode) -> Rect {
        Rect::from_origin_size(node.position, self.size)
    }

    pub fn header(&self, node: &WorkflowNode) -> Rect {
        Rect::from_origin_size(node.position, Size::new(self.size.width, self.header_height))
    }

    fn port_y(&self, node: &WorkflowNode, index: usize) -> f64 {
        node.position.y + self.port_offset + self.port_spacing * index as f64
    }

    /// Anchor of output `index`, on the card's right edge.
    pub fn output_anchor(&self, node: &WorkflowNode, index: usize) -> Point {
        Point::new(node.position.x + self.size.width, self.port_y(node, index))
    }

    /// Anchor of input `index`, on the card's left edge.
    pub fn input_anchor(&self, node: &WorkflowNode, index: usize) -> Point {
        Point::new(node.position.x, self.port_y(node, index))
    }

    pub fn output_anchor_named(&self, node: &WorkflowNode, output: &str) -> Option<Point> {
        node.output_index(output).map(|i| self.output_anchor(node, i))
    }

    pub fn input_anchor_named(&self, node: &WorkflowNode, input: &str) -> Option<Point> {
        node.input_index(input).map(|i| self.input_anchor(node, i))
    }

    /// Finds the topmost target under `p`. Later nodes are drawn on top, and a
    /// node's ports take precedence over its card.
    pub fn hit_test(&self, workflow: &Workflow, p: Point) -> HitTarget {
        for node in workflow.nodes.iter().rev() {
            if let Some(hit) = self.hit_port(node, p) {
                return hit;
            }
            if self.header(node).contains(p) {
                return HitTarget::NodeHeader(node.id.clone());
            }
            if self.card(node).contains(p) {
                return HitTarget::NodeBody(node.id.clone());
            }
        }
        HitTarget::Empty
    }

    fn hit_port(&self, node: &WorkflowNode, p: Point) -> Option<HitTarget> {
        let radius = self.port_hit_radius;
        let output = node
            .outputs
            .iter()
            .enumerate()
            .find(|(i, _)| self.output_anchor(node, *i).distance(p) <= radius)
            .map(|(_, output)| HitTarget::OutputPort {
                node_id: node.id.clone(),
                output: output.clone(),
            });
        output.or_else(|| {
            node.inputs
                .iter()
                .enumerate()
                .find(|(i, _)| self.input_anchor(node, *i).distance(p) <= radius)
                .map(|(_, input)| HitTarget::InputPort {
                    node_id: node.id.clone(),
                    input: input.clone(),
                })
        })
    }
}
