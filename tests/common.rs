//! Common test utilities for building workflows, canvases and workspaces.
use agentflow::canvas::Canvas;
use agentflow::catalog::Agent;
use agentflow::geometry::Point;
use agentflow::ids::FixedClock;
use agentflow::workflow::{InputRef, OutputRef, Workflow, WorkflowNode};
use agentflow::workspace::Workspace;
use std::sync::Arc;

/// The instant every fixed clock in the tests reports.
pub const T0: u64 = 1_700_000_000_000;

/// A catalog-style agent with the given ports.
#[allow(dead_code)]
pub fn agent(id: &str, inputs: &[&str], outputs: &[&str]) -> Agent {
    Agent {
        id: id.to_string(),
        name: format!("Agent {}", id),
        description: format!("Test agent {}", id),
        category: "Processing".to_string(),
        color: "#8b5cf6".to_string(),
        tags: vec!["test".to_string()],
        rating: 4.5,
        usage_count: 10,
        inputs: inputs.iter().map(|s| s.to_string()).collect(),
        outputs: outputs.iter().map(|s| s.to_string()).collect(),
        input: inputs.join(", "),
        output: outputs.join(", "),
        domains: vec!["custom".to_string()],
        capabilities: None,
    }
}

/// A node with one `In` input and one `Out` output.
#[allow(dead_code)]
pub fn node(id: &str, x: f64, y: f64) -> WorkflowNode {
    WorkflowNode::from_agent(
        id.to_string(),
        &agent("relay", &["In"], &["Out"]),
        Point::new(x, y),
    )
}

/// Wires `from`'s `Out` into `to`'s `In`.
#[allow(dead_code)]
pub fn wire(workflow: &mut Workflow, id: &str, from: &str, to: &str) -> bool {
    workflow.connect(
        id.to_string(),
        OutputRef::new(from, "Out"),
        InputRef::new(to, "In"),
    )
}

/// Nodes A, B, C in a row with connections A→B and B→C.
#[allow(dead_code)]
pub fn chain_workflow() -> Workflow {
    let mut workflow = Workflow::new("chain", "Chain", "A to B to C");
    workflow.add_node(node("A", 0.0, 0.0));
    workflow.add_node(node("B", 300.0, 0.0));
    workflow.add_node(node("C", 600.0, 0.0));
    wire(&mut workflow, "ab", "A", "B");
    wire(&mut workflow, "bc", "B", "C");
    workflow
}

#[allow(dead_code)]
pub fn empty_workflow() -> Workflow {
    Workflow::new("empty", "Empty", "")
}

/// A canvas with default config whose ids all derive from `T0`.
#[allow(dead_code)]
pub fn fixed_canvas() -> Canvas {
    Canvas::builder().with_clock(Arc::new(FixedClock(T0))).build()
}

/// A workspace with the built-in catalog and templates whose ids all derive from `T0`.
#[allow(dead_code)]
pub fn fixed_workspace() -> Workspace {
    Workspace::builder()
        .with_clock(Arc::new(FixedClock(T0)))
        .build()
}

#[allow(dead_code)]
pub fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
