//! Tests for the canvas editor: viewport, gestures, shortcuts and the reducer.
mod common;
use agentflow::canvas::*;
use agentflow::config::EditorConfig;
use agentflow::geometry::Point;
use agentflow::run::RunState;
use agentflow::workflow::Workflow;
use common::*;
use std::collections::HashSet;

/// A canvas with its workflow and run state, driven like a host UI would.
struct Harness {
    canvas: Canvas,
    workflow: Workflow,
    run: RunState,
}

impl Harness {
    fn new(workflow: Workflow) -> Self {
        Self {
            canvas: fixed_canvas(),
            workflow,
            run: RunState::default(),
        }
    }

    fn down(&mut self, event: PointerEvent) -> Vec<Intent> {
        self.canvas.pointer_down(&mut self.workflow, &mut self.run, &event)
    }

    fn moved(&mut self, x: f64, y: f64) -> Vec<Intent> {
        self.canvas
            .pointer_move(&mut self.workflow, &mut self.run, &PointerEvent::at(x, y))
    }

    fn up(&mut self, x: f64, y: f64) -> Vec<Intent> {
        self.canvas
            .pointer_up(&mut self.workflow, &mut self.run, &PointerEvent::at(x, y))
    }

    fn key(&mut self, event: KeyEvent) -> Vec<Intent> {
        self.canvas.key(&mut self.workflow, &mut self.run, &event)
    }

    fn dispatch(&mut self, intent: Intent) {
        self.canvas.dispatch(&mut self.workflow, &mut self.run, intent);
    }

    fn drop_at(&mut self, x: f64, y: f64) -> Vec<Intent> {
        let agents = vec![agent("relay", &["In"], &["Out"])];
        self.canvas
            .drop_agents(&mut self.workflow, &mut self.run, agents, Point::new(x, y))
    }

    fn position(&self, node_id: &str) -> Point {
        self.workflow.node(node_id).unwrap().position
    }

    fn selected(&self) -> Vec<&str> {
        self.canvas.selection().ids().iter().map(String::as_str).collect()
    }
}

fn ctrl_wheel(delta_y: f64) -> WheelEvent {
    WheelEvent {
        delta_y,
        modifiers: Modifiers::CTRL,
    }
}

// --- Viewport ---

#[test]
fn test_zoom_is_clamped_after_many_wheel_events() {
    let mut h = Harness::new(empty_workflow());
    for _ in 0..1000 {
        h.canvas.wheel(&mut h.workflow, &mut h.run, &ctrl_wheel(-100.0));
    }
    assert_eq!(h.canvas.viewport().scale(), 2.0);

    for _ in 0..1000 {
        h.canvas.wheel(&mut h.workflow, &mut h.run, &ctrl_wheel(100.0));
    }
    assert_eq!(h.canvas.viewport().scale(), 0.1);
}

#[test]
fn test_wheel_without_ctrl_does_not_zoom() {
    let mut h = Harness::new(empty_workflow());
    let event = WheelEvent {
        delta_y: -100.0,
        modifiers: Modifiers::NONE,
    };
    assert!(h.canvas.wheel(&mut h.workflow, &mut h.run, &event).is_empty());
    assert_eq!(h.canvas.viewport().scale(), 1.0);
}

#[test]
fn test_zoom_buttons_use_narrower_bounds() {
    let mut h = Harness::new(empty_workflow());
    for _ in 0..20 {
        h.dispatch(Intent::ZoomOut);
    }
    assert_eq!(h.canvas.viewport().scale(), 0.5);
    assert_eq!(h.canvas.viewport().zoom_percent(), 50);

    for _ in 0..3 {
        h.dispatch(Intent::ZoomIn);
    }
    assert_eq!(h.canvas.viewport().zoom_percent(), 80);

    h.dispatch(Intent::ResetView);
    assert_eq!(*h.canvas.viewport(), Viewport::default());
}

#[test]
fn test_screen_canvas_conversion() {
    let mut viewport = Viewport::default();
    viewport.pan_to(Point::new(100.0, 50.0));
    viewport.set_scale(2.0, &EditorConfig::default().wheel_zoom);

    let canvas = viewport.screen_to_canvas(Point::new(300.0, 250.0));
    assert_point_eq(canvas, Point::new(100.0, 100.0));
    assert_point_eq(viewport.canvas_to_screen(canvas), Point::new(300.0, 250.0));
}

// --- Panning ---

#[test]
fn test_drag_on_empty_canvas_pans_without_moving_nodes() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::SelectNode("A".to_string()));

    let intents = h.down(PointerEvent::at(900.0, 500.0));
    assert_eq!(intents, vec![Intent::ClearSelection]);
    assert!(matches!(h.canvas.gesture(), Gesture::Panning { .. }));

    h.moved(920.0, 530.0);
    h.moved(950.0, 560.0);
    assert_eq!(h.canvas.viewport().offset(), Point::new(50.0, 60.0));
    assert_eq!(h.position("A"), Point::new(0.0, 0.0));
    assert!(h.canvas.selection().is_empty());

    h.up(950.0, 560.0);
    assert!(h.canvas.gesture().is_idle());
}

#[test]
fn test_middle_button_pans_and_secondary_does_nothing() {
    let mut h = Harness::new(empty_workflow());
    h.down(PointerEvent::at(10.0, 10.0).with_button(MouseButton::Secondary));
    assert!(h.canvas.gesture().is_idle());

    h.down(PointerEvent::at(10.0, 10.0).with_button(MouseButton::Middle));
    h.moved(15.0, 10.0);
    assert_eq!(h.canvas.viewport().offset(), Point::new(5.0, 0.0));
}

// --- Node dragging ---

#[test]
fn test_header_drag_moves_node_snapped_to_grid() {
    let mut h = Harness::new(chain_workflow());

    let intents = h.down(PointerEvent::at(10.0, 10.0));
    assert_eq!(intents, vec![Intent::SelectNode("A".to_string())]);
    assert!(matches!(h.canvas.gesture(), Gesture::NodeDragging { .. }));

    h.moved(37.0, 22.0);
    assert_eq!(h.position("A"), Point::new(20.0, 20.0));

    h.moved(41.0, 10.0);
    assert_eq!(h.position("A"), Point::new(40.0, 0.0));

    h.up(41.0, 10.0);
    assert!(h.canvas.gesture().is_idle());
    assert_eq!(h.position("A"), Point::new(40.0, 0.0));
    assert_eq!(h.selected(), vec!["A"]);
}

#[test]
fn test_drag_delta_is_divided_by_scale() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::ToggleSnap);
    for _ in 0..5 {
        h.dispatch(Intent::ZoomIn);
    }
    assert_eq!(h.canvas.viewport().scale(), 1.5);

    h.down(PointerEvent::at(15.0, 15.0));
    h.moved(45.0, 30.0);
    assert_point_eq(h.position("A"), Point::new(20.0, 10.0));
}

#[test]
fn test_drag_of_selected_node_moves_whole_selection() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::SetSelection(vec!["A".to_string(), "B".to_string()]));

    let intents = h.down(PointerEvent::at(10.0, 10.0));
    assert!(intents.is_empty());
    assert!(matches!(h.canvas.gesture(), Gesture::MultiDragging { .. }));

    h.moved(50.0, 30.0);
    assert_eq!(h.position("A"), Point::new(40.0, 20.0));
    assert_eq!(h.position("B"), Point::new(340.0, 20.0));
    assert_eq!(h.position("C"), Point::new(600.0, 0.0));
}

#[test]
fn test_shift_header_drag_adds_to_selection() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::SelectNode("A".to_string()));

    let intents = h.down(PointerEvent::at(310.0, 10.0).with_modifiers(Modifiers::SHIFT));
    assert_eq!(intents, vec![Intent::AddToSelection("B".to_string())]);
    assert_eq!(h.selected(), vec!["A", "B"]);
    assert_eq!(h.canvas.selection().primary(), Some("B"));

    h.moved(330.0, 30.0);
    assert_eq!(h.position("A"), Point::new(20.0, 20.0));
    assert_eq!(h.position("B"), Point::new(320.0, 20.0));
}

#[test]
fn test_body_click_selects_without_dragging() {
    let mut h = Harness::new(chain_workflow());
    let intents = h.down(PointerEvent::at(100.0, 70.0));
    assert_eq!(intents, vec![Intent::SelectNode("A".to_string())]);
    assert!(h.canvas.gesture().is_idle());

    h.moved(200.0, 200.0);
    assert_eq!(h.position("A"), Point::new(0.0, 0.0));
}

// --- Rubber band ---

#[test]
fn test_rubber_band_selects_nodes_inside_rectangle() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("near", 10.0, 10.0));
    workflow.add_node(node("far", 500.0, 500.0));
    let mut h = Harness::new(workflow);

    h.down(PointerEvent::at(0.0, 0.0).with_modifiers(Modifiers::SHIFT));
    assert!(h.canvas.gesture().rubber_band().is_some());

    h.moved(100.0, 100.0);
    assert_eq!(h.selected(), vec!["near"]);
    assert_eq!(h.canvas.selection().primary(), Some("near"));

    h.up(100.0, 100.0);
    assert!(h.canvas.gesture().is_idle());
    assert_eq!(h.selected(), vec!["near"]);
}

#[test]
fn test_rubber_band_recomputes_as_it_grows() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("near", 10.0, 10.0));
    workflow.add_node(node("far", 500.0, 500.0));
    let mut h = Harness::new(workflow);

    h.down(PointerEvent::at(0.0, 0.0).with_modifiers(Modifiers::SHIFT));
    h.moved(600.0, 600.0);
    assert_eq!(h.selected(), vec!["near", "far"]);
    assert_eq!(h.canvas.selection().primary(), None);

    h.moved(50.0, 50.0);
    assert_eq!(h.selected(), vec!["near"]);
}

#[test]
fn test_escape_cancels_rubber_band_before_clearing_selection() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("near", 10.0, 10.0));
    let mut h = Harness::new(workflow);

    h.down(PointerEvent::at(0.0, 0.0).with_modifiers(Modifiers::SHIFT));
    h.moved(100.0, 100.0);
    assert!(h.key(KeyEvent::new(Key::Escape)).is_empty());
    assert!(h.canvas.gesture().is_idle());
    assert_eq!(h.selected(), vec!["near"]);

    assert_eq!(h.key(KeyEvent::new(Key::Escape)), vec![Intent::ClearSelection]);
    assert!(h.canvas.selection().is_empty());
}

#[test]
fn test_escape_during_drag_clears_selection_but_keeps_dragging() {
    let mut h = Harness::new(chain_workflow());
    h.down(PointerEvent::at(10.0, 10.0));
    h.moved(37.0, 22.0);

    assert_eq!(h.key(KeyEvent::new(Key::Escape)), vec![Intent::ClearSelection]);
    assert!(h.canvas.selection().is_empty());
    assert!(matches!(h.canvas.gesture(), Gesture::NodeDragging { .. }));

    h.moved(41.0, 10.0);
    assert_eq!(h.position("A"), Point::new(40.0, 0.0));
    h.up(41.0, 10.0);
    assert!(h.canvas.gesture().is_idle());
}

// --- Connecting ---

#[test]
fn test_drag_from_output_to_input_connects() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("A", 0.0, 0.0));
    workflow.add_node(node("B", 300.0, 0.0));
    let mut h = Harness::new(workflow);

    h.down(PointerEvent::at(220.0, 30.0));
    let pending = h.canvas.gesture().pending_connection().cloned().unwrap();
    assert_eq!(pending.from.node_id, "A");
    assert_eq!(pending.anchor, Point::new(220.0, 30.0));

    h.moved(260.0, 40.0);
    let route = h.canvas.pending_route().unwrap();
    assert_eq!(route.start, Point::new(220.0, 30.0));
    assert_eq!(route.end, Point::new(260.0, 40.0));

    let intents = h.up(301.0, 31.0);
    assert_eq!(intents.len(), 1);
    assert!(h.canvas.gesture().is_idle());
    assert_eq!(h.workflow.connections.len(), 1);
    let connection = &h.workflow.connections[0];
    assert_eq!(connection.id, format!("connection-{}", T0));
    assert_eq!(connection.from.node_id, "A");
    assert_eq!(connection.to.node_id, "B");
    assert_eq!(connection.to.input, "In");
}

#[test]
fn test_connecting_to_own_input_is_rejected() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("A", 0.0, 0.0));
    let mut h = Harness::new(workflow);

    h.down(PointerEvent::at(220.0, 30.0));
    assert!(h.up(0.0, 30.0).is_empty());
    assert!(h.workflow.connections.is_empty());
    assert!(h.canvas.gesture().is_idle());

    h.dispatch(Intent::Connect {
        from: agentflow::workflow::OutputRef::new("A", "Out"),
        to: agentflow::workflow::InputRef::new("A", "In"),
    });
    assert!(h.workflow.connections.is_empty());
}

#[test]
fn test_release_elsewhere_cancels_connection() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("A", 0.0, 0.0));
    workflow.add_node(node("B", 300.0, 0.0));
    let mut h = Harness::new(workflow);

    h.down(PointerEvent::at(220.0, 30.0));
    assert!(h.up(1000.0, 1000.0).is_empty());
    assert!(h.workflow.connections.is_empty());
    assert!(h.canvas.pending_route().is_none());
}

#[test]
fn test_escape_cancels_pending_connection() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("A", 0.0, 0.0));
    workflow.add_node(node("B", 300.0, 0.0));
    let mut h = Harness::new(workflow);
    h.dispatch(Intent::SelectNode("B".to_string()));

    h.down(PointerEvent::at(220.0, 30.0));
    assert!(h.key(KeyEvent::new(Key::Escape)).is_empty());
    assert!(h.canvas.gesture().is_idle());
    assert_eq!(h.selected(), vec!["B"]);

    h.up(300.0, 30.0);
    assert!(h.workflow.connections.is_empty());
}

#[test]
fn test_reported_targets_take_precedence_over_hit_testing() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("A", 0.0, 0.0));
    workflow.add_node(node("B", 300.0, 0.0));
    let mut h = Harness::new(workflow);

    h.down(PointerEvent::at(5000.0, 5000.0).with_target(HitTarget::OutputPort {
        node_id: "A".to_string(),
        output: "Out".to_string(),
    }));
    h.canvas.pointer_up(
        &mut h.workflow,
        &mut h.run,
        &PointerEvent::at(-5000.0, 0.0).with_target(HitTarget::InputPort {
            node_id: "B".to_string(),
            input: "In".to_string(),
        }),
    );
    assert_eq!(h.workflow.connections.len(), 1);
}

// --- Hit testing ---

#[test]
fn test_hit_test_targets() {
    let workflow = chain_workflow();
    let layout = NodeLayout::default();

    assert_eq!(layout.hit_test(&workflow, Point::new(10.0, 10.0)), HitTarget::NodeHeader("A".to_string()));
    assert_eq!(layout.hit_test(&workflow, Point::new(100.0, 70.0)), HitTarget::NodeBody("A".to_string()));
    assert_eq!(
        layout.hit_test(&workflow, Point::new(225.0, 33.0)),
        HitTarget::OutputPort {
            node_id: "A".to_string(),
            output: "Out".to_string()
        }
    );
    assert_eq!(
        layout.hit_test(&workflow, Point::new(298.0, 30.0)),
        HitTarget::InputPort {
            node_id: "B".to_string(),
            input: "In".to_string()
        }
    );
    assert_eq!(layout.hit_test(&workflow, Point::new(260.0, 70.0)), HitTarget::Empty);
}

#[test]
fn test_later_nodes_are_hit_first() {
    let mut workflow = empty_workflow();
    workflow.add_node(node("under", 0.0, 0.0));
    workflow.add_node(node("over", 100.0, 20.0));
    let layout = NodeLayout::default();

    assert_eq!(layout.hit_test(&workflow, Point::new(150.0, 30.0)), HitTarget::NodeHeader("over".to_string()));
}

#[test]
fn test_port_anchors_follow_port_index() {
    let layout = NodeLayout::default();
    let node = agentflow::workflow::WorkflowNode::from_agent(
        "n".to_string(),
        &agent("multi", &["a", "b"], &["x", "y", "z"]),
        Point::new(100.0, 100.0),
    );
    assert_eq!(layout.input_anchor_named(&node, "b"), Some(Point::new(100.0, 150.0)));
    assert_eq!(layout.output_anchor_named(&node, "z"), Some(Point::new(320.0, 170.0)));
    assert_eq!(layout.output_anchor_named(&node, "missing"), None);
}

// --- Drop to place ---

#[test]
fn test_drop_snaps_and_selects_new_node() {
    let mut h = Harness::new(empty_workflow());

    h.drop_at(105.0, 93.0);

    let id = format!("node-{}", T0);
    assert_eq!(h.position(&id), Point::new(100.0, 100.0));
    assert_eq!(h.selected(), vec![id.as_str()]);
    assert_eq!(h.canvas.selection().primary(), Some(id.as_str()));
}

#[test]
fn test_drop_near_existing_node_is_nudged() {
    let mut h = Harness::new(empty_workflow());
    h.drop_at(100.0, 100.0);
    h.drop_at(110.0, 110.0);
    h.drop_at(1000.0, 1000.0);

    let positions: Vec<Point> = h.workflow.nodes.iter().map(|n| n.position).collect();
    assert_eq!(
        positions,
        vec![
            Point::new(100.0, 100.0),
            Point::new(170.0, 170.0),
            Point::new(1000.0, 1000.0)
        ]
    );
}

#[test]
fn test_drop_converts_screen_to_canvas_space() {
    let mut h = Harness::new(empty_workflow());
    h.dispatch(Intent::SetOffset(Point::new(200.0, 100.0)));

    h.drop_at(300.0, 300.0);
    assert_eq!(h.workflow.nodes[0].position, Point::new(100.0, 200.0));
}

#[test]
fn test_batch_drop_spreads_agents_and_selects_them_all() {
    let mut h = Harness::new(empty_workflow());
    let agents = vec![
        agent("one", &["In"], &["Out"]),
        agent("two", &["In"], &["Out"]),
        agent("three", &["In"], &["Out"]),
    ];

    h.canvas
        .drop_agents(&mut h.workflow, &mut h.run, agents, Point::new(100.0, 100.0));

    let ids: Vec<String> = (0..3).map(|i| format!("node-{}-{}", T0, i)).collect();
    assert_eq!(h.workflow.node_ids(), ids);
    assert_eq!(h.position(&ids[0]), Point::new(100.0, 100.0));
    assert_eq!(h.position(&ids[1]), Point::new(160.0, 160.0));
    assert_eq!(h.position(&ids[2]), Point::new(200.0, 200.0));
    assert_eq!(h.canvas.selection().len(), 3);
}

#[test]
fn test_empty_drop_is_ignored() {
    let mut h = Harness::new(empty_workflow());
    let intents = h
        .canvas
        .drop_agents(&mut h.workflow, &mut h.run, Vec::new(), Point::ORIGIN);
    assert!(intents.is_empty());
    assert!(h.workflow.nodes.is_empty());
}

#[test]
fn test_every_drop_adds_one_uniquely_named_node() {
    let mut h = Harness::new(empty_workflow());
    for i in 0..25 {
        h.drop_at((i % 5) as f64 * 30.0, (i / 5) as f64 * 30.0);
    }

    assert_eq!(h.workflow.nodes.len(), 25);
    let ids: HashSet<&str> = h.workflow.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), 25);
}

#[test]
fn test_custom_grid_size_from_config() {
    let config = EditorConfig::from_json(r#"{ "grid_size": 25.0 }"#).unwrap();
    let mut canvas = Canvas::builder().with_config(config).build();
    let mut workflow = empty_workflow();
    let mut run = RunState::default();

    canvas.drop_agents(
        &mut workflow,
        &mut run,
        vec![agent("relay", &["In"], &["Out"])],
        Point::new(30.0, 30.0),
    );
    assert_eq!(workflow.nodes[0].position, Point::new(25.0, 25.0));
}

// --- Selection operations ---

#[test]
fn test_delete_selection_cascades_and_clears() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::SelectNode("B".to_string()));

    assert_eq!(h.key(KeyEvent::new(Key::Delete)), vec![Intent::DeleteSelection]);

    assert_eq!(h.workflow.node_ids(), vec!["A", "C"]);
    assert!(h.workflow.connections.is_empty());
    assert!(h.canvas.selection().is_empty());
}

#[test]
fn test_delete_with_empty_selection_does_nothing() {
    let mut h = Harness::new(chain_workflow());
    assert!(h.key(KeyEvent::new(Key::Delete)).is_empty());
    assert_eq!(h.workflow.nodes.len(), 3);
}

#[test]
fn test_duplicate_offsets_clones_and_selects_them() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::SetSelection(vec!["A".to_string(), "B".to_string()]));

    h.key(KeyEvent::ctrl('d'));

    assert_eq!(h.workflow.nodes.len(), 5);
    assert_eq!(h.workflow.connections.len(), 2);
    let clone_a = format!("node-{}-0", T0);
    let clone_b = format!("node-{}-1", T0);
    assert_eq!(h.position(&clone_a), Point::new(50.0, 50.0));
    assert_eq!(h.position(&clone_b), Point::new(350.0, 50.0));
    assert_eq!(h.selected(), vec![clone_a.as_str(), clone_b.as_str()]);
    assert_eq!(h.workflow.node(&clone_a).unwrap().agent_type, "relay");
}

#[test]
fn test_run_toggle_applies_to_whole_selection() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::ToggleNodeRunning("A".to_string()));
    h.dispatch(Intent::SetSelection(vec!["A".to_string(), "B".to_string()]));

    h.dispatch(Intent::ToggleRunSelection);
    assert_eq!(h.run.running(), ["A", "B"]);

    h.dispatch(Intent::ToggleRunSelection);
    assert!(h.run.running().is_empty());
}

#[test]
fn test_removing_running_node_stops_it() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::SelectNode("B".to_string()));
    h.dispatch(Intent::ToggleNodeRunning("B".to_string()));

    h.dispatch(Intent::RemoveNode("B".to_string()));

    assert!(h.run.running().is_empty());
    assert!(h.canvas.selection().is_empty());
    assert!(h.workflow.connections.is_empty());
}

#[test]
fn test_intents_for_missing_targets_are_ignored() {
    let mut h = Harness::new(chain_workflow());
    let before = h.workflow.clone();

    h.dispatch(Intent::RemoveConnection("missing".to_string()));
    h.dispatch(Intent::RemoveNode("missing".to_string()));
    h.dispatch(Intent::SelectNode("missing".to_string()));
    h.dispatch(Intent::ToggleNodeRunning("missing".to_string()));
    h.dispatch(Intent::MoveNodes(vec![("missing".to_string(), Point::ORIGIN)]));

    assert_eq!(h.workflow, before);
    assert!(h.canvas.selection().is_empty());
    assert!(h.run.running().is_empty());
}

#[test]
fn test_remove_connection() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::RemoveConnection("ab".to_string()));
    let ids: Vec<_> = h.workflow.connections.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["bc"]);
}

// --- Shortcuts ---

#[test]
fn test_shortcut_bindings() {
    assert_eq!(Shortcut::from_key(&KeyEvent::new(Key::Delete)), Some(Shortcut::DeleteSelection));
    assert_eq!(Shortcut::from_key(&KeyEvent::new(Key::Escape)), Some(Shortcut::Cancel));
    assert_eq!(Shortcut::from_key(&KeyEvent::ctrl('d')), Some(Shortcut::DuplicateSelection));
    assert_eq!(Shortcut::from_key(&KeyEvent::ctrl('a')), Some(Shortcut::SelectAll));
    assert_eq!(Shortcut::from_key(&KeyEvent::ctrl('g')), Some(Shortcut::ToggleGrid));
    assert_eq!(Shortcut::from_key(&KeyEvent::ctrl('s')), Some(Shortcut::ToggleSnap));
    assert_eq!(Shortcut::from_key(&KeyEvent::new(Key::Char('a'))), None);
    assert_eq!(Shortcut::from_key(&KeyEvent::ctrl('x')), None);
}

#[test]
fn test_shortcuts_ignored_while_typing() {
    let mut h = Harness::new(chain_workflow());

    assert!(h.key(KeyEvent::ctrl('a').in_text_input()).is_empty());
    assert!(h.canvas.selection().is_empty());

    h.dispatch(Intent::SelectNode("A".to_string()));
    assert!(h.key(KeyEvent::new(Key::Delete).in_text_input()).is_empty());
    assert_eq!(h.workflow.nodes.len(), 3);
}

#[test]
fn test_select_all_and_grid_toggles() {
    let mut h = Harness::new(chain_workflow());

    h.key(KeyEvent::ctrl('a'));
    assert_eq!(h.selected(), vec!["A", "B", "C"]);

    assert!(h.canvas.grid().visible && h.canvas.grid().snap);
    h.key(KeyEvent::ctrl('g'));
    h.key(KeyEvent::ctrl('s'));
    assert!(!h.canvas.grid().visible);
    assert!(!h.canvas.grid().snap);
}

#[test]
fn test_update_node_data_intent() {
    let mut h = Harness::new(chain_workflow());
    h.dispatch(Intent::UpdateNodeData {
        node_id: "C".to_string(),
        patch: agentflow::catalog::AgentPatch {
            tags: Some(vec!["edited".to_string()]),
            ..Default::default()
        },
    });
    assert_eq!(h.workflow.node("C").unwrap().data.tags, vec!["edited"]);
}
