//! # agentflow - Visual Agent Workflow Editor Core
//!
//! **agentflow** is the headless core of a visual workflow builder: users drag
//! "agent" cards onto an unbounded canvas, wire outputs to inputs, and watch a
//! simulated run. Rendering is left to the host; this crate owns the state and
//! every rule that changes it.
//!
//! ## Core Workflow
//!
//! 1.  **Build a workspace**: `Workspace::builder()` creates the state container
//!     with the built-in agent catalog and template gallery.
//! 2.  **Feed it input**: forward pointer, wheel, key and drop events. The
//!     canvas's `InteractionController` turns them into `Intent`s and a single
//!     reducer (`Canvas::dispatch`) applies them to the active workflow.
//! 3.  **Render**: read back the workflow, viewport, selection, routed
//!     connections and mini-map projection.
//! 4.  **Persist**: export the active workflow as JSON and import it again.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agentflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut workspace = Workspace::builder().build();
//!
//!     // Drop two catalog agents onto the canvas.
//!     workspace.drop_agents(&["meeting-summarizer"], Point::new(100.0, 100.0));
//!     workspace.drop_agents(&["smart-email-manager"], Point::new(400.0, 100.0));
//!
//!     // Drag from the first node's "Summary" output to the second node's
//!     // "Summary" input.
//!     let from = workspace.active().nodes[0].id.clone();
//!     let to = workspace.active().nodes[1].id.clone();
//!     workspace.pointer_down(&PointerEvent::at(0.0, 0.0).with_target(HitTarget::OutputPort {
//!         node_id: from,
//!         output: "Summary".to_string(),
//!     }));
//!     workspace.pointer_up(&PointerEvent::at(0.0, 0.0).with_target(HitTarget::InputPort {
//!         node_id: to,
//!         input: "Summary".to_string(),
//!     }));
//!
//!     println!("{}", workspace.canvas().status(workspace.active()));
//!
//!     let (file_name, json) = workspace.export_active()?;
//!     std::fs::write(file_name, json)?;
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod prelude;
pub mod preferences;
pub mod run;
pub mod simulation;
pub mod workflow;
pub mod workspace;
