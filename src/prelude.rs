//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts need to drive a workspace.
//!
//! # Example
//!
//! ```rust,no_run
//! use agentflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut workspace = Workspace::builder()
//!     .with_config(EditorConfig::from_file("editor.json")?)
//!     .build();
//! workspace.import_from_path("marketing.json")?;
//! workspace.wheel(&WheelEvent { delta_y: -120.0, modifiers: Modifiers::CTRL });
//! println!("{}%", workspace.canvas().viewport().zoom_percent());
//! # Ok(())
//! # }
//! ```

// State containers
pub use crate::canvas::Canvas;
pub use crate::workspace::{Overlay, Panels, Workspace};

// Input and intents
pub use crate::canvas::{
    HitTarget, Intent, Key, KeyEvent, KeyFocus, Modifiers, MouseButton, PointerEvent, Shortcut,
    WheelEvent,
};

// Data model
pub use crate::catalog::{Agent, AgentDraft, AgentFilter, AgentPatch, Catalog};
pub use crate::geometry::{Point, Rect, Size};
pub use crate::run::RunState;
pub use crate::workflow::{Connection, InputRef, OutputRef, Workflow, WorkflowNode, WorkflowTemplate};

// Configuration and persistence
pub use crate::config::EditorConfig;
pub use crate::preferences::{FileFlagStore, FlagStore, MemoryFlagStore};

// Error types
pub use crate::error::{ExportError, ImportError, ValidationError, WorkspaceError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
