// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editing session for nodeshade graphs.
//!
//! Wraps a [`nodeshade_graph::Graph`] with checkpoint-based undo/redo,
//! save files and RON settings. Rendering and input handling live elsewhere;
//! this crate only owns the state a frontend mutates.

pub mod error;
pub mod logging;
pub mod session;
pub mod settings;

pub use error::{EditorError, Result};
pub use logging::init_logging;
pub use session::EditorSession;
pub use settings::EditorSettings;
