//! Editor models
//!
//! - `editor_state`: document text and the navigation state derived from it
//! - `export`: download descriptors for the export menu

pub mod editor_state;
pub mod export;

pub use editor_state::EditorState;
pub use export::{ExportFormat, ExportedFile};
