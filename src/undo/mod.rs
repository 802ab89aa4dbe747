//! Undo/redo machinery for the designer canvas
//!
//! Every reversible canvas operation (placing, deleting, editing, moving,
//! resizing or duplicating an element) is expressed as a [`DesignerCommand`].
//! [`CommandHistory`] executes commands against the document and keeps the
//! bounded linear history behind the host's undo/redo buttons.
//!
//! Commands are the only mutation path into the document model: the host
//! never edits the element list directly, which is what keeps history
//! replays exact.
//!
//! ## Module Structure
//!
//! - [`commands`] - the reversible operations and their inverse effects
//! - [`history`] - the bounded stack-and-cursor engine

mod commands;
mod history;

// Re-exports
pub use commands::{DeletedElement, DesignerCommand};
pub use history::CommandHistory;

/// Maximum number of commands kept in history by default
pub const MAX_HISTORY_SIZE: usize = 100;
