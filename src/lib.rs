//! UI Designer WASM Module
//!
//! Canvas document model and undo/redo command engine for the visual UI
//! designer. The host application renders the canvas and forwards edits;
//! this module owns the document, records every edit as an undoable
//! command, and hands element snapshots back for rendering.

pub mod api;
pub mod models;
pub mod session;
pub mod undo;

// Re-export commonly used types
pub use models::core::*;
pub use models::elements::*;
pub use session::DesignerSession;
pub use undo::{CommandHistory, DesignerCommand, MAX_HISTORY_SIZE};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("UI Designer WASM module initialized");
}
