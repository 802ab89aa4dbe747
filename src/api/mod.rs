//! JavaScript-facing API surface
//!
//! Thin `wasm_bindgen` endpoints over [`crate::session::DesignerSession`].
//! The endpoints translate between JavaScript values and the document model
//! and hold the one WASM-side session the host talks to.

pub mod core;
pub mod helpers;

pub use core::*;
