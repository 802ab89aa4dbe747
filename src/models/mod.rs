//! Data models for the designer document
//!
//! This module contains the canvas document model and the element kind
//! catalog used throughout the designer core.

pub mod core;
pub mod elements;

// Re-export commonly used types
pub use core::*;
pub use elements::*;
