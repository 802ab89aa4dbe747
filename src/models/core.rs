//! Core data structures for the designer document
//!
//! This module defines the canvas document model: placed elements with
//! position, size and kind-specific configuration, plus the single selection
//! reference. The model is only ever mutated through the command machinery in
//! [`crate::undo`]; the host reads snapshots and issues gestures.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::elements::{ElementConfig, ElementKind};

/// A point on the design canvas, in canvas coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of a placed element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A single component placed on the design canvas
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UIElement {
    /// Stable identity, assigned once at creation and never reused
    pub id: Uuid,

    /// Component kind; drives rendering, palette defaults and history labels
    pub kind: ElementKind,

    /// Top-left corner in canvas coordinates
    pub position: Position,

    /// Width and height on the canvas
    pub size: Size,

    /// Display name shown in the host's layers panel
    pub name: String,

    /// Kind-specific settings, carried verbatim by the history machinery
    pub config: ElementConfig,
}

impl UIElement {
    /// Create an element of the given kind with its palette defaults
    pub fn with_defaults(id: Uuid, kind: ElementKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            size: kind.default_size(),
            name: kind.label().to_string(),
            config: kind.default_config(),
        }
    }

    /// Whether the point lies inside this element's bounds
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.position.x
            && x <= self.position.x + self.size.width
            && y >= self.position.y
            && y <= self.position.y + self.size.height
    }
}

/// The designer document: placed elements plus the current selection
///
/// `elements` order is z-order (last entry renders on top) and must survive
/// undo/redo exactly. `selected_element_id`, when set, always names an element
/// present in `elements`; commands that remove the selected element clear it
/// in the same state transition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DesignerState {
    pub elements: Vec<UIElement>,
    pub selected_element_id: Option<Uuid>,
}

impl DesignerState {
    /// Create a new empty design
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an element by id
    pub fn element(&self, id: Uuid) -> Option<&UIElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Look up an element by id, mutably
    pub fn element_mut(&mut self, id: Uuid) -> Option<&mut UIElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Z-order index of an element
    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Whether an element with this id is present
    pub fn contains_element(&self, id: Uuid) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    /// Number of placed elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Topmost element whose bounds contain the point, if any
    pub fn element_at(&self, x: f64, y: f64) -> Option<&UIElement> {
        self.elements.iter().rev().find(|e| e.contains(x, y))
    }

    /// The currently selected element, if any
    pub fn selected_element(&self) -> Option<&UIElement> {
        self.selected_element_id.and_then(|id| self.element(id))
    }

    /// Set or clear the selection. `Some(id)` is rejected (returning false)
    /// when no such element exists, so the selection reference stays valid.
    pub fn select(&mut self, id: Option<Uuid>) -> bool {
        match id {
            Some(id) if !self.contains_element(id) => false,
            _ => {
                self.selected_element_id = id;
                true
            }
        }
    }

    /// Remove all elements and clear the selection
    pub fn clear(&mut self) {
        self.elements.clear();
        self.selected_element_id = None;
    }

    /// Validate an externally supplied design before accepting it
    ///
    /// Command ownership assumes element ids are disjoint, and the selection
    /// must reference a present element, so both are checked up front rather
    /// than surfacing as history corruption later.
    pub fn validate(&self) -> Result<(), DesignError> {
        let mut seen = HashSet::with_capacity(self.elements.len());
        for element in &self.elements {
            if !seen.insert(element.id) {
                return Err(DesignError::DuplicateElementId(element.id));
            }
        }
        if let Some(id) = self.selected_element_id {
            if !seen.contains(&id) {
                return Err(DesignError::DanglingSelection(id));
            }
        }
        Ok(())
    }
}

/// Errors raised when accepting an externally supplied design
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    /// The design JSON could not be parsed
    #[error("invalid design JSON: {0}")]
    InvalidJson(String),

    /// Two elements share an id
    #[error("duplicate element id {0}")]
    DuplicateElementId(Uuid),

    /// The recorded selection names an element that is not in the design
    #[error("selected element {0} is not part of the design")]
    DanglingSelection(Uuid),
}
