//! Reversible canvas operations
//!
//! Each command applies its forward effect with [`DesignerCommand::execute`]
//! and its exact inverse with [`DesignerCommand::undo`], restoring element
//! order and selection bit for bit. Operations on an id that is no longer
//! present degrade to no-ops rather than failing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{DesignerState, Position, Size, UIElement};

/// Snapshot of a removed element, recorded when a delete executes
///
/// Captured at execute time rather than construction so the restore stays
/// exact no matter how many other commands run before the undo.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeletedElement {
    pub element: UIElement,
    /// Z-order index the element occupied
    pub index: usize,
    /// Whether the element was selected at the moment it was removed
    pub was_selected: bool,
}

/// A reversible operation on the designer document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DesignerCommand {
    /// An element was placed on the canvas
    Add { element: UIElement },

    /// An element was removed from the canvas
    Delete {
        element_id: Uuid,
        /// Filled in by `execute`; `None` means there was nothing to delete
        /// and undo must not reinsert anything
        captured: Option<DeletedElement>,
    },

    /// An element's content or configuration was edited.
    /// `before` and `after` carry the same id.
    Update { before: UIElement, after: UIElement },

    /// An element was dragged to a new position
    Move {
        element_id: Uuid,
        from: Position,
        to: Position,
    },

    /// An element was resized
    Resize {
        element_id: Uuid,
        from: Size,
        to: Size,
    },

    /// An element was duplicated. The duplicate carries a fresh id minted by
    /// the caller before the command was built.
    Duplicate { original_id: Uuid, duplicate: UIElement },
}

impl DesignerCommand {
    /// Build a delete command; the snapshot is captured when it executes
    pub fn delete(element_id: Uuid) -> Self {
        DesignerCommand::Delete {
            element_id,
            captured: None,
        }
    }

    /// Human-readable label for undo/redo affordances
    ///
    /// Fixed by construction-time data: variants that carry an element name
    /// its kind, the others only hold an id and stay generic.
    pub fn description(&self) -> String {
        match self {
            DesignerCommand::Add { element } => format!("Add {}", element.kind.label()),
            DesignerCommand::Delete { .. } => "Delete element".to_string(),
            DesignerCommand::Update { after, .. } => format!("Edit {}", after.kind.label()),
            DesignerCommand::Move { .. } => "Move element".to_string(),
            DesignerCommand::Resize { .. } => "Resize element".to_string(),
            DesignerCommand::Duplicate { duplicate, .. } => {
                format!("Duplicate {}", duplicate.kind.label())
            }
        }
    }

    /// Apply the forward effect to the document
    pub fn execute(&mut self, state: &mut DesignerState) {
        match self {
            DesignerCommand::Add { element } => {
                state.elements.push(element.clone());
                state.selected_element_id = Some(element.id);
            }
            DesignerCommand::Delete {
                element_id,
                captured,
            } => {
                let index = match state.index_of(*element_id) {
                    Some(index) => index,
                    None => {
                        // Nothing to delete; leave no capture so undo no-ops too
                        *captured = None;
                        return;
                    }
                };
                let was_selected = state.selected_element_id == Some(*element_id);
                let element = state.elements.remove(index);
                if was_selected {
                    state.selected_element_id = None;
                }
                *captured = Some(DeletedElement {
                    element,
                    index,
                    was_selected,
                });
            }
            DesignerCommand::Update { after, .. } => {
                if let Some(slot) = state.element_mut(after.id) {
                    *slot = after.clone();
                }
            }
            DesignerCommand::Move { element_id, to, .. } => {
                if let Some(element) = state.element_mut(*element_id) {
                    element.position = *to;
                }
            }
            DesignerCommand::Resize { element_id, to, .. } => {
                if let Some(element) = state.element_mut(*element_id) {
                    element.size = *to;
                }
            }
            DesignerCommand::Duplicate { duplicate, .. } => {
                state.elements.push(duplicate.clone());
                state.selected_element_id = Some(duplicate.id);
            }
        }
    }

    /// Apply the exact inverse effect to the document
    pub fn undo(&self, state: &mut DesignerState) {
        match self {
            DesignerCommand::Add { element } => {
                state.elements.retain(|e| e.id != element.id);
                if state.selected_element_id == Some(element.id) {
                    state.selected_element_id = None;
                }
            }
            DesignerCommand::Delete { captured, .. } => {
                if let Some(captured) = captured {
                    // Clamp keeps the insert total if the document shrank
                    // since the capture was taken
                    let index = captured.index.min(state.elements.len());
                    state.elements.insert(index, captured.element.clone());
                    if captured.was_selected {
                        state.selected_element_id = Some(captured.element.id);
                    }
                }
            }
            DesignerCommand::Update { before, .. } => {
                if let Some(slot) = state.element_mut(before.id) {
                    *slot = before.clone();
                }
            }
            DesignerCommand::Move {
                element_id, from, ..
            } => {
                if let Some(element) = state.element_mut(*element_id) {
                    element.position = *from;
                }
            }
            DesignerCommand::Resize {
                element_id, from, ..
            } => {
                if let Some(element) = state.element_mut(*element_id) {
                    element.size = *from;
                }
            }
            DesignerCommand::Duplicate {
                original_id,
                duplicate,
            } => {
                let was_selected = state.selected_element_id == Some(duplicate.id);
                state.elements.retain(|e| e.id != duplicate.id);
                if was_selected {
                    state.selected_element_id = if state.contains_element(*original_id) {
                        Some(*original_id)
                    } else {
                        None
                    };
                }
            }
        }
    }
}
