//! Designer session: one document plus its command history
//!
//! Every mutation goes through [`CommandHistory`] so the host gets uniform
//! undo/redo over the whole editing session. Selection changes are the one
//! exception: clicking around the canvas is not an edit and never lands on
//! the history stack.

use uuid::Uuid;

use crate::models::{DesignError, DesignerState, ElementKind, Position, Size, UIElement};
use crate::undo::{CommandHistory, DesignerCommand};

/// Offset applied to a duplicated element so it does not sit exactly on top
/// of its original
pub const DUPLICATE_OFFSET: f64 = 10.0;

/// An open design document and the undo history of its edits
#[derive(Debug, Default)]
pub struct DesignerSession {
    state: DesignerState,
    history: CommandHistory,
}

impl DesignerSession {
    /// Start a session on an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session keeping at most `max_history` undoable commands
    pub fn with_history_limit(max_history: usize) -> Self {
        Self {
            state: DesignerState::new(),
            history: CommandHistory::new(max_history),
        }
    }

    /// Current document
    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    /// Add a fresh element of `kind` at `position` and select it
    ///
    /// Returns the id minted for the new element.
    pub fn add_element(&mut self, kind: ElementKind, position: Position) -> Uuid {
        let id = Uuid::new_v4();
        let element = UIElement::with_defaults(id, kind, position);
        log::debug!("add {} {}", kind.label(), id);
        self.history
            .execute(DesignerCommand::Add { element }, &mut self.state);
        id
    }

    /// Delete an element by id
    ///
    /// Returns false without recording anything when the id is unknown.
    pub fn delete_element(&mut self, id: Uuid) -> bool {
        if !self.state.contains_element(id) {
            log::debug!("delete ignored, no element {}", id);
            return false;
        }
        self.history
            .execute(DesignerCommand::delete(id), &mut self.state)
    }

    /// Replace an element with an edited version carrying the same id
    ///
    /// Returns false without recording anything when the id is unknown.
    pub fn update_element(&mut self, after: UIElement) -> bool {
        let before = match self.state.element(after.id) {
            Some(existing) => existing.clone(),
            None => {
                log::debug!("update ignored, no element {}", after.id);
                return false;
            }
        };
        self.history
            .execute(DesignerCommand::Update { before, after }, &mut self.state)
    }

    /// Move an element to a new position
    pub fn move_element(&mut self, id: Uuid, to: Position) -> bool {
        let from = match self.state.element(id) {
            Some(existing) => existing.position,
            None => return false,
        };
        self.history.execute(
            DesignerCommand::Move {
                element_id: id,
                from,
                to,
            },
            &mut self.state,
        )
    }

    /// Resize an element
    pub fn resize_element(&mut self, id: Uuid, to: Size) -> bool {
        let from = match self.state.element(id) {
            Some(existing) => existing.size,
            None => return false,
        };
        self.history.execute(
            DesignerCommand::Resize {
                element_id: id,
                from,
                to,
            },
            &mut self.state,
        )
    }

    /// Clone an element, offset the copy and select it
    ///
    /// Returns the id of the copy, or None when the original is unknown.
    pub fn duplicate_element(&mut self, id: Uuid) -> Option<Uuid> {
        let mut duplicate = self.state.element(id)?.clone();
        duplicate.id = Uuid::new_v4();
        duplicate.position.x += DUPLICATE_OFFSET;
        duplicate.position.y += DUPLICATE_OFFSET;
        let duplicate_id = duplicate.id;
        log::debug!("duplicate {} -> {}", id, duplicate_id);
        self.history.execute(
            DesignerCommand::Duplicate {
                original_id: id,
                duplicate,
            },
            &mut self.state,
        );
        Some(duplicate_id)
    }

    /// Select an element; false when the id is unknown. Not undoable.
    pub fn select_element(&mut self, id: Uuid) -> bool {
        self.state.select(Some(id))
    }

    /// Drop the selection. Not undoable.
    pub fn clear_selection(&mut self) {
        self.state.select(None);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.state)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.state)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    /// Drop the undo history while keeping the document as it is
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Throw away the document and the history
    pub fn reset(&mut self) {
        self.state.clear();
        self.history.clear();
    }

    /// Replace the document with a validated state, starting history afresh
    pub fn load_design(&mut self, state: DesignerState) -> Result<(), DesignError> {
        state.validate()?;
        self.state = state;
        self.history.clear();
        log::info!("loaded design with {} elements", self.state.element_count());
        Ok(())
    }

    /// Parse a design from its JSON form and load it
    pub fn import_design(&mut self, json: &str) -> Result<(), DesignError> {
        let state: DesignerState =
            serde_json::from_str(json).map_err(|e| DesignError::InvalidJson(e.to_string()))?;
        self.load_design(state)
    }

    /// Serialize the current document to JSON
    pub fn export_design(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_selects_the_new_element() {
        let mut session = DesignerSession::new();
        let id = session.add_element(ElementKind::Button, Position::new(10.0, 20.0));

        assert_eq!(session.state().element_count(), 1);
        assert_eq!(session.state().selected_element_id, Some(id));
        assert_eq!(session.undo_description(), Some("Add Button".to_string()));
    }

    #[test]
    fn delete_unknown_id_records_nothing() {
        let mut session = DesignerSession::new();
        session.add_element(ElementKind::Text, Position::new(0.0, 0.0));

        assert!(!session.delete_element(Uuid::new_v4()));
        assert_eq!(session.undo_count(), 1);
        assert_eq!(session.state().element_count(), 1);
    }

    #[test]
    fn update_replaces_in_place_and_undoes() {
        let mut session = DesignerSession::new();
        let id = session.add_element(ElementKind::Input, Position::new(5.0, 5.0));

        let mut edited = session.state().element(id).cloned().expect("element exists");
        edited.name = "Email".to_string();
        assert!(session.update_element(edited));
        assert_eq!(session.state().element(id).map(|e| e.name.as_str()), Some("Email"));

        session.undo();
        assert_eq!(session.state().element(id).map(|e| e.name.as_str()), Some("Input"));
    }

    #[test]
    fn update_unknown_id_records_nothing() {
        let mut session = DesignerSession::new();
        let stray = UIElement::with_defaults(
            Uuid::new_v4(),
            ElementKind::Button,
            Position::new(0.0, 0.0),
        );

        assert!(!session.update_element(stray));
        assert_eq!(session.undo_count(), 0);
    }

    #[test]
    fn move_and_resize_round_trip_through_undo() {
        let mut session = DesignerSession::new();
        let id = session.add_element(ElementKind::Image, Position::new(0.0, 0.0));

        assert!(session.move_element(id, Position::new(50.0, 60.0)));
        assert!(session.resize_element(id, Size::new(300.0, 200.0)));

        session.undo();
        let element = session.state().element(id).cloned().unwrap();
        assert_eq!(element.size, ElementKind::Image.default_size());
        assert_eq!(element.position, Position::new(50.0, 60.0));

        session.undo();
        let element = session.state().element(id).cloned().unwrap();
        assert_eq!(element.position, Position::new(0.0, 0.0));
    }

    #[test]
    fn duplicate_offsets_copy_and_selects_it() {
        let mut session = DesignerSession::new();
        let original = session.add_element(ElementKind::MapView, Position::new(100.0, 100.0));

        let copy = session.duplicate_element(original).expect("copy created");
        assert_ne!(copy, original);
        assert_eq!(session.state().element_count(), 2);
        assert_eq!(session.state().selected_element_id, Some(copy));

        let copied = session.state().element(copy).unwrap();
        assert_eq!(copied.position, Position::new(110.0, 110.0));

        session.undo();
        assert_eq!(session.state().element_count(), 1);
        assert_eq!(session.state().selected_element_id, Some(original));
    }

    #[test]
    fn duplicate_unknown_id_returns_none() {
        let mut session = DesignerSession::new();
        assert_eq!(session.duplicate_element(Uuid::new_v4()), None);
        assert_eq!(session.undo_count(), 0);
    }

    #[test]
    fn selection_is_not_undoable() {
        let mut session = DesignerSession::new();
        let a = session.add_element(ElementKind::Button, Position::new(0.0, 0.0));
        let b = session.add_element(ElementKind::Text, Position::new(40.0, 0.0));

        assert!(session.select_element(a));
        session.clear_selection();
        assert!(session.select_element(b));
        assert_eq!(session.undo_count(), 2);

        assert!(!session.select_element(Uuid::new_v4()));
        assert_eq!(session.state().selected_element_id, Some(b));
    }

    #[test]
    fn export_then_import_restores_the_document() {
        let mut session = DesignerSession::new();
        let id = session.add_element(ElementKind::Button, Position::new(30.0, 40.0));
        session.move_element(id, Position::new(90.0, 40.0));

        let json = session.export_design().unwrap();

        let mut restored = DesignerSession::new();
        restored.import_design(&json).unwrap();
        assert_eq!(restored.state().elements, session.state().elements);
        assert_eq!(restored.state().selected_element_id, Some(id));
        // Imported documents start with a clean history
        assert!(!restored.can_undo());
    }

    #[test]
    fn import_rejects_malformed_json() {
        let mut session = DesignerSession::new();
        let err = session.import_design("{not json").unwrap_err();
        assert!(matches!(err, DesignError::InvalidJson(_)));
        assert_eq!(session.state().element_count(), 0);
    }

    #[test]
    fn reset_drops_document_and_history() {
        let mut session = DesignerSession::new();
        session.add_element(ElementKind::Text, Position::new(0.0, 0.0));
        session.reset();

        assert_eq!(session.state().element_count(), 0);
        assert_eq!(session.state().selected_element_id, None);
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn clear_history_keeps_the_document() {
        let mut session = DesignerSession::new();
        session.add_element(ElementKind::Button, Position::new(0.0, 0.0));
        session.clear_history();

        assert_eq!(session.state().element_count(), 1);
        assert!(!session.can_undo());
    }
}
