// Tests for the history capacity bound: the stack never grows past its
// limit, hitting the cap evicts exactly the oldest entry, and the cursor
// never underflows as a result.

use designer_wasm::models::{DesignerState, ElementKind, Position, UIElement};
use designer_wasm::undo::{CommandHistory, DesignerCommand, MAX_HISTORY_SIZE};
use uuid::Uuid;

fn add_command(kind: ElementKind, x: f64) -> DesignerCommand {
    DesignerCommand::Add {
        element: UIElement::with_defaults(Uuid::new_v4(), kind, Position::new(x, 0.0)),
    }
}

#[test]
fn test_three_commands_into_capacity_two() {
    // With max_size = 2, executing three commands keeps only the last
    // two undoable; a third undo refuses.
    let mut history = CommandHistory::new(2);
    let mut state = DesignerState::new();

    assert!(history.execute(add_command(ElementKind::Button, 0.0), &mut state));
    assert!(history.execute(add_command(ElementKind::Text, 50.0), &mut state));
    assert!(history.execute(add_command(ElementKind::Input, 100.0), &mut state));

    assert_eq!(history.len(), 2);
    assert_eq!(history.undo_count(), 2);
    assert_eq!(state.element_count(), 3);

    assert!(history.undo(&mut state));
    assert!(history.undo(&mut state));
    assert!(!history.undo(&mut state));

    // C1's element survives: its command was evicted, not reverted
    assert_eq!(state.element_count(), 1);
    assert_eq!(history.undo_count(), 0);
    assert_eq!(history.redo_count(), 2);
}

#[test]
fn test_capacity_is_never_exceeded() {
    let mut history = CommandHistory::new(4);
    let mut state = DesignerState::new();

    for i in 0..20 {
        history.execute(add_command(ElementKind::Button, i as f64), &mut state);
        assert!(history.len() <= 4, "stack grew past its limit");
        assert!(history.undo_count() <= history.len());
    }
    assert_eq!(history.len(), 4);
    assert_eq!(state.element_count(), 20);
}

#[test]
fn test_eviction_drops_the_oldest_entry_only() {
    let mut history = CommandHistory::new(2);
    let mut state = DesignerState::new();

    history.execute(add_command(ElementKind::Button, 0.0), &mut state);
    history.execute(add_command(ElementKind::Text, 50.0), &mut state);
    history.execute(add_command(ElementKind::Image, 100.0), &mut state);

    // The oldest surviving command is the Text add, so after two undos
    // the Button element is the one left standing
    assert!(history.undo(&mut state));
    assert!(history.undo(&mut state));
    assert_eq!(state.element_count(), 1);
    assert_eq!(state.elements[0].kind, ElementKind::Button);
}

#[test]
fn test_redo_after_cap_eviction_replays_the_survivors() {
    let mut history = CommandHistory::new(2);
    let mut state = DesignerState::new();

    history.execute(add_command(ElementKind::Button, 0.0), &mut state);
    history.execute(add_command(ElementKind::Text, 50.0), &mut state);
    history.execute(add_command(ElementKind::Image, 100.0), &mut state);

    history.undo(&mut state);
    history.undo(&mut state);
    assert_eq!(history.redo_count(), 2);

    assert!(history.redo(&mut state));
    assert!(history.redo(&mut state));
    assert!(!history.redo(&mut state));
    assert_eq!(state.element_count(), 3);
}

#[test]
fn test_new_command_after_undo_discards_the_branch_at_capacity() {
    let mut history = CommandHistory::new(3);
    let mut state = DesignerState::new();

    history.execute(add_command(ElementKind::Button, 0.0), &mut state);
    history.execute(add_command(ElementKind::Text, 50.0), &mut state);
    history.execute(add_command(ElementKind::Input, 100.0), &mut state);
    history.undo(&mut state);
    history.undo(&mut state);

    // Two redoable entries pending; the new command discards them, so
    // no eviction happens and everything applied stays undoable
    history.execute(add_command(ElementKind::Image, 150.0), &mut state);
    assert_eq!(history.len(), 2);
    assert_eq!(history.undo_count(), 2);
    assert_eq!(history.redo_count(), 0);
    assert!(!history.redo(&mut state));
}

#[test]
fn test_default_capacity_matches_the_documented_constant() {
    let mut history = CommandHistory::default();
    let mut state = DesignerState::new();

    for i in 0..(MAX_HISTORY_SIZE + 10) {
        history.execute(add_command(ElementKind::Button, i as f64), &mut state);
    }
    assert_eq!(history.len(), MAX_HISTORY_SIZE);
    assert_eq!(history.undo_count(), MAX_HISTORY_SIZE);
}

#[test]
fn test_boundary_calls_are_noops_not_errors() {
    let mut history = CommandHistory::new(2);
    let mut state = DesignerState::new();
    let pristine = state.clone();

    // Empty history: undo and redo both refuse and leave the state alone
    assert!(!history.undo(&mut state));
    assert!(!history.redo(&mut state));
    assert_eq!(state, pristine);
    assert_eq!(history.undo_description(), None);
    assert_eq!(history.redo_description(), None);

    // Fully applied: redo refuses
    history.execute(add_command(ElementKind::Button, 0.0), &mut state);
    assert!(!history.redo(&mut state));

    // Fully undone: undo refuses
    history.undo(&mut state);
    assert!(!history.undo(&mut state));
}
