//! WASM API for the designer session
//!
//! This module provides the JavaScript-facing API over the canvas document
//! and its undo/redo history. The session lives on the WASM side as the
//! canonical source of truth; the host reads element snapshots back for
//! rendering and never mutates them directly.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, parse_id, serialize};
use crate::models::{DesignerState, ElementKind, Position, Size, UIElement};
use crate::session::DesignerSession;

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Option<DesignerSession>> = Mutex::new(None);
}

/// Run `f` against the active session, or fail if none was started
fn with_session<T>(f: impl FnOnce(&mut DesignerSession) -> Result<T, JsValue>) -> Result<T, JsValue> {
    let mut guard = SESSION.lock().unwrap();
    let session = guard
        .as_mut()
        .ok_or_else(|| js_error("no active design session; call newDesign() first"))?;
    f(session)
}

// ============================================================================
// Session lifecycle
// ============================================================================

/// Start a new empty design, replacing any session already open
#[wasm_bindgen(js_name = newDesign)]
pub fn new_design() {
    log::info!("newDesign called");
    let mut guard = SESSION.lock().unwrap();
    *guard = Some(DesignerSession::new());
}

/// Clear the current design and its history, keeping the session open
#[wasm_bindgen(js_name = resetDesign)]
pub fn reset_design() -> Result<(), JsValue> {
    log::info!("resetDesign called");
    with_session(|session| {
        session.reset();
        Ok(())
    })
}

/// Load a design object, replacing the document and starting history afresh
#[wasm_bindgen(js_name = loadDesign)]
pub fn load_design(design_js: JsValue) -> Result<(), JsValue> {
    log::info!("loadDesign called");
    let state: DesignerState = deserialize(design_js, "failed to deserialize design")?;

    let mut session = DesignerSession::new();
    session
        .load_design(state)
        .map_err(|e| js_error(format!("failed to load design: {}", e)))?;

    let mut guard = SESSION.lock().unwrap();
    *guard = Some(session);
    Ok(())
}

/// Load a design from its JSON string form
#[wasm_bindgen(js_name = importDesign)]
pub fn import_design(json: &str) -> Result<(), JsValue> {
    log::info!("importDesign called: {} bytes", json.len());

    let mut session = DesignerSession::new();
    session
        .import_design(json)
        .map_err(|e| js_error(format!("failed to import design: {}", e)))?;

    let mut guard = SESSION.lock().unwrap();
    *guard = Some(session);
    Ok(())
}

/// Serialize the current design to a JSON string
#[wasm_bindgen(js_name = exportDesign)]
pub fn export_design() -> Result<String, JsValue> {
    with_session(|session| {
        session
            .export_design()
            .map_err(|e| js_error(format!("failed to export design: {}", e)))
    })
}

/// Snapshot of the whole design document as a JavaScript object
#[wasm_bindgen(js_name = getDesign)]
pub fn get_design() -> Result<JsValue, JsValue> {
    with_session(|session| serialize(session.state(), "failed to serialize design"))
}

// ============================================================================
// Element operations
// ============================================================================

/// Add a fresh element of `kind` at canvas coordinates, selecting it
///
/// Returns the id of the new element.
#[wasm_bindgen(js_name = addElement)]
pub fn add_element(kind: ElementKind, x: f64, y: f64) -> Result<String, JsValue> {
    log::info!("addElement called: kind={:?}, x={}, y={}", kind, x, y);
    with_session(|session| {
        let id = session.add_element(kind, Position::new(x, y));
        Ok(id.to_string())
    })
}

/// Delete an element by id; false when the id names nothing
#[wasm_bindgen(js_name = deleteElement)]
pub fn delete_element(id: &str) -> Result<bool, JsValue> {
    log::info!("deleteElement called: id={}", id);
    let id = parse_id(id)?;
    with_session(|session| Ok(session.delete_element(id)))
}

/// Replace an element with an edited version carrying the same id
#[wasm_bindgen(js_name = updateElement)]
pub fn update_element(element_js: JsValue) -> Result<bool, JsValue> {
    log::info!("updateElement called");
    let element: UIElement = deserialize(element_js, "failed to deserialize element")?;
    with_session(|session| Ok(session.update_element(element)))
}

/// Move an element to new canvas coordinates
#[wasm_bindgen(js_name = moveElement)]
pub fn move_element(id: &str, x: f64, y: f64) -> Result<bool, JsValue> {
    log::info!("moveElement called: id={}, x={}, y={}", id, x, y);
    let id = parse_id(id)?;
    with_session(|session| Ok(session.move_element(id, Position::new(x, y))))
}

/// Resize an element
#[wasm_bindgen(js_name = resizeElement)]
pub fn resize_element(id: &str, width: f64, height: f64) -> Result<bool, JsValue> {
    log::info!("resizeElement called: id={}, width={}, height={}", id, width, height);
    let id = parse_id(id)?;
    with_session(|session| Ok(session.resize_element(id, Size::new(width, height))))
}

/// Duplicate an element; the offset copy becomes the selection
///
/// Returns the id of the copy, or null when the original is unknown.
#[wasm_bindgen(js_name = duplicateElement)]
pub fn duplicate_element(id: &str) -> Result<Option<String>, JsValue> {
    log::info!("duplicateElement called: id={}", id);
    let id = parse_id(id)?;
    with_session(|session| Ok(session.duplicate_element(id).map(|copy| copy.to_string())))
}

/// All placed elements in z-order, bottom first
#[wasm_bindgen]
pub fn elements() -> Result<js_sys::Array, JsValue> {
    with_session(|session| {
        let result = js_sys::Array::new();
        for element in &session.state().elements {
            let element_js = serialize(element, "failed to serialize element")?;
            result.push(&element_js);
        }
        Ok(result)
    })
}

/// Topmost element under the point, or null when the canvas is bare there
#[wasm_bindgen(js_name = elementAt)]
pub fn element_at(x: f64, y: f64) -> Result<JsValue, JsValue> {
    with_session(|session| match session.state().element_at(x, y) {
        Some(element) => serialize(element, "failed to serialize element"),
        None => Ok(JsValue::NULL),
    })
}

// ============================================================================
// Selection
// ============================================================================

/// Select an element; false when the id names nothing. Not undoable.
#[wasm_bindgen(js_name = selectElement)]
pub fn select_element(id: &str) -> Result<bool, JsValue> {
    log::debug!("selectElement called: id={}", id);
    let id = parse_id(id)?;
    with_session(|session| Ok(session.select_element(id)))
}

/// Drop the selection. Not undoable.
#[wasm_bindgen(js_name = clearSelection)]
pub fn clear_selection() -> Result<(), JsValue> {
    log::debug!("clearSelection called");
    with_session(|session| {
        session.clear_selection();
        Ok(())
    })
}

/// Id of the selected element, or null when nothing is selected
#[wasm_bindgen(js_name = selectedElementId)]
pub fn selected_element_id() -> Result<Option<String>, JsValue> {
    with_session(|session| {
        Ok(session
            .state()
            .selected_element_id
            .map(|id| id.to_string()))
    })
}

// ============================================================================
// Undo/redo
// ============================================================================

/// Undo the most recent command; false at the history boundary
#[wasm_bindgen]
pub fn undo() -> Result<bool, JsValue> {
    log::info!("undo called");
    with_session(|session| Ok(session.undo()))
}

/// Redo the most recently undone command; false at the history boundary
#[wasm_bindgen]
pub fn redo() -> Result<bool, JsValue> {
    log::info!("redo called");
    with_session(|session| Ok(session.redo()))
}

#[wasm_bindgen(js_name = canUndo)]
pub fn can_undo() -> Result<bool, JsValue> {
    with_session(|session| Ok(session.can_undo()))
}

#[wasm_bindgen(js_name = canRedo)]
pub fn can_redo() -> Result<bool, JsValue> {
    with_session(|session| Ok(session.can_redo()))
}

/// Label for the host's undo affordance, null when history is empty
#[wasm_bindgen(js_name = undoDescription)]
pub fn undo_description() -> Result<Option<String>, JsValue> {
    with_session(|session| Ok(session.undo_description()))
}

/// Label for the host's redo affordance, null when no redo is pending
#[wasm_bindgen(js_name = redoDescription)]
pub fn redo_description() -> Result<Option<String>, JsValue> {
    with_session(|session| Ok(session.redo_description()))
}

#[wasm_bindgen(js_name = undoCount)]
pub fn undo_count() -> Result<usize, JsValue> {
    with_session(|session| Ok(session.undo_count()))
}

#[wasm_bindgen(js_name = redoCount)]
pub fn redo_count() -> Result<usize, JsValue> {
    with_session(|session| Ok(session.redo_count()))
}

/// Drop the undo history while keeping the document as it is
#[wasm_bindgen(js_name = clearHistory)]
pub fn clear_history() -> Result<(), JsValue> {
    log::info!("clearHistory called");
    with_session(|session| {
        session.clear_history();
        Ok(())
    })
}
