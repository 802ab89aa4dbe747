//! Shared helpers for WASM API operations
//!
//! Serialization, deserialization and error conversion used by every
//! JavaScript-facing endpoint. Errors cross the boundary as string
//! `JsValue`s and are logged on the way out so the console shows what
//! the host is about to receive.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Parse an element id the host handed back
pub fn parse_id(id: &str) -> Result<Uuid, JsValue> {
    Uuid::parse_str(id).map_err(|e| {
        let msg = format!("invalid element id '{}': {}", id, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Convert an error message to a JsValue, logging it first
pub fn js_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
