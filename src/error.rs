//! Central error types for the cursor widget.
//!
//! Per-event paths never produce errors: a missing exclusion zone or a failed
//! DOM call degrades to the "always outside" / "not registered" behaviour.
//! These errors only surface at mount time and at the JS boundary.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Main error type for widget operations.
#[derive(Error, Debug)]
pub enum CursorError {
    /// `window` global is not available (e.g. running in a worker)
    #[error("No window available")]
    NoWindow,

    /// `window.document` is not available
    #[error("No document available")]
    NoDocument,

    /// A DOM call threw a JS exception
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration object could not be decoded
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Serialize as the error message string so JS callers get something readable.
impl Serialize for CursorError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<String> for CursorError {
    fn from(msg: String) -> Self {
        CursorError::Other(msg)
    }
}

impl From<&str> for CursorError {
    fn from(msg: &str) -> Self {
        CursorError::Other(msg.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for CursorError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        CursorError::Config(err.to_string())
    }
}

impl From<CursorError> for JsValue {
    fn from(err: CursorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Stringify a thrown JS value into a [`CursorError::Dom`].
pub fn dom_error(value: &JsValue) -> CursorError {
    CursorError::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Extension trait for adding context to Option types.
pub trait OptionExt<T> {
    /// Convert None to CursorError::Other with the given message.
    fn context(self, msg: &str) -> CursorResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> CursorResult<T> {
        self.ok_or_else(|| CursorError::Other(msg.to_string()))
    }
}

/// Type alias for Results using CursorError.
pub type CursorResult<T> = Result<T, CursorError>;
