//! Shared helpers for WASM API operations
//!
//! Logging macros, (de)serialization across the JavaScript boundary, and
//! conversion of [`RenderError`] into JavaScript errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::errors::RenderError;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

pub fn log_error(msg: &str) {
    log::error!("[WASM] {}", msg);
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, RenderError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| RenderError::InvalidInput(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        js_sys::Error::new(&msg).into()
    })
}

// ============================================================================
// Error Conversion
// ============================================================================

/// A missing container is already logged by the renderer
fn logged_at_boundary(err: &RenderError) -> bool {
    !matches!(err, RenderError::ContainerNotFound(_))
}

/// Turn a render error into a JavaScript `Error`
pub fn to_js_error(err: RenderError) -> JsValue {
    if logged_at_boundary(&err) {
        wasm_error!("{}", err);
    }
    js_sys::Error::new(&err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_container_logged_once() {
        assert!(!logged_at_boundary(&RenderError::ContainerNotFound(
            "product-list".to_string()
        )));
        assert!(logged_at_boundary(&RenderError::Dom("appendChild".to_string())));
        assert!(logged_at_boundary(&RenderError::InvalidInput("products".to_string())));
    }
}
