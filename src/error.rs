//! Structured error types for stickygrid.

/// All errors that can occur while configuring or composing a sticky grid.
#[derive(Debug, thiserror::Error)]
pub enum StickyGridError {
    /// Rejected configuration value (sticky column count, sizes, colors).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A header or cell renderer callback failed. Passed through untouched.
    #[error("Render error: {0}")]
    Render(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StickyGridError>;

#[cfg(target_arch = "wasm32")]
impl From<StickyGridError> for wasm_bindgen::JsValue {
    fn from(e: StickyGridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
