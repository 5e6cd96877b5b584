use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to browser APIs. None of these reach the visitor; the
/// callers degrade to a visible default and log.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    MissingWindow,

    #[error("IntersectionObserver is not available in this runtime")]
    ObserverUnavailable,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        DomError::Js(message)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reveal threshold must be within 0..=1, got {0}")]
    InvalidThreshold(f64),
}
