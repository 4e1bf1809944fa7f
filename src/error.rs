use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("could not get window")]
    NoWindow,
    #[error("could not get document")]
    NoDocument,
    #[error("root element not found: {0}")]
    RootNotFound(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid feed config: {0}")]
    Config(#[source] serde_json::Error),
    #[error("invalid feed config: {0}")]
    InvalidConfig(String),
    #[error("invalid posts payload: {0}")]
    Posts(#[source] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
