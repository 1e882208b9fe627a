// crates/vitrine-app/src/error.rs
// Errors raised while binding behaviors to the page

use wasm_bindgen::JsValue;
use vitrine_core::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
