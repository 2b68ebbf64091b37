use std::fmt;

use wasm_bindgen::JsValue;

pub type FormStoreResult<T> = Result<T, FormStoreError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FormStoreError {
    JsError(JsValue),
    NoWindow,
    NoStorage,
    NoDocument,
    ElementNotFound(String),
    NotAnInput(String),
    SerdeError(String),
}

impl From<JsValue> for FormStoreError {
    fn from(e: JsValue) -> Self {
        FormStoreError::JsError(e)
    }
}

impl From<serde_json::Error> for FormStoreError {
    fn from(e: serde_json::Error) -> Self {
        FormStoreError::SerdeError(e.to_string())
    }
}

impl fmt::Display for FormStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormStoreError::JsError(e) => {
                write!(f, "JavaScript error: {:?}", e)
            }
            FormStoreError::NoWindow => write!(f, "No window found"),
            FormStoreError::NoStorage => {
                write!(f, "Local storage is not available")
            }
            FormStoreError::NoDocument => write!(f, "No document found"),
            FormStoreError::ElementNotFound(id) => {
                write!(f, "No element found for id: {}", id)
            }
            FormStoreError::NotAnInput(id) => {
                write!(f, "Element is not an input: {}", id)
            }
            FormStoreError::SerdeError(msg) => {
                write!(f, "Serde JSON error: {}", msg)
            }
        }
    }
}

impl std::error::Error for FormStoreError {}
