use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::FormStoreResult;

/// One saved form: a flat field-name to field-value mapping.
///
/// Serializes as a bare JSON object, e.g.
/// `{"first_name":"Jane","last_name":"Doe"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoredForm(HashMap<String, String>);

impl StoredForm {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Parses a stored value, tolerating any shape. Anything that is not
    /// a JSON object counts as "no data"; non-string entries inside an
    /// object are dropped.
    pub fn from_json(text: &str) -> Option<Self> {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                log::info!("stored form data is not valid JSON: {}", e);
                return None;
            }
        };

        match value {
            Value::Object(entries) => {
                let values = entries
                    .into_iter()
                    .filter_map(|(field, value)| match value {
                        Value::String(text) => Some((field, text)),
                        _ => None,
                    })
                    .collect();
                Some(Self(values))
            }
            _ => {
                log::info!("stored form data is not an object, ignoring");
                None
            }
        }
    }

    pub fn to_json(&self) -> FormStoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn insert(&mut self, field: &str, value: &str) {
        self.0.insert(field.to_string(), value.to_string());
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
