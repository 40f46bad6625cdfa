use serde::{Deserialize, Serialize};

/// Represents an extra key-value pair in CKAN datasets
///
/// The value is kept as raw JSON; portals store strings, numbers, lists and
/// whole objects here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    #[serde(rename = "key")]
    pub key: String,
    #[serde(rename = "value", default)]
    pub value: serde_json::Value,
}

impl Extra {
    pub fn new(key: String, value: serde_json::Value) -> Extra {
        Extra { key, value }
    }

    /// The value as a string slice, when the server sent a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}
