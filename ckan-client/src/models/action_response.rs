use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The envelope every CKAN action returns.
///
/// `result` stays untyped until `success` has been checked; a failed call
/// usually carries an `error` object and no usable `result`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// URL of the action's documentation
    #[serde(default)]
    pub help: Option<String>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionError>,
}

/// Error detail CKAN attaches to a `success: false` envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// e.g. "Not Found Error", "Validation Error"
    #[serde(rename = "__type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}
