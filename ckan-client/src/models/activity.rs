use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entry of the activity stream
///
/// The shape of `data` depends on `activity_type`; for package activities it
/// usually holds the package dict under `"package"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "id", default, deserialize_with = "super::null_as_default")]
    pub activity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub activity_type: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub data: Map<String, Value>,
}
