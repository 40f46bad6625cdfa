use serde::{Deserialize, Serialize};

/// A downloadable artifact belonging to a [`Package`](super::Package)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: String,
    /// Owning package; a back-reference only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype_inner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_url: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub no_real_name: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_last_updated: Option<String>,

    // data.json harvests attach a schema reference under camelCase keys
    #[serde(rename = "describedBy", default, skip_serializing_if = "Option::is_none")]
    pub described_by: Option<String>,
    #[serde(rename = "describedByType", default, skip_serializing_if = "Option::is_none")]
    pub described_by_type: Option<String>,
}
