use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Extra, Group, Organization, Resource, SearchResult, Tag};

/// A CKAN dataset ("package")
///
/// `num_tags` and `num_resources` are copied from the server as-is and are
/// not guaranteed to match the lengths of `tags` and `resources`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_title: Option<String>,
    #[serde(rename = "isopen", default, deserialize_with = "super::null_as_default")]
    pub is_open: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_modified: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub resources: Vec<Resource>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub num_resources: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub num_tags: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub extras: Vec<Extra>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub groups: Vec<Group>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub relationships_as_subject: Vec<Value>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub relationships_as_object: Vec<Value>,
}

impl Package {
    /// Look up an extra by key.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extras.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Id of the first resource that has one.
    pub fn first_resource_id(&self) -> Option<&str> {
        self.resources
            .iter()
            .map(|r| r.id.as_str())
            .find(|id| !id.is_empty())
    }
}

/// Result of `package_list`
///
/// Stock CKAN answers with a plain array of dataset names; some portals
/// answer with the same record wrapper `package_search` uses. Both are
/// accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageList {
    Names(Vec<String>),
    Records(SearchResult<Package>),
}

impl PackageList {
    /// Package ids in server order. For the plain-name form the names are
    /// the only identifiers available and are returned instead.
    pub fn ids(&self) -> Vec<String> {
        match self {
            PackageList::Records(result) => {
                result.results.iter().map(|p| p.id.clone()).collect()
            }
            PackageList::Names(names) => names.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PackageList::Records(result) => result.results.len(),
            PackageList::Names(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_extra_values_round_trip() {
        let package = Package {
            id: "p1".to_string(),
            name: "water-quality".to_string(),
            extras: vec![
                Extra::new("spatial".to_string(), json!({
                    "type": "Polygon",
                    "coordinates": [[[-77.1, 38.8], [-76.9, 38.8], [-77.0, 39.0]]]
                })),
                Extra::new("programCode".to_string(), json!(["015:001", "015:002"])),
                Extra::new("accessLevel".to_string(), json!("public")),
            ],
            ..Default::default()
        };

        let encoded = serde_json::to_string(&package).unwrap();
        let decoded: Package = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, package);
        assert_eq!(
            decoded.extra("spatial").unwrap()["coordinates"][0][2],
            json!([-77.0, 39.0])
        );
        assert_eq!(decoded.extras[2].as_str(), Some("public"));
    }

    #[test]
    fn nulls_and_missing_fields_are_tolerated() {
        let package: Package = serde_json::from_value(json!({
            "id": "abc",
            "name": "sample",
            "title": "Sample",
            "author": null,
            "maintainer": null,
            "organization": null,
            "isopen": true,
            "num_tags": 7,
            "num_resources": 3,
            "resources": [{
                "id": "r1",
                "package_id": "abc",
                "url": "https://example.org/data.csv",
                "format": "CSV",
                "size": null,
                "describedBy": "https://example.org/schema.json"
            }],
            "tags": [{"name": "health"}]
        }))
        .unwrap();

        assert_eq!(package.author, None);
        assert!(package.organization.is_none());
        assert!(package.is_open);
        // Counts come from the server and are not checked against the lists
        assert_eq!(package.num_tags, 7);
        assert_eq!(package.tags.len(), 1);
        assert_eq!(package.num_resources, 3);
        assert_eq!(package.resources.len(), 1);
        assert_eq!(
            package.resources[0].described_by.as_deref(),
            Some("https://example.org/schema.json")
        );
        assert!(package.extras.is_empty());
    }

    #[test]
    fn null_in_non_optional_fields_decodes_as_zero_value() {
        for field in [
            "id",
            "name",
            "private",
            "isopen",
            "num_tags",
            "num_resources",
            "resources",
            "tags",
            "extras",
            "groups",
            "relationships_as_subject",
            "relationships_as_object",
        ] {
            let mut value = json!({"id": "a", "name": "a"});
            value[field] = Value::Null;

            let package: Result<Package, _> = serde_json::from_value(value);
            assert!(package.is_ok(), "{field}=null: {:?}", package.err());
        }
    }

    #[test]
    fn null_in_nested_records_decodes_as_zero_value() {
        let package: Package = serde_json::from_value(json!({
            "id": "a",
            "name": "a",
            "private": null,
            "num_tags": null,
            "tags": [{"name": null}],
            "resources": [{"id": null, "no_real_name": null}],
            "organization": {"id": null, "name": null, "is_organization": null},
            "groups": [{"id": null, "name": null, "is_organization": null}]
        }))
        .unwrap();

        assert!(!package.private);
        assert_eq!(package.num_tags, 0);
        assert_eq!(package.tags[0].name, "");
        assert_eq!(package.resources[0].id, "");
        assert!(!package.resources[0].no_real_name);
        assert!(!package.organization.as_ref().unwrap().is_organization);
        assert_eq!(package.groups[0].name, "");
        assert_eq!(package.first_resource_id(), None);
    }

    #[test]
    fn absent_described_by_is_not_serialized() {
        let resource = Resource {
            id: "r1".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&resource).unwrap();
        assert!(value.get("describedBy").is_none());
        assert!(value.get("describedByType").is_none());
    }

    #[test]
    fn package_list_accepts_names() {
        let list: PackageList = serde_json::from_value(json!(["alpha", "beta"])).unwrap();
        assert_eq!(list, PackageList::Names(vec!["alpha".into(), "beta".into()]));
        assert_eq!(list.ids(), vec!["alpha", "beta"]);
    }

    #[test]
    fn package_list_accepts_records() {
        let list: PackageList = serde_json::from_value(json!({
            "count": 2,
            "sort": "metadata_modified desc",
            "facets": {},
            "search_facets": {},
            "results": [{"id": "a", "name": "first"}, {"id": "b", "name": "second"}]
        }))
        .unwrap();

        assert!(matches!(list, PackageList::Records(_)));
        assert_eq!(list.len(), 2);
        assert_eq!(list.ids(), vec!["a", "b"]);
    }

    #[test]
    fn package_list_rejects_unrelated_objects() {
        assert!(serde_json::from_value::<PackageList>(json!({"unexpected": 1})).is_err());
        assert!(serde_json::from_value::<PackageList>(json!({"count": 2})).is_err());
        assert!(serde_json::from_value::<PackageList>(json!(42)).is_err());
    }
}
