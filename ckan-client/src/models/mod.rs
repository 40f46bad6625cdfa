//! Wire models for the CKAN action API.
//!
//! Every type here is a read-only projection of the JSON CKAN returns. Field
//! names follow the wire (snake_case) and nullable fields are `Option`s so a
//! `null` from the server never fails deserialization.

pub mod action_response;
pub mod activity;
pub mod extra;
pub mod group;
pub mod organization;
pub mod package;
pub mod resource;
pub mod search;
pub mod tag;

pub use action_response::{ActionError, ActionResponse};
pub use activity::Activity;
pub use extra::Extra;
pub use group::Group;
pub use organization::Organization;
pub use package::{Package, PackageList};
pub use resource::Resource;
pub use search::{PackageSearchResult, ResourceSearchResult, SearchResult};
pub use tag::Tag;

use serde::{Deserialize, Deserializer};

/// Decode a field whose `null` means the same as a missing key.
///
/// Paired with `#[serde(default)]`, which covers the missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
