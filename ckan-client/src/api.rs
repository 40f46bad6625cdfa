use async_trait::async_trait;
use std::collections::HashMap;

use crate::client::CkanClient;
use crate::error::{CkanError, Result};
use crate::models;

/// The set of CKAN actions this crate speaks, as a trait.
///
/// [`CkanClient`] is the HTTP implementation. Code that only needs to read
/// from a catalog can take `&dyn CkanApi` (or a generic `C: CkanApi`) and be
/// handed an in-memory fake under test.
///
/// The two derived lookups, [`get_package_id_list`](CkanApi::get_package_id_list)
/// and [`get_resource_id`](CkanApi::get_resource_id), have default
/// implementations on top of the required actions.
#[async_trait]
pub trait CkanApi: Send + Sync {
    async fn search_packages(
        &self,
        query: &HashMap<String, String>,
        sort: &str,
        limit: u32,
    ) -> Result<models::PackageSearchResult>;

    async fn search_resources(
        &self,
        query: &HashMap<String, String>,
        sort: &str,
        limit: u32,
    ) -> Result<models::ResourceSearchResult>;

    async fn recently_changed_packages_activity_list(&self) -> Result<Vec<models::Activity>>;

    async fn get_package_list(&self, sort: &str, limit: u32) -> Result<models::PackageList>;

    /// Ids of the datasets returned by [`get_package_list`](CkanApi::get_package_list), in order
    async fn get_package_id_list(&self, sort: &str, limit: u32) -> Result<Vec<String>> {
        Ok(self.get_package_list(sort, limit).await?.ids())
    }

    async fn get_package_metadata(&self, package_id: &str) -> Result<models::Package>;

    /// Id of the first resource of a dataset that has a non-empty id
    ///
    /// Fails with [`CkanError::NotFound`] when the dataset has no resources,
    /// or when none of its resources carries an id.
    async fn get_resource_id(&self, package_id: &str) -> Result<String> {
        let package = self.get_package_metadata(package_id).await?;
        resource_id_of(&package, package_id)
    }

    async fn get_resource_metadata(&self, resource_id: &str) -> Result<models::Resource>;

    async fn get_group_list(&self, sort: &str, limit: u32) -> Result<Vec<String>>;

    async fn get_group_metadata(&self, group_id: &str) -> Result<models::Group>;

    async fn get_tag_list(&self, sort: &str, limit: u32) -> Result<Vec<String>>;

    async fn get_tag_metadata(&self, tag_name: &str) -> Result<models::Tag>;
}

#[async_trait]
impl CkanApi for CkanClient {
    async fn search_packages(
        &self,
        query: &HashMap<String, String>,
        sort: &str,
        limit: u32,
    ) -> Result<models::PackageSearchResult> {
        CkanClient::search_packages(self, query, sort, limit).await
    }

    async fn search_resources(
        &self,
        query: &HashMap<String, String>,
        sort: &str,
        limit: u32,
    ) -> Result<models::ResourceSearchResult> {
        CkanClient::search_resources(self, query, sort, limit).await
    }

    async fn recently_changed_packages_activity_list(&self) -> Result<Vec<models::Activity>> {
        CkanClient::recently_changed_packages_activity_list(self).await
    }

    async fn get_package_list(&self, sort: &str, limit: u32) -> Result<models::PackageList> {
        CkanClient::get_package_list(self, sort, limit).await
    }

    async fn get_package_metadata(&self, package_id: &str) -> Result<models::Package> {
        CkanClient::get_package_metadata(self, package_id).await
    }

    async fn get_resource_metadata(&self, resource_id: &str) -> Result<models::Resource> {
        CkanClient::get_resource_metadata(self, resource_id).await
    }

    async fn get_group_list(&self, sort: &str, limit: u32) -> Result<Vec<String>> {
        CkanClient::get_group_list(self, sort, limit).await
    }

    async fn get_group_metadata(&self, group_id: &str) -> Result<models::Group> {
        CkanClient::get_group_metadata(self, group_id).await
    }

    async fn get_tag_list(&self, sort: &str, limit: u32) -> Result<Vec<String>> {
        CkanClient::get_tag_list(self, sort, limit).await
    }

    async fn get_tag_metadata(&self, tag_name: &str) -> Result<models::Tag> {
        CkanClient::get_tag_metadata(self, tag_name).await
    }
}

fn resource_id_of(package: &models::Package, package_id: &str) -> Result<String> {
    if package.resources.is_empty() {
        return Err(CkanError::not_found(format!(
            "No resources found for package {}",
            package_id
        )));
    }

    package
        .first_resource_id()
        .map(str::to_owned)
        .ok_or_else(|| {
            CkanError::not_found(format!(
                "No resource with an id found for package {}",
                package_id
            ))
        })
}
