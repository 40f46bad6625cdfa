//! Tests against the live data.gov CKAN API.
//!
//! Ignored by default; run with `cargo test -- --ignored`.

use ckan_client::{CkanApi, CkanClient, Configuration};
use std::collections::HashMap;
use std::sync::Arc;

/// Helper function to create a test client configured for data.gov
fn create_test_client() -> CkanClient {
    let config = Configuration::new("https://catalog.data.gov/api/3")
        .with_user_agent("ckan-client-test/1.0");

    CkanClient::new(Arc::new(config))
}

#[tokio::test]
#[ignore]
async fn test_basic_search() {
    let client = create_test_client();

    let query = HashMap::from([("tags".to_string(), "climate".to_string())]);
    let result = client
        .search_packages(&query, "", 5)
        .await
        .expect("Search should succeed");

    assert!(result.count > 0, "Should find climate-related datasets");
    assert!(result.results.len() <= 5, "Should respect row limit");
}

#[tokio::test]
#[ignore]
async fn test_package_show_and_resource_id() {
    let client = create_test_client();

    let search = client
        .search_packages(&HashMap::new(), "", 1)
        .await
        .expect("Search should succeed");

    if let Some(first) = search.results.first() {
        let package = client
            .get_package_metadata(&first.id)
            .await
            .expect("Package show should succeed");
        assert_eq!(package.id, first.id);

        if !package.resources.is_empty() {
            let resource_id = client.get_resource_id(&first.id).await.expect("resource id");
            let resource = client
                .get_resource_metadata(&resource_id)
                .await
                .expect("Resource show should succeed");
            assert_eq!(resource.id, resource_id);
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_tag_and_group_lists() {
    let client = create_test_client();

    let tags = client.get_tag_list("", 10).await.expect("Tag list should succeed");
    assert!(!tags.is_empty());

    client.get_group_list("name", 5).await.expect("Group list should succeed");
}
