use crate::config::Configuration;
use crate::error::{CkanError, Result};
use crate::models;
use reqwest::RequestBuilder;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// # CKAN Client
///
/// A typed client for the action API of any CKAN instance (data.gov, the EU
/// data portal, a local `ckan` container, ...).
///
/// Every method is a single HTTP round trip: the request is sent, the whole
/// body is buffered, the status and the `success` flag of the
/// `{help, success, result}` envelope are checked, and `result` is decoded
/// into the matching model. Nothing is retried or cached.
///
/// The client only reads its configuration, so one instance can be cloned or
/// shared between tasks freely.
///
/// The derived lookups `get_package_id_list` and `get_resource_id` come from
/// the [`CkanApi`](crate::CkanApi) trait, which must be in scope to call them.
///
/// ## Usage
///
/// ```rust,no_run
/// use ckan_client::CkanClient;
/// use std::collections::HashMap;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CkanClient::from_base_url("https://catalog.data.gov/api/3");
///
///     let mut query = HashMap::new();
///     query.insert("res_format".to_string(), "CSV".to_string());
///
///     let results = client.search_packages(&query, "metadata_modified desc", 10).await?;
///
///     println!("Found {} datasets", results.count);
///     for package in results.results {
///         println!("Dataset: {}", package.title.unwrap_or_default());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CkanClient {
    configuration: Arc<Configuration>,
}

impl std::fmt::Debug for CkanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CkanClient")
            .field("base_path", &self.configuration.base_path)
            .finish()
    }
}

impl CkanClient {
    /// Create a new CKAN client instance from a shared configuration
    ///
    /// Use this when the HTTP client needs tuning (timeouts, proxies, a
    /// shared connection pool) or when pointing at a test server.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ckan_client::{CkanClient, Configuration};
    /// # use std::sync::Arc;
    /// let config = Arc::new(
    ///     Configuration::new("https://demo.ckan.org/api/3").with_user_agent("my-rust-app/1.0"),
    /// );
    ///
    /// let client = CkanClient::new(config);
    /// ```
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    /// Create a client for `base_url` with default settings
    ///
    /// `base_url` is everything before `/action`, version prefix included,
    /// e.g. `https://catalog.data.gov/api/3`.
    pub fn from_base_url<S: Into<String>>(base_url: S) -> Self {
        Self::new(Arc::new(Configuration::new(base_url)))
    }

    /// The configuration every call reads from
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Search for datasets (packages) by metadata
    ///
    /// # Arguments
    ///
    /// * `query` - field/value pairs; each becomes `field:value` and the
    ///   terms are joined with `+` into a single `q` parameter. Term order
    ///   follows the map's iteration order.
    /// * `sort` - Solr sort expression such as `"metadata_modified desc"`;
    ///   empty leaves the server default
    /// * `limit` - sent as `rows`; `0` leaves the server default page size
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use ckan_client::CkanClient;
    /// # use std::collections::HashMap;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = CkanClient::from_base_url("https://catalog.data.gov/api/3");
    /// let query = HashMap::from([("organization".to_string(), "epa-gov".to_string())]);
    ///
    /// let results = client.search_packages(&query, "", 20).await?;
    /// for package in &results.results {
    ///     println!("{} ({} resources)", package.name, package.num_resources);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_packages(
        &self,
        query: &HashMap<String, String>,
        sort: &str,
        limit: u32,
    ) -> Result<models::PackageSearchResult> {
        let params = search_params(Some(query), sort, limit);
        self.get_action("package_search", &params).await
    }

    /// Search for resources by metadata
    ///
    /// Same parameters as [`search_packages`](Self::search_packages); fields
    /// are resource fields such as `format` or `name`.
    pub async fn search_resources(
        &self,
        query: &HashMap<String, String>,
        sort: &str,
        limit: u32,
    ) -> Result<models::ResourceSearchResult> {
        let params = search_params(Some(query), sort, limit);
        self.get_action("resource_search", &params).await
    }

    /// Activity stream of recently changed packages, most recent first
    pub async fn recently_changed_packages_activity_list(&self) -> Result<Vec<models::Activity>> {
        self.get_action("recently_changed_packages_activity_list", &[])
            .await
    }

    /// List datasets
    ///
    /// Example sorts: `"views_recent desc"`, `"metadata_modified desc"`.
    pub async fn get_package_list(&self, sort: &str, limit: u32) -> Result<models::PackageList> {
        let params = search_params(None, sort, limit);
        self.get_action("package_list", &params).await
    }

    /// Retrieve a dataset by its id or name
    ///
    /// Returns the complete record, resources, tags and extras included.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use ckan_client::CkanClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = CkanClient::from_base_url("https://catalog.data.gov/api/3");
    /// let package = client.get_package_metadata("electric-vehicle-population-data").await?;
    ///
    /// println!("Title: {}", package.title.unwrap_or_default());
    /// for resource in &package.resources {
    ///     println!("  {} [{}]", resource.url.as_deref().unwrap_or(""), resource.format.as_deref().unwrap_or("?"));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_package_metadata(&self, package_id: &str) -> Result<models::Package> {
        self.get_action("package_show", &[("id", package_id.to_string())])
            .await
    }

    /// Retrieve a resource by id
    ///
    /// Unlike the other show actions this one is sent as a POST with a JSON
    /// body, which is what `resource_show` expects.
    pub async fn get_resource_metadata(&self, resource_id: &str) -> Result<models::Resource> {
        let body = serde_json::json!({ "id": resource_id });
        self.post_action("resource_show", &body).await
    }

    /// List group names
    pub async fn get_group_list(&self, sort: &str, limit: u32) -> Result<Vec<String>> {
        let params = search_params(None, sort, limit);
        self.get_action("group_list", &params).await
    }

    /// Retrieve a group by id or name
    pub async fn get_group_metadata(&self, group_id: &str) -> Result<models::Group> {
        self.get_action("group_show", &[("id", group_id.to_string())])
            .await
    }

    /// List tag names
    pub async fn get_tag_list(&self, sort: &str, limit: u32) -> Result<Vec<String>> {
        let params = search_params(None, sort, limit);
        self.get_action("tag_list", &params).await
    }

    /// Retrieve a tag by name (or id)
    pub async fn get_tag_metadata(&self, tag_name: &str) -> Result<models::Tag> {
        self.get_action("tag_show", &[("id", tag_name.to_string())])
            .await
    }

    /// `{base_path}/action/{action}` with `params` form-encoded as the query
    fn action_url(&self, action: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/action/{}",
            self.configuration.trimmed_base_path(),
            action
        ))?;

        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    async fn get_action<T: DeserializeOwned>(
        &self,
        action: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.action_url(action, params)?;
        tracing::debug!(action, %url, "GET CKAN action");

        let request = self.configuration.client.get(url);
        self.send(action, request).await
    }

    async fn post_action<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.action_url(action, &[])?;
        tracing::debug!(action, %url, "POST CKAN action");

        let request = self.configuration.client.post(url).json(body);
        self.send(action, request).await
    }

    async fn send<T: DeserializeOwned>(&self, action: &str, request: RequestBuilder) -> Result<T> {
        let request = match self.configuration.user_agent {
            Some(ref user_agent) => request.header(reqwest::header::USER_AGENT, user_agent),
            None => request,
        };
        let request = match self.configuration.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request.send().await.map_err(CkanError::request)?;
        let status = response.status().as_u16();

        // Buffer the whole body first so error variants can carry it verbatim
        let body = response.text().await.map_err(CkanError::request)?;
        tracing::debug!(action, status, bytes = body.len(), "CKAN action responded");

        parse_action_response(status, &body)
    }
}

/// Turn an HTTP status and raw body into the action's typed result.
///
/// The status is checked before any parsing. The envelope is then decoded
/// with an untyped `result` so a `success: false` reply is reported as an
/// API failure even when its `result` would not fit `T`.
pub(crate) fn parse_action_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(CkanError::ApiError {
            status,
            message: body.to_string(),
        });
    }

    let envelope: models::ActionResponse = serde_json::from_str(body)?;

    if !envelope.success {
        return Err(CkanError::ApiError {
            status,
            message: body.to_string(),
        });
    }

    let result = envelope.result.unwrap_or(Value::Null);
    Ok(serde_json::from_value(result)?)
}

/// Build the `q`, `sort` and `rows` parameters shared by the list and search
/// actions. Empty values are left out entirely.
pub(crate) fn search_params(
    query: Option<&HashMap<String, String>>,
    sort: &str,
    limit: u32,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if let Some(query) = query {
        let q = query
            .iter()
            .map(|(field, value)| format!("{}:{}", field, value))
            .collect::<Vec<_>>()
            .join("+");
        if !q.is_empty() {
            params.push(("q", q));
        }
    }
    if !sort.is_empty() {
        params.push(("sort", sort.to_string()));
    }
    if limit != 0 {
        params.push(("rows", limit.to_string()));
    }

    params
}
