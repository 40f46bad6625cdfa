use std::time::Duration;

/// Configuration for the CKAN client
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL for the CKAN API, including the version prefix
    /// (e.g., "https://catalog.data.gov/api/3")
    pub base_path: String,
    /// User agent string for HTTP requests
    pub user_agent: Option<String>,
    /// HTTP client instance
    ///
    /// Shared by every call made through this configuration, so connection
    /// pooling, proxies and TLS are whatever this client was built with.
    pub client: reqwest::Client,
    /// Whole-request timeout applied to every call, on top of `client`
    ///
    /// `None` leaves the client's own behavior; `reqwest::Client::new()` has
    /// no timeout.
    pub timeout: Option<Duration>,
}

impl Configuration {
    /// Create a configuration pointing at `base_path` with a default HTTP client
    pub fn new<S: Into<String>>(base_path: S) -> Configuration {
        Configuration {
            base_path: base_path.into(),
            ..Configuration::default()
        }
    }

    /// Set custom user agent
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a caller-built HTTP client (custom pool, proxy, TLS, test transport)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Bound every call to `timeout`
    ///
    /// Applied per request, so it works with any client passed to
    /// [`with_client`](Self::with_client), before or after this call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base path with any trailing slash removed
    pub(crate) fn trimmed_base_path(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: "https://catalog.data.gov/api/3".to_owned(),
            user_agent: Some(format!("ckan-client-rs/{}", env!("CARGO_PKG_VERSION"))),
            client: reqwest::Client::new(),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_data_gov() {
        let config = Configuration::default();
        assert_eq!(config.base_path, "https://catalog.data.gov/api/3");
        assert!(config.user_agent.unwrap().starts_with("ckan-client-rs/"));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = Configuration::new("http://localhost:5000/api/3/").with_user_agent("tests/1.0");
        assert_eq!(config.user_agent.as_deref(), Some("tests/1.0"));
        assert_eq!(config.trimmed_base_path(), "http://localhost:5000/api/3");
    }

    #[test]
    fn timeout_survives_a_later_client_swap() {
        let config = Configuration::new("http://localhost")
            .with_timeout(Duration::from_secs(5))
            .with_client(reqwest::Client::new());
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));

        let config = Configuration::new("http://localhost")
            .with_client(reqwest::Client::new())
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn no_timeout_by_default() {
        assert_eq!(Configuration::default().timeout, None);
    }
}
