//! Typed async client for the [CKAN](https://ckan.org) action API.
//!
//! ```rust,no_run
//! use ckan_client::CkanClient;
//!
//! # async fn example() -> Result<(), ckan_client::CkanError> {
//! let client = CkanClient::from_base_url("https://catalog.data.gov/api/3");
//! let tags = client.get_tag_list("", 20).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Requests are logged at `debug` level through `tracing`; the crate never
//! installs a subscriber itself.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export the ergonomic client and configuration for easy access
pub use api::CkanApi;
pub use client::CkanClient;
pub use config::Configuration;
pub use error::{CkanError, Result};
