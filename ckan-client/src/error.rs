use thiserror::Error;

use crate::models::{ActionError, ActionResponse};

/// Errors that can occur when interacting with the CKAN API
///
/// Each variant corresponds to the step of a call that failed, so callers
/// can branch on the kind instead of reading message text.
///
/// # Examples
///
/// ```rust
/// # use ckan_client::CkanError;
/// # async fn example() {
/// match some_api_call().await {
///     Ok(result) => println!("Success: {:?}", result),
///     Err(CkanError::RequestError(e)) => {
///         eprintln!("Network error: {}", e);
///     },
///     Err(CkanError::ParseError(e)) => {
///         eprintln!("Failed to parse API response: {}", e);
///     },
///     Err(CkanError::ApiError { status, message }) => {
///         eprintln!("CKAN API returned error {}: {}", status, message);
///     },
///     Err(e) => eprintln!("{}", e),
/// }
/// # async fn some_api_call() -> Result<(), CkanError> { Ok(()) }
/// # }
/// ```
#[derive(Debug, Error)]
pub enum CkanError {
    /// The request could not be sent or the response could not be read
    ///
    /// Connection failures, timeouts, DNS resolution issues and broken
    /// response bodies all end up here.
    #[error("Request error: {0}")]
    RequestError(Box<dyn std::error::Error + Send + Sync>),

    /// The body was not the JSON we expected
    ///
    /// Either the envelope itself is malformed or its `result` does not
    /// match the model for the action.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The server rejected the call
    ///
    /// Raised for any non-2xx status and for a `success: false` envelope
    /// (in which case `status` is the 2xx status it arrived with). `message`
    /// is the raw response body.
    #[error("CKAN API error ({status}): {message}")]
    ApiError {
        /// HTTP status code from the CKAN API
        status: u16,
        /// Raw response body
        message: String,
    },

    /// A derived lookup found nothing to return
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The configured base path does not form a valid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CkanError {
    /// Create a new not found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub(crate) fn request<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RequestError(Box::new(err))
    }

    /// True when the server was never reached or the exchange broke off
    pub fn is_connectivity(&self) -> bool {
        matches!(self, CkanError::RequestError(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CkanError::NotFound { .. })
    }

    /// HTTP status of an `ApiError`
    pub fn status(&self) -> Option<u16> {
        match self {
            CkanError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The CKAN `error` object carried in an `ApiError` body, if the body
    /// was a failure envelope.
    pub fn action_error(&self) -> Option<ActionError> {
        match self {
            CkanError::ApiError { message, .. } => serde_json::from_str::<ActionResponse>(message)
                .ok()
                .and_then(|envelope| envelope.error),
            _ => None,
        }
    }
}

/// Type alias for Results using CkanError
pub type Result<T> = std::result::Result<T, CkanError>;
