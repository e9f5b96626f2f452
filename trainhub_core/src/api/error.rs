use reqwest::StatusCode;
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while talking to the backend.
///
/// HTTP error statuses are *not* errors at this level: `Client` reports them
/// through [`super::ApiResponse::ok`] instead. Only `ApiResponse::parse`
/// turns them into [`Error::Rejected`].
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't reach the server at all (DNS, connection refused, the
    /// connection dropped before a response arrived.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but with a non-2xx status.
    #[error("server rejected the request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// The HTTP status the server returned
        status: StatusCode,

        /// The `detail` or `message` field of the body, if there was one
        message: Option<String>,
    },

    /// The server said yes, but didn't send a body we could read.
    #[error("server returned an empty or non-JSON body")]
    EmptyBody,

    /// The body was JSON, but not in the shape we expected.
    #[error("unexpected response shape: {0}")]
    Json(#[from] serde_json::Error),

    /// We tried to make an authenticated call without logging in first.
    #[error("not logged in")]
    Unauthenticated,
}
