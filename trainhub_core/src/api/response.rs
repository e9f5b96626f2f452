use super::error::{Error, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A response from the backend, normalized so callers can branch on it
/// without caring how the transport or the body went.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the status was 2xx.
    pub ok: bool,

    /// The raw HTTP status.
    pub status: u16,

    /// The parsed JSON body, or `None` if the body was empty or not JSON.
    pub data: Option<Value>,
}

/// The result of logging in. Same shape as any other response.
pub type LoginResult = ApiResponse;

impl ApiResponse {
    /// Build a response from a status and the raw body bytes.
    ///
    /// A body that fails to parse as JSON becomes `data: None`. Empty bodies
    /// (e.g. a 204) and HTML error pages from a proxy land here; they are
    /// still a response the caller can look at, so they don't fail the call.
    pub fn from_parts(status: StatusCode, body: &[u8]) -> Self {
        let data = if body.is_empty() {
            None
        } else {
            match serde_json::from_slice(body) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!(?err, %status, "response body was not JSON; treating it as absent");
                    None
                }
            }
        };

        Self {
            ok: status.is_success(),
            status: status.as_u16(),
            data,
        }
    }

    /// A human-readable error from the body. The backend uses `detail`, but
    /// some paths answer with `message`, so we check both in that order.
    /// Non-string values (like validation error lists) are skipped.
    pub fn error_message(&self) -> Option<&str> {
        let data = self.data.as_ref()?;

        ["detail", "message"]
            .iter()
            .filter_map(|key| data.get(key).and_then(Value::as_str))
            .find(|message| !message.is_empty())
    }

    /// The `message` field of a successful response, if any.
    pub fn message(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.get("message"))
            .and_then(Value::as_str)
    }

    /// Interpret a successful response as a `T`.
    ///
    /// ## Errors
    ///
    /// - `Error::Rejected` if the status was not 2xx
    /// - `Error::EmptyBody` if there was no JSON body
    /// - `Error::Json` if the body didn't match `T`
    pub fn parse<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !self.ok {
            return Err(Error::Rejected {
                status: StatusCode::from_u16(self.status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message: self.error_message().map(str::to_string),
            });
        }

        let data = self.data.clone().ok_or(Error::EmptyBody)?;

        Ok(serde_json::from_value(data)?)
    }
}
