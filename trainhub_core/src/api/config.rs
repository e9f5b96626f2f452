use super::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use url::Url;

/// Where the backend lives if nobody says otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Which JSON key the login identifier goes into. The login form has always
/// sent `username`, but the backend's own route definition reads `email`
/// (and accepts an IC number in it all the same.)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierField {
    /// `{"username": ..., "password": ...}`
    #[default]
    Username,

    /// `{"email": ..., "password": ...}`
    Email,
}

impl IdentifierField {
    /// The JSON key for this field
    pub fn key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
        }
    }
}

impl Display for IdentifierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IdentifierField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            other => Err(format!(
                "unknown identifier field `{other}` (expected `username` or `email`)"
            )),
        }
    }
}

/// Everything the client needs to know about the backend. Pass this in when
/// constructing a `Client`; the library never looks at the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `https://training.example.com/api/`.
    /// Always ends in `/` so endpoint paths join underneath it.
    base_url: Url,

    /// Which key the login identifier is sent as.
    #[serde(default)]
    pub identifier_field: IdentifierField,
}

impl ClientConfig {
    /// Parse a base URL.
    ///
    /// ## Errors
    ///
    /// Fails if `base_url` isn't an absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;

        // Url::join replaces the last segment unless the path ends in a slash,
        // which would turn `.../api` + `auth/login` into `.../auth/login`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            identifier_field: IdentifierField::default(),
        })
    }

    /// Use a different key for the login identifier.
    #[must_use]
    pub fn with_identifier_field(mut self, identifier_field: IdentifierField) -> Self {
        self.identifier_field = identifier_field;
        self
    }

    /// The base URL, with its trailing slash.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path (like `auth/login`) against the base URL.
    ///
    /// ## Errors
    ///
    /// Fails if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

impl Default for ClientConfig {
    #[expect(clippy::expect_used, reason = "DEFAULT_BASE_URL is a constant absolute URL")]
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path() {
        let config = ClientConfig::new("https://training.example.com/api").unwrap();

        assert_eq!(
            config.endpoint("auth/login").unwrap().as_str(),
            "https://training.example.com/api/auth/login"
        );
    }

    #[test]
    fn endpoint_ignores_leading_slash() {
        let config = ClientConfig::new("https://training.example.com/api/").unwrap();

        assert_eq!(
            config.endpoint("/auth/me").unwrap().as_str(),
            "https://training.example.com/api/auth/me"
        );
    }

    #[test]
    fn bare_host() {
        let config = ClientConfig::new("http://127.0.0.1:8000").unwrap();

        assert_eq!(
            config.endpoint("auth/login").unwrap().as_str(),
            "http://127.0.0.1:8000/auth/login"
        );
    }

    #[test]
    fn relative_base_is_rejected() {
        assert!(ClientConfig::new("localhost/api").is_err());
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(
            ClientConfig::default().base_url().as_str(),
            "http://localhost:8000/api/"
        );
    }

    #[test]
    fn identifier_field_round_trips_through_strings() {
        for field in [IdentifierField::Username, IdentifierField::Email] {
            assert_eq!(field.to_string().parse::<IdentifierField>(), Ok(field));
        }

        assert!("login".parse::<IdentifierField>().is_err());
    }
}
