use crate::api::{login, ClientConfig};
use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything we know after a successful login. Callers decide whether and
/// where to keep this; the library never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The backend this session belongs to.
    pub config: ClientConfig,

    /// Token to send as `Authorization: Bearer ...`.
    pub access_token: String,

    /// Kind of token, as the backend reported it.
    pub token_type: String,

    /// Who logged in.
    pub user: User,

    /// When we got the token. Tokens from the backend last seven days.
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Build a session from a login response.
    pub fn new(config: ClientConfig, resp: login::Resp) -> Self {
        Self::new_at(config, resp, Utc::now())
    }

    /// Build a session as if the login happened at `logged_in_at`.
    pub fn new_at(config: ClientConfig, resp: login::Resp, logged_in_at: DateTime<Utc>) -> Self {
        Self {
            config,
            access_token: resp.access_token,
            token_type: resp.token_type,
            user: resp.user,
            logged_in_at,
        }
    }

    /// Where the web UI would send this user next.
    pub fn dashboard_path(&self) -> &'static str {
        self.user.role.dashboard_path()
    }
}
