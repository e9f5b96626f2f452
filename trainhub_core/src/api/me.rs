use crate::user::User;

/// Result of asking who we're logged in as.
pub type Resp = User;

/// Where the current-user endpoint lives, relative to the base URL.
pub const PATH: &str = "auth/me";
