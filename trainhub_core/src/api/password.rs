use serde::{Deserialize, Serialize};

/// Ask the backend to start a password reset.
#[derive(Debug, Serialize, Deserialize)]
pub struct ForgotReq {
    /// Email address on the account.
    pub email: String,
}

/// Set a new password directly.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetReq {
    /// Email address on the account.
    pub email: String,

    /// Plaintext password to switch to.
    pub new_password: String,
}

/// Where the forgot-password endpoint lives, relative to the base URL.
pub const FORGOT_PATH: &str = "auth/forgot-password";

/// Where the reset-password endpoint lives, relative to the base URL.
pub const RESET_PATH: &str = "auth/reset-password";
