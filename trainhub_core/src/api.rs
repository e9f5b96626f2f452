/// Client for the auth endpoints
pub mod client;
pub use client::Client;

/// Where the backend is and how to talk to it
pub mod config;
pub use config::{ClientConfig, IdentifierField, DEFAULT_BASE_URL};

/// Things that can go wrong in the API
pub mod error;
pub use error::Error;

/// Log in with an email address or IC number
pub mod login;

/// Who am I logged in as?
pub mod me;

/// Forgotten and reset passwords
pub mod password;

/// Normalized responses
pub mod response;
pub use response::{ApiResponse, LoginResult};
