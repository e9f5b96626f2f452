//! Client-side pieces of the training management system: talking to the
//! backend's auth endpoints and keeping track of the resulting session.

/// The backend's REST API.
pub mod api;
pub use api::{ApiResponse, Client, ClientConfig, LoginResult};

/// Sign-in form state.
pub mod login_form;
pub use login_form::LoginForm;

/// The result of logging in.
pub mod session;
pub use session::Session;

/// Users and their roles.
pub mod user;
pub use user::{Role, User};
