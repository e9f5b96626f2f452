use crate::api::{error, login, Client, LoginResult};
use crate::session::Session;

/// Shown when the form is submitted with a blank field.
pub const MISSING_FIELDS: &str = "Please enter your email or IC number and password.";

/// Shown when the server rejects a login without saying why.
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Shown when we couldn't talk to the server at all.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again.";

/// Shown after a successful login.
pub const LOGIN_SUCCEEDED: &str = "Login successful!";

/// State behind a sign-in form: what's been typed, whether a request is in
/// flight, and what to tell the user about the last attempt.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    /// Email address or IC number
    pub identifier: String,

    /// Plaintext password
    pub password: String,

    /// Set between `begin` and `finish`. Only guards against double submits
    /// from this form; it can't cancel anything.
    submitting: bool,

    /// Error banner
    error: Option<String>,

    /// Success banner
    message: Option<String>,
}

/// What happened when the form was submitted.
#[derive(Debug)]
pub enum Outcome {
    /// A field was blank; nothing was sent.
    Invalid,

    /// A previous submission hasn't finished yet; nothing was sent.
    Busy,

    /// The server said no. The reason is in `LoginForm::error`.
    Rejected {
        /// HTTP status of the rejection
        status: u16,
    },

    /// We couldn't reach the server.
    Failed(error::Error),

    /// The server said yes. `session` is `None` if the body wasn't a token
    /// response we understood.
    LoggedIn {
        /// The new session, if the body described one
        session: Option<Box<Session>>,
    },
}

impl LoginForm {
    /// An empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Is a request in flight?
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The error banner, if there is one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The success banner, if there is one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Start a submission. Returns the credentials to send, or the reason we
    /// aren't sending anything.
    ///
    /// Fields only need to be non-empty; whitespace counts.
    ///
    /// ## Errors
    ///
    /// `Outcome::Busy` or `Outcome::Invalid`. Neither touches `submitting`.
    pub fn begin(&mut self) -> Result<login::Req, Outcome> {
        if self.submitting {
            return Err(Outcome::Busy);
        }

        self.error = None;
        self.message = None;

        if self.identifier.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_FIELDS.to_string());
            return Err(Outcome::Invalid);
        }

        self.submitting = true;

        Ok(login::Req::new(&self.identifier, &self.password))
    }

    /// Record the result of a submission started with `begin`.
    pub fn finish(&mut self, client: &Client, result: error::Result<LoginResult>) -> Outcome {
        self.submitting = false;

        match result {
            Ok(resp) if resp.ok => {
                self.message = Some(LOGIN_SUCCEEDED.to_string());

                let session = match resp.parse::<login::Resp>() {
                    Ok(token) => Some(Box::new(Session::new(client.config.clone(), token))),
                    Err(err) => {
                        tracing::warn!(?err, "login succeeded but the body had no session");
                        None
                    }
                };

                Outcome::LoggedIn { session }
            }

            Ok(resp) => {
                self.error = Some(resp.error_message().unwrap_or(LOGIN_FAILED).to_string());

                Outcome::Rejected {
                    status: resp.status,
                }
            }

            Err(err) => {
                tracing::error!(?err, "could not log in");
                self.error = Some(SOMETHING_WENT_WRONG.to_string());

                Outcome::Failed(err)
            }
        }
    }

    /// `begin`, send the login, then `finish`.
    pub async fn submit(&mut self, client: &Client, http: &reqwest::Client) -> Outcome {
        let req = match self.begin() {
            Ok(req) => req,
            Err(outcome) => return outcome,
        };

        let result = client.login(http, &req.identifier, &req.password).await;

        self.finish(client, result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::ClientConfig;
    use crate::test::{unreachable_server, StubServer};
    use crate::user::Role;
    use axum::http::StatusCode;
    use serde_json::json;

    fn filled(identifier: &str, password: &str) -> LoginForm {
        LoginForm {
            identifier: identifier.to_string(),
            password: password.to_string(),
            ..LoginForm::new()
        }
    }

    #[test]
    fn blank_fields_are_not_sent() {
        let mut form = filled("", "pw");

        assert!(matches!(form.begin(), Err(Outcome::Invalid)));
        assert_eq!(form.error(), Some(MISSING_FIELDS));
        assert!(!form.is_submitting());
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let mut form = filled(" ", " ");

        assert!(form.begin().is_ok());
    }

    #[test]
    fn second_submit_is_busy() {
        let mut form = filled("user@example.com", "pw");

        assert!(form.begin().is_ok());
        assert!(form.is_submitting());
        assert!(matches!(form.begin(), Err(Outcome::Busy)));
    }

    #[test]
    fn begin_clears_old_banners() {
        let mut form = filled("user@example.com", "pw");
        form.error = Some("old".to_string());
        form.message = Some("old".to_string());

        assert!(form.begin().is_ok());
        assert_eq!(form.error(), None);
        assert_eq!(form.message(), None);
    }

    #[test_log::test(tokio::test)]
    async fn success_clears_submitting_and_builds_a_session() {
        let server = StubServer::json(
            "/api/auth/login",
            StatusCode::OK,
            json!({
                "access_token": "abc",
                "token_type": "bearer",
                "user": {
                    "id": "u-1",
                    "email": "trainer@example.com",
                    "full_name": "Test Trainer",
                    "id_number": "000000-00-0000",
                    "role": "trainer",
                }
            }),
        )
        .await;
        let client = Client::new(ClientConfig::new(&server.base_url()).unwrap());
        let mut form = filled("trainer@example.com", "correct-pw");

        let outcome = form.submit(&client, &reqwest::Client::new()).await;

        assert!(!form.is_submitting());
        assert_eq!(form.message(), Some(LOGIN_SUCCEEDED));
        assert_eq!(form.error(), None);

        match outcome {
            Outcome::LoggedIn {
                session: Some(session),
            } => {
                assert_eq!(session.access_token, "abc");
                assert_eq!(session.user.role, Role::Trainer);
                assert_eq!(session.dashboard_path(), "/trainer");
                assert_eq!(session.config, client.config);
            }
            other => panic!("expected a session, got {other:?}"),
        }
    }

    #[test_log::test(tokio::test)]
    async fn success_without_a_user_still_logs_in() {
        let server =
            StubServer::json("/api/auth/login", StatusCode::OK, json!({"access_token": "abc"})).await;
        let client = Client::new(ClientConfig::new(&server.base_url()).unwrap());
        let mut form = filled("user@example.com", "correct-pw");

        let outcome = form.submit(&client, &reqwest::Client::new()).await;

        assert!(matches!(outcome, Outcome::LoggedIn { session: None }));
        assert!(!form.is_submitting());
    }

    #[test_log::test(tokio::test)]
    async fn rejection_shows_server_message() {
        let server = StubServer::json(
            "/api/auth/login",
            StatusCode::UNAUTHORIZED,
            json!({"detail": "Account is inactive"}),
        )
        .await;
        let client = Client::new(ClientConfig::new(&server.base_url()).unwrap());
        let mut form = filled("user@example.com", "pw");

        let outcome = form.submit(&client, &reqwest::Client::new()).await;

        assert!(matches!(outcome, Outcome::Rejected { status: 401 }));
        assert!(!form.is_submitting());
        assert_eq!(form.error(), Some("Account is inactive"));
    }

    #[test_log::test(tokio::test)]
    async fn rejection_without_message_uses_fallback() {
        let server = StubServer::raw("/api/auth/login", StatusCode::FORBIDDEN, "").await;
        let client = Client::new(ClientConfig::new(&server.base_url()).unwrap());
        let mut form = filled("user@example.com", "pw");

        form.submit(&client, &reqwest::Client::new()).await;

        assert_eq!(form.error(), Some(LOGIN_FAILED));
    }

    #[test_log::test(tokio::test)]
    async fn transport_failure_clears_submitting() {
        let client = Client::new(ClientConfig::new(&unreachable_server().await).unwrap());
        let mut form = filled("user@example.com", "pw");

        let outcome = form.submit(&client, &reqwest::Client::new()).await;

        assert!(matches!(outcome, Outcome::Failed(_)));
        assert!(!form.is_submitting());
        assert_eq!(form.error(), Some(SOMETHING_WENT_WRONG));
    }
}
