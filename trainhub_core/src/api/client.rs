use super::config::ClientConfig;
use super::error::{self, Error};
use super::password::{self, ForgotReq, ResetReq};
use super::response::{ApiResponse, LoginResult};
use super::{login, me};
use crate::session::Session;
use serde::Serialize;

/// Client for the backend's auth endpoints.
///
/// Every call is a single attempt: no retries, no timeouts beyond whatever
/// the `reqwest::Client` you pass in was built with.
#[derive(Debug, Clone)]
pub struct Client {
    /// Where the backend is and how to talk to it.
    pub config: ClientConfig,

    /// Bearer token. Set this by logging in or by restoring a `Session`.
    pub auth: Option<String>,
}

impl Client {
    /// Construct a new, unauthenticated client
    pub fn new(config: ClientConfig) -> Self {
        Self { config, auth: None }
    }

    /// Construct a client that picks up where a previous login left off.
    pub fn with_session(session: &Session) -> Self {
        Self {
            config: session.config.clone(),
            auth: Some(session.access_token.clone()),
        }
    }

    /// Use this token for authenticated calls from now on.
    pub fn authenticate(&mut self, token: impl Into<String>) {
        self.auth = Some(token.into());
    }

    /// Log into the server with an email address or IC number.
    ///
    /// A rejected login is not an error: check `ok` and `status` on the
    /// result, and `error_message` for what the server said.
    ///
    /// ## Errors
    ///
    /// Only if the base URL is unusable or the server can't be reached.
    #[tracing::instrument(skip(self, http, password), fields(server = %self.config.base_url()))]
    pub async fn login(
        &self,
        http: &reqwest::Client,
        identifier: &str,
        password: &str,
    ) -> error::Result<LoginResult> {
        let req = login::Req {
            field: self.config.identifier_field,
            ..login::Req::new(identifier, password)
        };

        self.post(http, login::PATH, &req).await
    }

    /// Ask the server who we're logged in as.
    ///
    /// ## Errors
    ///
    /// `Error::Unauthenticated` if we have no token, otherwise the same as
    /// `login`.
    #[tracing::instrument(skip(self, http), fields(server = %self.config.base_url()))]
    pub async fn me(&self, http: &reqwest::Client) -> error::Result<ApiResponse> {
        let url = self.config.endpoint(me::PATH)?;

        self.authenticated(|token| http.get(url).bearer_auth(token))
            .await
    }

    /// Start a password reset for the account with this email.
    ///
    /// The backend answers the same way whether or not the account exists.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `login`.
    #[tracing::instrument(skip(self, http), fields(server = %self.config.base_url()))]
    pub async fn forgot_password(
        &self,
        http: &reqwest::Client,
        email: &str,
    ) -> error::Result<ApiResponse> {
        let req = ForgotReq {
            email: email.to_string(),
        };

        self.post(http, password::FORGOT_PATH, &req).await
    }

    /// Set a new password for the account with this email.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `login`.
    #[tracing::instrument(skip(self, http, new_password), fields(server = %self.config.base_url()))]
    pub async fn reset_password(
        &self,
        http: &reqwest::Client,
        email: &str,
        new_password: &str,
    ) -> error::Result<ApiResponse> {
        let req = ResetReq {
            email: email.to_string(),
            new_password: new_password.to_string(),
        };

        self.post(http, password::RESET_PATH, &req).await
    }

    /// POST a JSON body to an endpoint.
    async fn post<B>(&self, http: &reqwest::Client, path: &str, body: &B) -> error::Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path)?;

        Self::handle_response(http.post(url).json(body)).await
    }

    /// Run a request that needs a token, or fail without sending anything.
    async fn authenticated<CB>(&self, cb: CB) -> error::Result<ApiResponse>
    where
        CB: FnOnce(&str) -> reqwest::RequestBuilder,
    {
        match &self.auth {
            Some(auth) => Self::handle_response(cb(auth)).await,
            None => Err(Error::Unauthenticated),
        }
    }

    /// Send a request and normalize whatever comes back.
    ///
    /// ## Errors
    ///
    /// - `Ok(..)` for any HTTP response at all, success or not
    /// - `Error::Http` if the request couldn't be sent or the body couldn't
    ///   be read to the end
    async fn handle_response(req: reqwest::RequestBuilder) -> error::Result<ApiResponse> {
        let resp = req.send().await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        tracing::debug!(%status, bytes = body.len(), "got response");

        Ok(ApiResponse::from_parts(status, &body))
    }
}
