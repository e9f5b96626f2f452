use crate::config::Config;
use crate::store::{SessionStore, StoreError};
use clap::Subcommand;
use std::{io, process::ExitCode};
use tokio::task;
use trainhub_core::api::{self, me, ApiResponse, Client};
use trainhub_core::login_form::{LoginForm, Outcome};

/// Things you can ask the CLI to do.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with an email address or IC number and remember the session
    Login {
        /// Email address or IC number
        identifier: String,

        /// Password. Prompted for (without echo) if not given.
        #[clap(long, env = "TRAINHUB_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Show who the stored session belongs to
    #[clap(name = "whoami")]
    WhoAmI,

    /// Forget the stored session
    Logout,

    /// Ask for password reset instructions
    ForgotPassword {
        /// Email address on the account
        email: String,
    },

    /// Set a new password for an account
    ResetPassword {
        /// Email address on the account
        email: String,

        /// The new password. Prompted for (without echo) if not given.
        #[clap(long, env = "TRAINHUB_NEW_PASSWORD", hide_env_values = true)]
        new_password: Option<String>,
    },
}

impl Command {
    /// Run the command, printing results for the user. Expected failures
    /// (wrong password, no session) are reported and turned into a failing
    /// exit code; only unexpected ones come back as a `Problem`.
    pub async fn run(&self, config: &Config, http: &reqwest::Client) -> Result<ExitCode, Problem> {
        let store = SessionStore::in_dir(&config.data_dir());

        match self {
            Self::Login {
                identifier,
                password,
            } => {
                let client = Client::new(config.client_config()?);

                let mut form = LoginForm::new();
                form.identifier.clone_from(identifier);
                form.password = match password {
                    Some(password) => password.clone(),
                    None => prompt_password("Password: ").await?,
                };

                match form.submit(&client, http).await {
                    Outcome::LoggedIn {
                        session: Some(session),
                    } => {
                        store.save(&session).await?;

                        println!(
                            "Logged in as {} ({}). Dashboard: {}",
                            session.user.full_name,
                            session.user.role,
                            session.dashboard_path()
                        );
                        Ok(ExitCode::SUCCESS)
                    }

                    Outcome::LoggedIn { session: None } => {
                        println!("{}", form.message().unwrap_or_default());
                        eprintln!("The server didn't send a session, so nothing was saved.");
                        Ok(ExitCode::FAILURE)
                    }

                    Outcome::Invalid | Outcome::Busy | Outcome::Rejected { .. } | Outcome::Failed(_) => {
                        eprintln!("{}", form.error().unwrap_or_default());
                        Ok(ExitCode::FAILURE)
                    }
                }
            }

            Self::WhoAmI => {
                let Some(session) = store.load().await? else {
                    eprintln!("Not logged in.");
                    return Ok(ExitCode::FAILURE);
                };

                let resp = Client::with_session(&session).me(http).await?;

                if !resp.ok {
                    report_rejection(&resp, "Your session is no longer valid.");
                    return Ok(ExitCode::FAILURE);
                }

                let user: me::Resp = resp.parse()?;
                println!("{} <{}>", user.full_name, user.email);
                println!("IC number: {}", user.id_number);
                println!("Role: {} ({})", user.role, user.role.dashboard_path());
                println!("Server: {}", session.config.base_url());

                Ok(ExitCode::SUCCESS)
            }

            Self::Logout => {
                if store.clear().await? {
                    println!("Logged out.");
                } else {
                    println!("Not logged in.");
                }

                Ok(ExitCode::SUCCESS)
            }

            Self::ForgotPassword { email } => {
                let client = Client::new(config.client_config()?);
                let resp = client.forgot_password(http, email).await?;

                Ok(report(&resp, "Password reset instructions have been sent."))
            }

            Self::ResetPassword {
                email,
                new_password,
            } => {
                let new_password = match new_password {
                    Some(new_password) => new_password.clone(),
                    None => prompt_password("New password: ").await?,
                };

                let client = Client::new(config.client_config()?);
                let resp = client.reset_password(http, email, &new_password).await?;

                Ok(report(&resp, "Password reset successfully."))
            }
        }
    }
}

/// Print the server's message for a response and pick an exit code.
fn report(resp: &ApiResponse, fallback: &str) -> ExitCode {
    if resp.ok {
        println!("{}", resp.message().unwrap_or(fallback));
        ExitCode::SUCCESS
    } else {
        report_rejection(resp, "Request failed. Please try again.");
        ExitCode::FAILURE
    }
}

/// Print why the server said no.
fn report_rejection(resp: &ApiResponse, fallback: &str) {
    eprintln!(
        "{} (HTTP {})",
        resp.error_message().unwrap_or(fallback),
        resp.status
    );
}

/// Ask for a password on the terminal with echo turned off.
async fn prompt_password(label: &'static str) -> io::Result<String> {
    task::spawn_blocking(move || rpassword::prompt_password(label))
        .await
        .map_err(io::Error::other)?
}

/// Problems that can happen while running a `Command`.
#[derive(Debug, thiserror::Error)]
pub enum Problem {
    /// We had a problem with the terminal.
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// We had a problem loading or saving the session.
    #[error("Problem with the stored session: {0}")]
    Store(#[from] StoreError),

    /// We had a problem communicating with the server, for example due to a bad
    /// URL or the server being down.
    #[error("Problem communicating with the server: {0}")]
    Server(#[from] api::Error),
}
