use crate::command::Command;
use clap::Parser;
use std::path::PathBuf;
use trainhub_core::api::{self, ClientConfig, IdentifierField, DEFAULT_BASE_URL};

/// Sign in to the training management system from the command line
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Root of the backend's REST API
    #[clap(long, env = "TRAINHUB_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    api_base_url: String,

    /// JSON key to send the email or IC number under when logging in
    #[clap(long, env = "TRAINHUB_IDENTIFIER_FIELD", default_value_t = IdentifierField::Username, global = true)]
    identifier_field: IdentifierField,

    /// Where should we store the session?
    #[clap(long, env = "TRAINHUB_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// What to do
    #[clap(subcommand)]
    pub command: Command,
}

impl Config {
    /// Build the client configuration from the command line.
    ///
    /// ## Errors
    ///
    /// Fails if `--api-base-url` isn't an absolute URL.
    pub fn client_config(&self) -> api::error::Result<ClientConfig> {
        Ok(ClientConfig::new(&self.api_base_url)?.with_identifier_field(self.identifier_field))
    }

    /// Get either the configured or a default data directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("com", "trainhub", "trainhub")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
