use std::path::{Path, PathBuf};
use tokio::{fs, io};
use trainhub_core::Session;

/// Keeps the current session on disk between runs.
#[derive(Debug)]
pub struct SessionStore {
    /// The JSON file we read and write
    path: PathBuf,
}

impl SessionStore {
    /// A store that keeps `session.json` in `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
        }
    }

    /// Where the session lives
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, if there is one.
    ///
    /// ## Errors
    ///
    /// IO problems other than the file not existing, and unreadable JSON.
    pub async fn load(&self) -> Result<Option<Session>, StoreError> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Ok(Some(serde_json::from_slice(&data)?))
    }

    /// Replace the stored session.
    ///
    /// ## Errors
    ///
    /// IO problems, e.g. permissions on the data directory.
    pub async fn save(&self, session: &Session) -> Result<(), StoreError> {
        tracing::info!(path = %self.path.display(), "saving session");

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec_pretty(session)?;
        fs::write(&self.path, &data).await?;

        Ok(())
    }

    /// Forget the stored session. Returns whether there was one.
    ///
    /// ## Errors
    ///
    /// IO problems other than the file already being gone.
    pub async fn clear(&self) -> Result<bool, StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

/// Problems reading or writing the session file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// We had a problem with the file itself.
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// We had a problem loading or saving JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
