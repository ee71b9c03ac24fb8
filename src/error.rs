// Error module: every failure the deployer can hit, as one enum. Each step
// returns `Result<_, DeployError>` and `main` maps whatever bubbles up to a
// message on stderr plus an exit code.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("GAS_PROJECT_ID environment variable is not set")]
    MissingProjectId,

    #[error("appsscript.json is missing in {} directory", dir.display())]
    MissingManifest { dir: PathBuf },

    #[error("expected exactly one appsscript descriptor and it must be appsscript.json, found {count} named appsscript")]
    ManifestCount { count: usize },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("file name is not valid UTF-8: {}", path.display())]
    InvalidFileName { path: PathBuf },

    #[error("Token refresh failed: {status} - {body}")]
    Auth { status: StatusCode, body: String },

    #[error("Update content failed: {status} - {body}")]
    Remote { status: StatusCode, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to render request: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DeployError {
    /// Process exit status for this error. Every handled failure terminates
    /// the same way; only the message differs.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeployError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
