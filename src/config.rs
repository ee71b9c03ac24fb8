// Configuration module: everything the deployer needs, read once at startup
// from flags or environment variables and handed to `Deployer` by reference.

use std::path::PathBuf;

use clap::Parser;

use crate::auth::Credentials;
use crate::error::{DeployError, Result};

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/oauth2callback";
pub const DEFAULT_API_BASE_URL: &str = "https://script.googleapis.com";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Push the files of a local directory to an Apps Script project.
#[derive(Debug, Clone, Parser)]
#[command(name = "gas-deploy", version, about)]
pub struct DeployConfig {
    /// OAuth client id.
    #[arg(long, env = "OAUTH_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// OAuth client secret.
    #[arg(long, env = "OAUTH_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// OAuth refresh token used to mint an access token.
    #[arg(long, env = "OAUTH_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    /// Redirect URI registered for the OAuth client.
    #[arg(long, env = "OAUTH_REDIRECT_URI", default_value = DEFAULT_REDIRECT_URI)]
    pub redirect_uri: String,

    /// Target script project id.
    #[arg(long, env = "GAS_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Directory whose files make up the project.
    #[arg(long, env = "GAS_SRC_DIR", default_value = "./src")]
    pub src_dir: PathBuf,

    /// Base URL of the Apps Script API.
    #[arg(long, env = "GAS_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// OAuth token endpoint.
    #[arg(long, env = "OAUTH_TOKEN_URL", default_value = DEFAULT_TOKEN_URL)]
    pub token_url: String,

    /// Print the request instead of sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DeployConfig {
    /// The target project id. Absent and blank values are both rejected.
    pub fn project_id(&self) -> Result<&str> {
        match self.project_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(DeployError::MissingProjectId),
        }
    }

    /// OAuth credentials. Missing values are passed through as empty strings;
    /// the token endpoint is the one that rejects them.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone().unwrap_or_default(),
            client_secret: self.client_secret.clone().unwrap_or_default(),
            redirect_uri: self.redirect_uri.clone(),
            refresh_token: self.refresh_token.clone().unwrap_or_default(),
        }
    }

    /// Log filter derived from `-v` when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
