// Auth module: exchanges the long-lived refresh token for a short-lived
// access token. One request, no retries.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{DeployError, Result};

/// OAuth client credentials plus the refresh token. Held in memory only.
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub refresh_token: String,
}

// Keep secrets out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    fn refresh_form(&self) -> [(&'static str, &str); 5] {
        [
            ("grant_type", "refresh_token"),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", &self.refresh_token),
            ("redirect_uri", &self.redirect_uri),
        ]
    }
}

/// Response of the token endpoint. `expires_in` is only logged.
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

pub struct OAuthClient {
    client: Client,
    token_url: String,
    credentials: Credentials,
}

impl OAuthClient {
    pub fn new(client: Client, token_url: impl Into<String>, credentials: Credentials) -> Self {
        OAuthClient {
            client,
            token_url: token_url.into(),
            credentials,
        }
    }

    /// POST the refresh-token grant and return the fresh access token.
    pub fn access_token(&self) -> Result<String> {
        debug!(url = %self.token_url, client_id = %self.credentials.client_id, "refreshing access token");
        let res = self
            .client
            .post(&self.token_url)
            .form(&self.credentials.refresh_form())
            .send()?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(DeployError::Auth { status, body });
        }
        let token: TokenResponse = res.json()?;
        debug!(expires_in = ?token.expires_in, "access token acquired");
        Ok(token.access_token)
    }
}
