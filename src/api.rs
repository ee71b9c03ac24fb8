// API client module: a small blocking HTTP client for the Apps Script API.
// It only knows one call, "update content", which replaces every file of a
// project with the files sent.

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::auth::{Credentials, OAuthClient};
use crate::error::{DeployError, Result};
use crate::files::{is_manifest, ScriptFile, MANIFEST_NAME};

/// The project id and the full file set of one deployment.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    project_id: String,
    files: Vec<ScriptFile>,
}

impl DeploymentRequest {
    /// Bundle `files` for `project_id`. Requires exactly one descriptor named
    /// `appsscript`, and it must be the JSON manifest.
    pub fn new(project_id: impl Into<String>, files: Vec<ScriptFile>) -> Result<Self> {
        let project_id = project_id.into();
        if project_id.trim().is_empty() {
            return Err(DeployError::MissingProjectId);
        }
        let count = files.iter().filter(|f| f.name == MANIFEST_NAME).count();
        if count != 1 || !files.iter().any(is_manifest) {
            return Err(DeployError::ManifestCount { count });
        }
        Ok(DeploymentRequest { project_id, files })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn files(&self) -> &[ScriptFile] {
        &self.files
    }

    /// JSON body of the update call.
    pub fn body(&self) -> UpdateContentRequest<'_> {
        UpdateContentRequest { files: &self.files }
    }
}

/// Request body of `projects.updateContent`.
#[derive(Serialize, Debug)]
pub struct UpdateContentRequest<'a> {
    pub files: &'a [ScriptFile],
}

/// The remote side of a deployment.
pub trait ScriptApi {
    /// Overwrite the project's content with `req`'s files and return the
    /// service's response payload untouched.
    fn update_content(&self, req: &DeploymentRequest) -> Result<serde_json::Value>;
}

/// Apps Script API client: refreshes an access token, then sends the update.
/// Building one performs no network I/O.
pub struct ScriptClient {
    client: Client,
    base_url: String,
    oauth: OAuthClient,
}

impl ScriptClient {
    pub fn new(
        base_url: impl Into<String>,
        token_url: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(ScriptClient {
            oauth: OAuthClient::new(client.clone(), token_url, credentials),
            client,
            base_url: base_url.into(),
        })
    }

    fn content_url(&self, project_id: &str) -> String {
        format!(
            "{}/v1/projects/{}/content",
            self.base_url.trim_end_matches('/'),
            project_id
        )
    }
}

impl ScriptApi for ScriptClient {
    fn update_content(&self, req: &DeploymentRequest) -> Result<serde_json::Value> {
        let token = self.oauth.access_token()?;
        let url = self.content_url(req.project_id());
        info!(%url, files = req.files().len(), "updating project content");

        let res = self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(&req.body())
            .send()?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(DeployError::Remote { status, body });
        }
        let payload: serde_json::Value = res.json()?;
        debug!(?payload, "update content response");
        Ok(payload)
    }
}
