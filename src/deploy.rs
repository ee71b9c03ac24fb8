// Deploy flow: the whole program as one linear sequence. Check the project
// id, read the source directory, check for the manifest, push, report.
// Nothing touches the network until the local checks pass.

use std::io::Write;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::api::{DeploymentRequest, ScriptApi};
use crate::config::DeployConfig;
use crate::error::{DeployError, Result};
use crate::files::{collect_files, ensure_manifest};

pub struct Deployer<'a> {
    config: &'a DeployConfig,
}

impl<'a> Deployer<'a> {
    pub fn new(config: &'a DeployConfig) -> Self {
        Deployer { config }
    }

    /// Assemble the request from local state only.
    pub fn prepare(&self) -> Result<DeploymentRequest> {
        let project_id = self.config.project_id()?;
        let dir = &self.config.src_dir;
        let files = collect_files(dir)?;
        ensure_manifest(&files, dir)?;
        info!(dir = %dir.display(), files = files.len(), "source files collected");
        DeploymentRequest::new(project_id, files)
    }

    /// Run one deployment against `api`, writing the console report to `out`.
    /// Returns the service's response, or `Value::Null` on a dry run.
    pub fn run(&self, api: &dyn ScriptApi, out: &mut impl Write) -> Result<serde_json::Value> {
        let request = self.prepare()?;
        say(out, format_args!("Deploying to project: {}", request.project_id()))?;

        if self.config.dry_run {
            let body = serde_json::to_string_pretty(&request.body())?;
            say(out, format_args!("Dry run, not sending:\n{body}"))?;
            return Ok(serde_json::Value::Null);
        }

        let spinner = spinner("Uploading...");
        let result = api.update_content(&request);
        spinner.finish_and_clear();
        let response = result?;

        debug!(script_id = ?response.get("scriptId"), "remote content replaced");
        let pretty = serde_json::to_string_pretty(&response)?;
        say(out, format_args!("Deployment complete! {pretty}"))?;
        Ok(response)
    }
}

fn say(out: &mut impl Write, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{line}").map_err(DeployError::Output)
}

/// Spinner on stderr; indicatif hides it when stderr is not a terminal.
fn spinner(msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
