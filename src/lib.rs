// Library root
// -----------
// The binary (`main.rs`) parses configuration and hands it to `deploy`.
//
// Module responsibilities:
// - `config`: flags and environment variables, read once at startup.
// - `files`: turns the source directory into file descriptors.
// - `auth`: refresh-token exchange for an access token.
// - `api`: the Apps Script "update content" call behind `ScriptApi`.
// - `deploy`: the linear deployment sequence and its console report.
// - `error`: `DeployError` and its exit code.
pub mod api;
pub mod auth;
pub mod config;
pub mod deploy;
pub mod error;
pub mod files;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::DeployConfig;
pub use deploy::Deployer;
pub use error::DeployError;
