// Entrypoint for the deployer.
// - Keeps `main` small: read config, build the API client, run the deploy.
// - Any error ends the process with a message on stderr and exit code 1.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gas_deploy::{api::ScriptClient, DeployConfig, DeployError, Deployer};

fn main() {
    let config = DeployConfig::parse();
    init_logging(&config);

    if let Err(e) = run(&config) {
        eprintln!("Deployment failed: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(config: &DeployConfig) -> Result<(), DeployError> {
    let api = ScriptClient::new(&config.api_base_url, &config.token_url, config.credentials())?;
    let mut stdout = std::io::stdout().lock();
    Deployer::new(config).run(&api, &mut stdout)?;
    Ok(())
}

fn init_logging(config: &DeployConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
