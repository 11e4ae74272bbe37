//! Flowdock user management - main entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};

use flowdock_users::flowdock::mask_api_key;
use flowdock_users::{run_command, ApiKeyResolver, Cli, ClientSettings, FlowdockClient};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting flowdock v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Checked before any network call
    let api_key = ApiKeyResolver::new().resolve(cli.api_key.as_deref())?;

    if cli.debug {
        eprintln!("Got api key: {}", mask_api_key(&api_key));
    }
    debug!("API URL: {}, timeout: {}s", cli.api_url, cli.timeout);

    let settings = ClientSettings {
        base_url: cli.api_url.clone(),
        timeout: Duration::from_secs(cli.timeout),
        debug: cli.debug,
    };
    let mut client = FlowdockClient::from_settings(api_key, &settings)?;

    let result = run_command(&client, cli).await;
    client.close();
    result
}
