//! gatewayctl - read and update gateway account settings from the command line.

use clap::Parser;
use gateway_client::{ClientConfig, GatewayClient, HttpExecutor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = ClientConfig::load_from(cli.config.as_deref()).map_err(|e| {
        format!(
            "{}. Make sure gatewayctl.toml exists or set GATEWAY__API_TOKEN.",
            e
        )
    })?;

    // Initialize tracing; logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let account_id = cli
        .account
        .clone()
        .or_else(|| config.account_id.clone())
        .ok_or("No account ID: pass --account or set GATEWAY__ACCOUNT_ID")?;

    let executor = HttpExecutor::from_config(&config)?;
    tracing::debug!(base_url = %executor.base_url(), account_id = %account_id, "Using gateway API");
    let client = GatewayClient::new(executor);

    match cli::run(&client, &account_id, &cli.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            Err(e)
        }
    }
}
