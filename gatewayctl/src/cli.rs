//! Command-line definitions and dispatch.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use gateway_client::{GatewayClient, RequestExecutor};
use gateway_common::{AccountConfiguration, DeviceSettings, LoggingSettings};
use serde::de::DeserializeOwned;

type BoxError = Box<dyn std::error::Error>;

/// Read and update gateway account settings
#[derive(Debug, Parser)]
#[command(name = "gatewayctl", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default: ./gatewayctl.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Account ID (overrides account_id from configuration)
    #[arg(short, long, global = true)]
    pub account: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the gateway identity of the account
    Account,
    /// Gateway configuration (antivirus, TLS decryption, block page, ...)
    #[command(subcommand)]
    Configuration(FileAction),
    /// Device-level proxy settings
    #[command(subcommand)]
    Devices(DeviceAction),
    /// Activity logging settings
    #[command(subcommand)]
    Logging(FileAction),
}

#[derive(Debug, Subcommand)]
pub enum FileAction {
    /// Print the current settings
    Get,
    /// Replace the settings with the JSON document in a file
    Set {
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum DeviceAction {
    /// Print the current settings
    Get,
    /// Update the proxy flags
    Set {
        /// Enable the gateway proxy
        #[arg(long, action = ArgAction::Set)]
        proxy: bool,
        /// Enable UDP proxying
        #[arg(long, action = ArgAction::Set)]
        udp_proxy: bool,
    },
}

/// Run one command and return the result as pretty-printed JSON.
pub async fn run<E: RequestExecutor>(
    client: &GatewayClient<E>,
    account_id: &str,
    command: &Command,
) -> Result<String, BoxError> {
    let output = match command {
        Command::Account => serde_json::to_string_pretty(&client.account(account_id).await?)?,
        Command::Configuration(FileAction::Get) => {
            serde_json::to_string_pretty(&client.configuration(account_id).await?)?
        }
        Command::Configuration(FileAction::Set { file }) => {
            let configuration: AccountConfiguration = read_json(file)?;
            let updated = client
                .update_configuration(account_id, &configuration)
                .await?;
            serde_json::to_string_pretty(&updated)?
        }
        Command::Devices(DeviceAction::Get) => {
            serde_json::to_string_pretty(&client.device_settings(account_id).await?)?
        }
        Command::Devices(DeviceAction::Set { proxy, udp_proxy }) => {
            let settings = DeviceSettings::new(*proxy, *udp_proxy);
            let updated = client.update_device_settings(account_id, &settings).await?;
            serde_json::to_string_pretty(&updated)?
        }
        Command::Logging(FileAction::Get) => {
            serde_json::to_string_pretty(&client.logging_settings(account_id).await?)?
        }
        Command::Logging(FileAction::Set { file }) => {
            let settings: LoggingSettings = read_json(file)?;
            let updated = client.update_logging_settings(account_id, &settings).await?;
            serde_json::to_string_pretty(&updated)?
        }
    };

    Ok(output)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, BoxError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e).into())
}
