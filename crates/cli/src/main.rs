use anyhow::Context;
use clap::{Parser, Subcommand};
use netscene_commands::{handlers, CommandDispatcher, CommandState};
use netscene_domain::{CliOverrides, PiholeApi};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "netscene")]
#[command(version)]
#[command(about = "NetScene - LAN device discovery and Pi-hole statistics")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pretty-print JSON results
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List devices in the local ARP table
    Scan {
        /// ARP table query binary
        #[arg(long, value_name = "BIN")]
        arp_command: Option<String>,
    },

    /// Fetch summary statistics from a Pi-hole instance
    Pihole {
        /// Host, host:port or http(s) URL of the Pi-hole
        #[arg(long)]
        host: String,

        /// Admin password (v6) or API token (legacy)
        #[arg(long)]
        password: Option<String>,

        /// Pi-hole API flavor (v6, legacy)
        #[arg(long, value_name = "API")]
        api: Option<PiholeApi>,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Run a named command through the dispatcher
    Invoke {
        #[arg(value_name = "COMMAND")]
        name: String,

        /// JSON arguments object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            log_level: self.log_level.clone(),
            ..Default::default()
        };

        match &self.command {
            Command::Scan { arp_command } => overrides.arp_command = arp_command.clone(),
            Command::Pihole { api, timeout, .. } => {
                overrides.pihole_api = *api;
                overrides.pihole_timeout_secs = *timeout;
            }
            Command::Invoke { .. } => {}
        }

        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config.logging)?;

    debug!("NetScene v{}", env!("CARGO_PKG_VERSION"));

    let state = di::UseCases::new(&config).into_state();

    let outcome = match cli.command {
        Command::Scan { .. } => scan(&state).await,
        Command::Pihole { host, password, .. } => pihole(&state, host, password).await,
        Command::Invoke { name, args } => invoke(state, &name, args.as_deref()).await?,
    };

    match outcome {
        Ok(value) => {
            print_json(&value, cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn scan(state: &CommandState) -> Result<serde_json::Value, String> {
    let devices = handlers::scan_network(state).await?;
    info!(devices = devices.len(), "Scan finished");
    to_json(&devices)
}

async fn pihole(
    state: &CommandState,
    host: String,
    password: Option<String>,
) -> Result<serde_json::Value, String> {
    let stats = handlers::get_pihole_stats(state, host, password).await?;
    to_json(&stats)
}

/// Malformed `--args` is a usage error and aborts; command failures are
/// reported like any other.
async fn invoke(
    state: CommandState,
    name: &str,
    args: Option<&str>,
) -> anyhow::Result<Result<serde_json::Value, String>> {
    let args = match args {
        Some(raw) => serde_json::from_str(raw).context("--args is not valid JSON")?,
        None => serde_json::Value::Null,
    };

    Ok(CommandDispatcher::new(state).dispatch(name, args).await)
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, String> {
    serde_json::to_value(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

fn print_json(value: &serde_json::Value, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}
