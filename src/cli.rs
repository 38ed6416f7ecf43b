//! CLI argument parsing with subcommand architecture.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "claude-relay",
    version,
    about = "Relays browser requests to the Anthropic Messages API with a server-held key"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the relay server (default when no subcommand is given)
    Run(RunArgs),
    /// Validate the config file and report whether the API key is set
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to config file
    #[arg(short, long, default_value = "config.yaml", env = "RELAY_CONFIG")]
    pub config: String,

    /// Listen host
    #[arg(long, env = "RELAY_HOST")]
    pub host: Option<String>,

    /// Listen port
    #[arg(long, env = "RELAY_PORT")]
    pub port: Option<u16>,

    /// Log level
    #[arg(long, default_value = "info", env = "RELAY_LOG_LEVEL")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to config file
    #[arg(short, long, default_value = "config.yaml", env = "RELAY_CONFIG")]
    pub config: String,
}
