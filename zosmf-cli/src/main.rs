//! z/OSMF CLI
//!
//! Command-line interface for the z/OSMF job REST services: submit JCL,
//! query and list jobs, and manage job lifecycle from a terminal.
//!
//! Connection settings come from the team configuration (via the profile
//! store) or from explicit host/user/password overrides.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "zosmf")]
#[command(about = "z/OSMF jobs command-line interface", long_about = None)]
struct Cli {
    /// Profile type to resolve from the team configuration
    #[arg(long, env = "ZOSMF_PROFILE_TYPE", default_value = "zosmf")]
    profile_type: String,

    /// z/OSMF host; with --user and --password, skips profile loading
    #[arg(long, env = "ZOSMF_HOST")]
    host: Option<String>,

    /// z/OSMF port
    #[arg(long, env = "ZOSMF_PORT", default_value_t = 443)]
    port: u16,

    /// Userid for basic authentication
    #[arg(long, env = "ZOSMF_USER")]
    user: Option<String>,

    /// Password for basic authentication
    #[arg(long, env = "ZOSMF_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zosmf_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        profile_type: cli.profile_type,
        host: cli.host,
        port: cli.port,
        user: cli.user,
        password: cli.password,
        insecure: cli.insecure,
    };

    handle_command(cli.command, &config).await
}
