use std::path::PathBuf;

use bastion_config::Environment;
use clap::Parser;

/// Bastion API server
#[derive(Debug, Parser)]
#[command(name = "bastion", about = "JSON API server with uniform error envelopes")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "bastion.toml", env = "BASTION_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "BASTION_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Override the environment mode (`development` or `production`)
    #[arg(short, long, env = "BASTION_ENV")]
    pub environment: Option<Environment>,
}
