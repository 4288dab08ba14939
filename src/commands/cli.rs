use clap::{Parser, Subcommand};
use std::fmt::Display;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Running without a subcommand performs the full setup.
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create placeholder secrets and patch the service .env files
    Setup,

    /// Refresh package-lock.json in every service directory
    Lockfiles,
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Setup => write!(f, "Preparing the development environment"),
            Command::Lockfiles => write!(f, "Refreshing package lockfiles"),
        }
    }
}
