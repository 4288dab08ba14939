mod commands;
mod error;
mod logger;

use crate::commands::cli::{Cli, Command};
use crate::error::SetupError;
use clap::Parser;
use log::{error, info};

fn main() {
    logger::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Setup);
    println!("{command}");

    if let Err(e) = run(command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), SetupError> {
    let base_dir = commands::setup::project_root()?;
    info!("Project base directory: {}", base_dir.display());

    match command {
        Command::Setup => commands::setup::run(&base_dir),
        Command::Lockfiles => commands::lockfiles::run(&base_dir),
    }
}
