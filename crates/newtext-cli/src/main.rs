//! newtext - shape text with HarfBuzz from the command line

use clap::Parser;

use newtext_cli::cli::{Cli, Commands};
use newtext_cli::commands;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Shape(args) => commands::shape::run(args),
        Commands::Scripts(args) => commands::scripts::run(args),
        Commands::Info(args) => commands::info::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
