// keg/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use keg_core::infrastructure::load_settings;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    // RUST_LOG=debug keg check ... pour voir les détails.
    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli.config_dir)?;

    match cli.command {
        Commands::Check { files } => commands::check::execute(&files, &settings),
        Commands::Show { file } => commands::show::execute(&file, &settings),
        Commands::Resolve { file } => commands::resolve::execute(&file, &settings),
        Commands::Verify { file, artifact } => {
            commands::verify::execute(&file, &artifact, &settings)
        }
        Commands::List { dir, strict } => {
            commands::list::execute(&cli.config_dir, dir, strict, &settings)
        }
        Commands::Export { file, format, out } => {
            commands::export::execute(&file, format, out.as_deref(), &settings)
        }
    }
}
