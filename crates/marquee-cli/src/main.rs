//! Marquee CLI: the `marquee` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { catalog, json } => commands::list::run(catalog, json),

        Commands::Get { id, catalog, json } => commands::get::run(id, catalog, json),

        Commands::Search {
            name,
            id,
            genre,
            catalog,
            json,
        } => commands::search::run(name, id, genre, catalog, json),

        Commands::Genres { catalog, json } => commands::genres::run(catalog, json),
    }
}
