use clap::{Parser, Subcommand};

pub const DEFAULT_CATALOG_PATH: &str = "data/movies.json";

#[derive(Parser)]
#[command(
    name = "marquee",
    about = "Marquee: lookup and search over an in-memory movie catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every movie in catalog order, plus the available genres
    List {
        /// Path to the catalog JSON source
        #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
        catalog: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one movie by its identifier
    Get {
        /// Movie identifier (strictly positive)
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Path to the catalog JSON source
        #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
        catalog: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search by any combination of title, identifier, and genre
    Search {
        /// Title substring, case-insensitive
        #[arg(long)]
        name: Option<String>,

        /// Exact movie identifier
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,

        /// Genre substring, case-insensitive
        #[arg(long)]
        genre: Option<String>,

        /// Path to the catalog JSON source
        #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
        catalog: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the distinct genres in the catalog
    Genres {
        /// Path to the catalog JSON source
        #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
        catalog: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
