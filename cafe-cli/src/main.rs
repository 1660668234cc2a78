//! Cafe CLI - Command-line administration of the cafe database

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cafe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the SQLite database
    #[arg(long, global = true, env = "CAFE_DATABASE_PATH", default_value = "cafes.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and cafe table if missing
    Init,

    /// List all cafes sorted by name
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find cafes at an exact location
    Search {
        /// Location to match (case-sensitive)
        location: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a single cafe
    Add(commands::AddArgs),

    /// Set the coffee price of a cafe
    SetPrice {
        /// Cafe id
        id: i64,

        /// New price, e.g. "£2.80"
        price: String,
    },

    /// Remove a cafe by id
    Remove {
        /// Cafe id
        id: i64,
    },

    /// Bulk insert cafes from a JSON array
    Import {
        /// JSON file with an array of cafes
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "cafe_cli=debug,cafe_core=debug"
    } else {
        "cafe_cli=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = commands::open_store(&cli.db).await?;

    let result = match cli.command {
        Commands::Init => commands::init(&store, &cli.db).await,
        Commands::List { json } => commands::list(&store, json).await,
        Commands::Search { location, json } => commands::search(&store, &location, json).await,
        Commands::Add(args) => commands::add(&store, args).await,
        Commands::SetPrice { id, price } => commands::set_price(&store, id, &price).await,
        Commands::Remove { id } => commands::remove(&store, id).await,
        Commands::Import { input } => commands::import(&store, &input).await,
    };

    store.close().await;
    result
}
