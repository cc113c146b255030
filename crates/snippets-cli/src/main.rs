//! Snippets CLI
//!
//! Store, retrieve, list and search named text snippets from the terminal.

use clap::{Parser, Subcommand, ValueEnum};
use snippets_core::logging_facility::{self, Profile};
use snippets_store::SnippetStore;
use std::path::PathBuf;

mod commands;
mod output;

use output::Printer;

#[derive(Debug, Parser)]
#[command(name = "snippets")]
#[command(about = "Store and retrieve snippets of text", long_about = None)]
struct Cli {
    /// SQLite database file holding the snippets table
    #[arg(long, global = true, env = "SNIPPETS_DB", default_value = "snippets.db")]
    db: PathBuf,

    /// File that diagnostic logs are appended to
    #[arg(
        long,
        global = true,
        env = "SNIPPETS_LOG_FILE",
        default_value = "snippets.log"
    )]
    log_file: PathBuf,

    /// Log line format
    #[arg(
        long,
        global = true,
        env = "SNIPPETS_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Text => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Store a snippet
    Put(commands::put::PutArgs),
    /// Retrieve a snippet
    Get(commands::get::GetArgs),
    /// Retrieve all keywords
    Catalog,
    /// Retrieve all snippets containing a string
    Search(commands::search::SearchArgs),
    /// Remove a snippet (not implemented)
    Remove(commands::remove::RemoveArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = logging_facility::init_to_file(cli.log_format.profile(), &cli.log_file) {
        eprintln!(
            "Warning: logging disabled, cannot open {}: {}",
            cli.log_file.display(),
            e
        );
    }
    tracing::debug!(db = %cli.db.display(), "Opening snippet store");

    let mut store = SnippetStore::open(&cli.db)?;
    let stdout = std::io::stdout();
    let mut printer = Printer::new(stdout.lock(), cli.json);

    match cli.command {
        Commands::Put(args) => commands::put::execute(&mut store, args, &mut printer),
        Commands::Get(args) => commands::get::execute(&mut store, args, &mut printer),
        Commands::Catalog => commands::catalog::execute(&mut store, &mut printer),
        Commands::Search(args) => commands::search::execute(&mut store, args, &mut printer),
        Commands::Remove(args) => commands::remove::execute(&mut store, args),
    }
}
