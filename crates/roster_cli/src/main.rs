//! Roster CLI
//!
//! Interactive record manager. Datasets are JSON files named by the user;
//! records are created, updated, deleted and searched in memory and written
//! back only on an explicit save.

use clap::Parser;
use roster_cli::{App, Prompt};
use roster_core::validate::DEFAULT_MAX_FIELD_LEN;
use roster_core::{Config, Store};
use roster_storage::FileBackend;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Interactive record manager.
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory that dataset names are resolved against
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Extension appended to dataset names
    #[arg(short, long, default_value = "json")]
    extension: String,

    /// Indentation width of saved files
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Maximum length of name, course and year
    #[arg(long, default_value_t = DEFAULT_MAX_FIELD_LEN)]
    max_field_len: usize,

    /// Sync saved files to disk
    #[arg(long)]
    sync: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::new()
        .data_dir(cli.dir)
        .extension(&cli.extension)
        .indent(cli.indent)
        .max_field_len(cli.max_field_len)
        .sync_on_save(cli.sync);
    tracing::debug!(?config, "starting");

    let backend = FileBackend::new().with_sync(config.sync_on_save);
    let store = Store::new(backend, config);
    let prompt = Prompt::new(io::stdin().lock(), io::stdout().lock());

    App::new(store, prompt).run()?;
    Ok(())
}
