//! Binary entry point: read settings, load the records once, and hand them to
//! the terminal UI. Data access failures never stop the UI from starting; they
//! end up in the log file and the views stay empty.
use std::path::PathBuf;

use clap::Parser;
use immigration_stats::config::default_log_path;
use immigration_stats::logging;
use immigration_stats::{load_records, run_app, App, Config};

#[derive(Parser, Debug)]
#[command(version, about = "Browse yearly immigration counts as a table or a pie chart")]
struct Cli {
    /// Config file (defaults to config.json in the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
    /// SQLite database to read, overriding the config file.
    #[arg(long)]
    database: Option<PathBuf>,
    /// Where diagnostics are written while the terminal is in use.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_file.clone().unwrap_or_else(default_log_path));
    log::info!("immigration-stats v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::resolve(cli.config.as_deref());
    if let Some(database) = cli.database {
        config.database = database;
    }
    log::info!("reading from {}", config.database.display());

    let records = load_records(&config);
    let mut app = App::new(&records);
    run_app(&mut app)
}
