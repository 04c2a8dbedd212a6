//! CLI entry point for the bikeshare explorer.
//!
//! Asks for a city and optional month/day filters, then prints travel
//! statistics for the matching trips until the user stops.

use anyhow::Result;
use bikeshare_explorer::console::Console;
use bikeshare_explorer::dataset::CsvDirectory;
use bikeshare_explorer::pager::DEFAULT_PAGE_SIZE;
use bikeshare_explorer::session::{Session, SessionOptions};
use bikeshare_explorer::stats::TripLabel;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// How the most common trip is identified
    #[arg(long, value_enum, default_value_t = TripLabel::Stations)]
    trip_label: TripLabel,

    /// Number of raw rows shown per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // stdout belongs to the interactive session, so stderr stays quiet by default
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    info!(data_dir = %cli.data_dir.display(), trip_label = ?cli.trip_label, "Starting session");

    let source = CsvDirectory::new(&cli.data_dir);
    let console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
    let options = SessionOptions {
        trip_label: cli.trip_label,
        page_size: cli.page_size,
    };

    let mut session = Session::new(&source, console, options);
    if let Err(e) = session.run() {
        error!(error = %e, "Session aborted");
        return Err(e);
    }

    Ok(())
}
