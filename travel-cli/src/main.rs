use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use travel_cli::cli::{App, AppState};
use travel_cli::config::AppConfig;

/// Interactive travel booking CLI.
#[derive(Debug, Parser)]
#[command(name = "travel-cli", version)]
struct Args {
    /// Path to a JSON config file (demo network, starting balance,
    /// default preferences). Built-in demo data is used if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    // Logs go to stderr so the menus on stdout stay scriptable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => match AppConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    let state = AppState::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock(), state);

    if let Err(err) = app.run() {
        eprintln!("I/O error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
