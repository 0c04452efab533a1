use std::io;
use std::process;

use housing_outliers::{app, config, Config};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(config::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let config = Config::default();
    tracing::debug!("Using {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match app::run(&config, stdin.lock(), stdout.lock()) {
        Ok(outcome) => tracing::debug!("Finished: {:?}", outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
