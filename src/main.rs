use puzzle_position::cli::cli_config::{CliConfig, DEFAULT_LOG_FILTER};
use puzzle_position::cli::cli_top;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: puzzle_position [--ply N | --initial-ply N] [--board] [movetext...]");
            std::process::exit(2);
        }
    };

    // Logs go to stderr; stdout carries only answers.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "puzzle_position v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(err) = cli_top::run(&config) {
        tracing::error!(error = %err, "I/O failure");
        std::process::exit(1);
    }
}
