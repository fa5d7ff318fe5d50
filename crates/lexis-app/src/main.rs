use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod io;
pub mod pipeline;
pub mod settings;


use self::cli::Args;

fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(&args);

    let config = match settings::resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(&config) {
        Ok(summary) => {
            tracing::info!(
                "Wrote {} lines for {} of {} words to {}",
                summary.lines,
                summary.matched,
                summary.words,
                config.output.path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(args: &Args) {
    let filter = match args.log_filter() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if args.log_json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}
