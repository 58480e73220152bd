use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lit_compass::adapters::TerminalPresenter;
use lit_compass::application::{load_catalog, QuizRunner};
use lit_compass::config::{AppConfig, LogFormat, LoggingConfig};
use lit_compass::domain::quiz::QuizSession;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lit-compass: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("lit-compass: invalid configuration: {}", err);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Quiz aborted");
            eprintln!("lit-compass: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Arc::new(load_catalog(&config.content)?);
    let mut session = QuizSession::new(catalog);

    let stdin = io::stdin();
    let presenter = TerminalPresenter::new(stdin.lock(), io::stdout());
    let summary = QuizRunner::new(presenter).run(&mut session)?;

    info!(
        session_id = %summary.session_id,
        completed = summary.classification.is_some(),
        elapsed_secs = ?summary.elapsed().map(|d| d.num_seconds()),
        "Goodbye"
    );
    Ok(())
}

/// Installs the global subscriber; `RUST_LOG` wins over configuration.
fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init(),
    }
}
