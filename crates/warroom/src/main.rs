//! warroom: mock geopolitical intelligence dashboard.

use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use warroom_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    if let Err(err) = init_tracing(&config) {
        warroom_cli::ui::print_error(&format!("{err:#}"));
        return ExitCode::from(1);
    }

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "warroom failed");
            warroom_cli::ui::print_error(&format!("{err:#}"));
            let code = errors::exit_code_for(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// WARN by default, `RUST_LOG` to override. A log file keeps the
/// dashboard's alternate screen clean.
fn init_tracing(config: &config::AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
