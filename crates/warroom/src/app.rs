//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};
use warroom_cli::presenter::CliPresenter;
use warroom_core::{Dataset, TimerSettings};
use warroom_tui::{DashboardApp, DashboardMessage, RunOptions};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        warroom_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let timings = config.timings()?;
    let data = load_dataset(config)?;

    if config.is_print_mode() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return print_mode(config, &data, &mut out);
    }

    run_tui(data, timings, !config.no_mouse)
}

/// The built-in dataset, or the file named by `--data`.
pub fn load_dataset(config: &AppConfig) -> Result<Dataset> {
    match &config.data {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("loading dataset from {}", path.display())),
        None => {
            tracing::debug!("using built-in dataset");
            Ok(Dataset::builtin())
        }
    }
}

/// Execute the one-shot printing mode selected in `config`.
pub fn print_mode(config: &AppConfig, data: &Dataset, out: &mut dyn Write) -> Result<()> {
    if config.dump_data {
        writeln!(out, "{}", data.to_json()?)?;
        return Ok(());
    }

    let color = !warroom_cli::ui::is_color_disabled() && console::colors_enabled();
    let presenter = CliPresenter::new(color, config.quiet);

    if config.list {
        presenter.present_zones(out, data.zones.zones())?;
    } else if let Some(id) = &config.zone {
        let zone = data.zones.require(id)?;
        presenter.present_dossier(out, zone)?;
    } else if let Some(key) = &config.country {
        let zone = data.zones.require_country(key)?;
        presenter.present_dossier(out, zone)?;
    } else if config.poll {
        let poll = data.daily_poll().context("dataset has no polls")?;
        presenter.present_poll(out, poll)?;
    }
    Ok(())
}

fn run_tui(data: Dataset, timers: TimerSettings, mouse: bool) -> Result<()> {
    tracing::info!(version = %crate::version::full_version(), zones = data.zones.len(), "starting dashboard");

    // Create crossbeam channel for dashboard messages
    let (tx, rx) = crossbeam_channel::unbounded::<DashboardMessage>();

    let mut app = DashboardApp::new(data, rx);
    app.run(&tx, RunOptions { timers, mouse })
        .context("dashboard terminal error")?;

    tracing::info!("dashboard closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use warroom_core::WarroomError;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("warroom").chain(args.iter().copied())).unwrap()
    }

    fn printed(args: &[&str]) -> Result<String> {
        let config = config(args);
        let data = load_dataset(&config)?;
        let mut buf = Vec::new();
        print_mode(&config, &data, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn list_prints_zones() {
        let text = printed(&["--list", "--quiet"]).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("south-china-sea"));
    }

    #[test]
    fn country_resolves_zone() {
        let text = printed(&["--country", "iran"]).unwrap();
        assert!(text.contains("ESCALATING"));
    }

    #[test]
    fn unknown_country_is_not_found() {
        let err = printed(&["--country", "brazil"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WarroomError>(),
            Some(WarroomError::UnknownCountry(key)) if key == "brazil"
        ));
    }

    #[test]
    fn dump_is_reloadable() {
        let json = printed(&["--dump-data"]).unwrap();
        let data = Dataset::from_json(&json).unwrap();
        assert_eq!(data, Dataset::builtin());
    }

    #[test]
    fn missing_dataset_file_has_context() {
        let err = printed(&["--data", "/nonexistent/warroom.json", "--list"]).unwrap_err();
        assert!(err.to_string().contains("loading dataset"));
        assert!(matches!(
            err.downcast_ref::<WarroomError>(),
            Some(WarroomError::DatasetRead(_))
        ));
        assert_eq!(crate::errors::exit_code_for(&err), 4);
    }
}
