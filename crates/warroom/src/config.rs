//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgGroup, Parser};
use warroom_core::constants::{DEFAULT_BLINK_MS, DEFAULT_CLOCK_MS, DEFAULT_FRAME_MS};
use warroom_core::TimerSettings;

use crate::errors::AppError;

/// warroom: mock geopolitical intelligence dashboard.
#[derive(Parser, Debug)]
#[command(name = "warroom", version, about)]
#[command(group(
    ArgGroup::new("mode")
        .args(["list", "zone", "country", "poll", "dump_data"])
        .multiple(false)
))]
pub struct AppConfig {
    /// JSON dataset to load in place of the built-in one.
    #[arg(long, env = "WARROOM_DATA")]
    pub data: Option<PathBuf>,

    /// Scan-line and radar-sweep interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_FRAME_MS, env = "WARROOM_FRAME_MS")]
    pub frame_ms: u64,

    /// Clock and system-metrics refresh interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_CLOCK_MS)]
    pub clock_ms: u64,

    /// Blink interval of critical indicators in milliseconds.
    #[arg(long, default_value_t = DEFAULT_BLINK_MS)]
    pub blink_ms: u64,

    /// Do not capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the conflict zone table and exit.
    #[arg(long)]
    pub list: bool,

    /// Print the dossier of one conflict zone and exit.
    #[arg(long, value_name = "ID")]
    pub zone: Option<String>,

    /// Print the dossier of the zone involving a country and exit.
    #[arg(long, value_name = "KEY")]
    pub country: Option<String>,

    /// Print the daily poll results and exit.
    #[arg(long)]
    pub poll: bool,

    /// Write the active dataset as JSON and exit.
    #[arg(long)]
    pub dump_data: bool,

    /// Terse output for the printing modes.
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Timer intervals, rejecting zero.
    pub fn timings(&self) -> Result<TimerSettings, AppError> {
        Ok(TimerSettings {
            clock: interval("--clock-ms", self.clock_ms)?,
            frame: interval("--frame-ms", self.frame_ms)?,
            blink: interval("--blink-ms", self.blink_ms)?,
        })
    }

    /// Whether a one-shot printing mode was requested.
    #[must_use]
    pub fn is_print_mode(&self) -> bool {
        self.list || self.zone.is_some() || self.country.is_some() || self.poll || self.dump_data
    }
}

fn interval(flag: &str, ms: u64) -> Result<Duration, AppError> {
    if ms == 0 {
        return Err(AppError::Config(format!("{flag} must be greater than zero")));
    }
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("warroom").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.clock_ms, 1000);
        assert_eq!(config.blink_ms, 500);
        assert!(!config.no_mouse);
        assert!(!config.is_print_mode());
        assert_eq!(config.timings().unwrap(), TimerSettings::default());
    }

    #[test]
    fn zero_interval_is_config_error() {
        let config = parse(&["--blink-ms", "0"]).unwrap();
        let err = config.timings().unwrap_err();
        assert!(err.to_string().contains("--blink-ms"));
    }

    #[test]
    fn custom_intervals() {
        let config = parse(&["--frame-ms", "20", "--clock-ms", "250"]).unwrap();
        let timings = config.timings().unwrap();
        assert_eq!(timings.frame, Duration::from_millis(20));
        assert_eq!(timings.clock, Duration::from_millis(250));
    }

    #[test]
    fn print_modes_conflict() {
        assert!(parse(&["--list", "--poll"]).is_err());
        assert!(parse(&["--zone", "middle-east", "--country", "iran"]).is_err());
        let config = parse(&["--country", "ukraine"]).unwrap();
        assert!(config.is_print_mode());
    }

    #[test]
    fn command_is_well_formed() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
