//! Local animation state advanced by periodic timers.
//!
//! Each counter is independent; the UI owns one of each and steps it when
//! the matching timer fires.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::constants::{
    DEFAULT_BLINK_MS, DEFAULT_CLOCK_MS, DEFAULT_FRAME_MS, SCAN_LINE_STEPS, SWEEP_DEGREES,
};

/// Which periodic timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Clock,
    ScanLine,
    Sweep,
    Blink,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::Clock,
        TimerKind::ScanLine,
        TimerKind::Sweep,
        TimerKind::Blink,
    ];
}

/// Interval per timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub clock: Duration,
    pub frame: Duration,
    pub blink: Duration,
}

impl TimerSettings {
    /// Interval of the given timer. Scan line and sweep share the frame rate.
    #[must_use]
    pub fn interval(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::Clock => self.clock,
            TimerKind::ScanLine | TimerKind::Sweep => self.frame,
            TimerKind::Blink => self.blink,
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            clock: Duration::from_millis(DEFAULT_CLOCK_MS),
            frame: Duration::from_millis(DEFAULT_FRAME_MS),
            blink: Duration::from_millis(DEFAULT_BLINK_MS),
        }
    }
}

/// Vertical position of the HUD scan line, in percent of screen height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanLine(u8);

impl ScanLine {
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % SCAN_LINE_STEPS;
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Row of the scan line inside a region of `height` rows.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn row(self, height: u16) -> u16 {
        (u32::from(self.0) * u32::from(height) / u32::from(SCAN_LINE_STEPS)) as u16
    }
}

/// Angle of the radar sweep in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sweep(u16);

impl Sweep {
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % SWEEP_DEGREES;
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f64 {
        f64::from(self.0).to_radians()
    }

    /// Whether `bearing` lies within `trail` degrees behind the sweep.
    #[must_use]
    pub fn has_passed_within(self, bearing: f64, trail: f64) -> bool {
        let behind = (f64::from(self.0) - bearing).rem_euclid(360.0);
        behind <= trail
    }
}

/// Two-phase blink used by critical indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blink(bool);

impl Blink {
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    /// Whether the dim phase is showing.
    #[must_use]
    pub fn is_dim(self) -> bool {
        self.0
    }
}

/// Last wall-clock reading shown in the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(DateTime<Local>);

impl Clock {
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now())
    }

    #[must_use]
    pub fn at(time: DateTime<Local>) -> Self {
        Self(time)
    }

    pub fn refresh(&mut self) {
        self.0 = Local::now();
    }

    #[must_use]
    pub fn time_label(&self) -> String {
        self.0.format("%H:%M:%S").to_string()
    }

    #[must_use]
    pub fn date_label(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::now()
    }
}
