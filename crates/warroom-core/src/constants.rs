//! Constants for dashboard timing, coordinate spaces and exit codes.

/// Default interval (ms) between scan-line and radar-sweep steps.
pub const DEFAULT_FRAME_MS: u64 = 50;

/// Default interval (ms) between wall-clock refreshes.
pub const DEFAULT_CLOCK_MS: u64 = 1000;

/// Default interval (ms) between blink phases of critical indicators.
pub const DEFAULT_BLINK_MS: u64 = 500;

/// Number of discrete scan-line positions (percent of screen height).
pub const SCAN_LINE_STEPS: u8 = 100;

/// Degrees in a full radar revolution.
pub const SWEEP_DEGREES: u16 = 360;

/// Width of the sweep trail behind the leading edge, in degrees.
pub const SWEEP_TRAIL_DEGREES: f64 = 30.0;

/// Map viewbox width. Markers are placed at `x% * MAP_VIEW_WIDTH / 100`.
pub const MAP_VIEW_WIDTH: f64 = 1000.0;

/// Map viewbox height.
pub const MAP_VIEW_HEIGHT: f64 = 500.0;

/// Longitude span of the synthetic pointer readout.
pub const LONGITUDE_SPAN: f64 = 360.0;

/// Latitude span of the synthetic pointer readout (85°N down to 85°S).
pub const LATITUDE_SPAN: f64 = 170.0;

/// Latitude shown at the top edge of the map.
pub const LATITUDE_TOP: f64 = 85.0;

/// Radar offsets are expressed in `[-RADAR_RANGE, RADAR_RANGE]`.
pub const RADAR_RANGE: f64 = 100.0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A zone or country lookup found nothing.
    pub const ERROR_NOT_FOUND: i32 = 3;
    /// Invalid configuration or dataset.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_span_is_symmetric() {
        assert!((LATITUDE_TOP * 2.0 - LATITUDE_SPAN).abs() < f64::EPSILON);
    }

    #[test]
    fn map_viewbox_is_two_to_one() {
        assert!((MAP_VIEW_WIDTH / MAP_VIEW_HEIGHT - 2.0).abs() < f64::EPSILON);
    }
}
