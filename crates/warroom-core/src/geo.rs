//! Map and radar coordinate mapping.
//!
//! Nothing here is a real projection. Marker positions scale linearly into
//! whatever surface draws them, and the pointer readout is a cosmetic
//! latitude/longitude derived from the pointer's fraction of the map.

use std::fmt;

use crate::constants::{LATITUDE_SPAN, LATITUDE_TOP, LONGITUDE_SPAN, RADAR_RANGE};
use crate::model::{MapPosition, RadarOffset};

impl MapPosition {
    /// Scale into a surface of `width` x `height` units.
    #[must_use]
    pub fn scale(self, width: f64, height: f64) -> (f64, f64) {
        (self.x / 100.0 * width, self.y / 100.0 * height)
    }

    /// Position of a `(fx, fy)` fraction of the map.
    #[must_use]
    pub fn from_fraction(fx: f64, fy: f64) -> Self {
        Self::new(fx.clamp(0.0, 1.0) * 100.0, fy.clamp(0.0, 1.0) * 100.0)
    }
}

impl RadarOffset {
    /// Point on a square radar of side `size`, origin top-left.
    #[must_use]
    pub fn project(self, size: f64) -> (f64, f64) {
        let half = size / 2.0;
        let unit = size / (RADAR_RANGE * 2.0);
        (half + self.dx * unit, half + self.dy * unit)
    }

    /// Distance from the radar centre in range units.
    #[must_use]
    pub fn distance(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Bearing in degrees, clockwise from the positive x axis with y
    /// pointing down (the sweep's own convention).
    #[must_use]
    pub fn bearing(self) -> f64 {
        self.dy.atan2(self.dx).to_degrees().rem_euclid(360.0)
    }
}

/// Synthetic geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Convert a pointer fraction of the map into a synthetic lat/lon.
///
/// `lon = fx * 360 - 180`, `lat = 85 - fy * 170`. Inputs are clamped to
/// `[0, 1]`.
#[must_use]
pub fn pointer_to_geo(fx: f64, fy: f64) -> GeoPoint {
    let fx = fx.clamp(0.0, 1.0);
    let fy = fy.clamp(0.0, 1.0);
    GeoPoint {
        lon: fx * LONGITUDE_SPAN - LONGITUDE_SPAN / 2.0,
        lat: LATITUDE_TOP - fy * LATITUDE_SPAN,
    }
}

/// Fraction of a span of cells covered up to `at`.
///
/// The first cell maps to 0 and the last to 1. Returns `None` when `at`
/// lies outside the span.
#[must_use]
pub fn fraction_along(start: u16, len: u16, at: u16) -> Option<f64> {
    if len == 0 || at < start || at >= start.saturating_add(len) {
        return None;
    }
    if len == 1 {
        return Some(0.0);
    }
    Some(f64::from(at - start) / f64::from(len - 1))
}

/// Degrees, minutes and seconds with a hemisphere letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub hemisphere: char,
}

impl Dms {
    /// Split `value` by truncating each fractional remainder.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_degrees(value: f64, positive: char, negative: char) -> Self {
        let hemisphere = if value >= 0.0 { positive } else { negative };
        let abs = value.abs();
        let degrees = abs.trunc();
        let minutes_f = (abs - degrees) * 60.0;
        let minutes = minutes_f.trunc();
        let seconds = ((minutes_f - minutes) * 60.0).trunc();
        Self {
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            hemisphere,
        }
    }

    #[must_use]
    pub fn latitude(lat: f64) -> Self {
        Self::from_degrees(lat, 'N', 'S')
    }

    #[must_use]
    pub fn longitude(lon: f64) -> Self {
        Self::from_degrees(lon, 'E', 'W')
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}\"{}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LAT {} LON {}",
            Dms::latitude(self.lat),
            Dms::longitude(self.lon)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn centre_maps_to_origin() {
        let p = pointer_to_geo(0.5, 0.5);
        assert!(p.lon.abs() < 1e-9);
        assert!(p.lat.abs() < 1e-9);
        assert_eq!(p.to_string(), "LAT 0°00'00\"N LON 0°00'00\"E");
    }

    #[test]
    fn top_left_maps_to_date_line() {
        let p = pointer_to_geo(0.0, 0.0);
        assert!((p.lon + 180.0).abs() < 1e-9);
        assert!((p.lat - 85.0).abs() < 1e-9);
        assert_eq!(Dms::longitude(p.lon).to_string(), "180°00'00\"W");
        assert_eq!(Dms::latitude(p.lat).to_string(), "85°00'00\"N");
    }

    #[test]
    fn bottom_right_maps_to_south_east() {
        let p = pointer_to_geo(1.0, 1.0);
        assert_eq!(Dms::latitude(p.lat).hemisphere, 'S');
        assert_eq!(Dms::longitude(p.lon).hemisphere, 'E');
    }

    #[test]
    fn dms_truncates_remainders() {
        // 12 + 33/64 degrees: 30.9375 minutes, 56.25 seconds
        let dms = Dms::latitude(-12.515_625);
        assert_eq!(dms.degrees, 12);
        assert_eq!(dms.minutes, 30);
        assert_eq!(dms.seconds, 56);
        assert_eq!(dms.hemisphere, 'S');
    }

    #[test]
    fn map_position_scales_linearly() {
        let (x, y) = MapPosition::new(55.0, 25.0).scale(1000.0, 500.0);
        assert!((x - 550.0).abs() < 1e-9);
        assert!((y - 125.0).abs() < 1e-9);
    }

    #[test]
    fn radar_projection() {
        let (x, y) = RadarOffset::new(30.0, -20.0).project(200.0);
        assert!((x - 130.0).abs() < 1e-9);
        assert!((y - 80.0).abs() < 1e-9);

        let (cx, cy) = RadarOffset::new(0.0, 0.0).project(250.0);
        assert!((cx - 125.0).abs() < 1e-9 && (cy - 125.0).abs() < 1e-9);
    }

    #[test]
    fn radar_bearing_quadrants() {
        assert!((RadarOffset::new(10.0, 0.0).bearing()).abs() < 1e-9);
        assert!((RadarOffset::new(0.0, 10.0).bearing() - 90.0).abs() < 1e-9);
        assert!((RadarOffset::new(0.0, -10.0).bearing() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn fraction_along_edges() {
        assert_eq!(fraction_along(10, 11, 10), Some(0.0));
        assert_eq!(fraction_along(10, 11, 20), Some(1.0));
        assert_eq!(fraction_along(10, 11, 15), Some(0.5));
        assert_eq!(fraction_along(10, 11, 21), None);
        assert_eq!(fraction_along(10, 11, 9), None);
        assert_eq!(fraction_along(0, 0, 0), None);
        assert_eq!(fraction_along(4, 1, 4), Some(0.0));
    }

    proptest! {
        #[test]
        fn geo_stays_in_range(fx in -1.0f64..2.0, fy in -1.0f64..2.0) {
            let p = pointer_to_geo(fx, fy);
            prop_assert!((-180.0..=180.0).contains(&p.lon));
            prop_assert!((-85.0..=85.0).contains(&p.lat));
        }

        #[test]
        fn dms_components_bounded(v in -180.0f64..180.0) {
            let dms = Dms::longitude(v);
            prop_assert!(dms.degrees <= 180);
            prop_assert!(dms.minutes < 60);
            prop_assert!(dms.seconds < 60);
        }
    }
}
