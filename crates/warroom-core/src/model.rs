//! Dataset record types.
//!
//! Every record is built once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::constants::RADAR_RANGE;
use crate::tone::Tone;

/// Ordinal threat severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Lower-case label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Parse a label, ignoring ASCII case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Trend of a conflict zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "escalating")]
    Escalating,
    #[serde(rename = "de-escalating")]
    DeEscalating,
}

impl Status {
    /// Lower-case label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Escalating => "escalating",
            Status::DeEscalating => "de-escalating",
        }
    }

    /// Parse a label, ignoring ASCII case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [Status::Active, Status::Escalating, Status::DeEscalating]
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Overall state of the defense grid shown in the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    Operational,
    Compromised,
    Critical,
}

impl SystemStatus {
    /// Lower-case label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SystemStatus::Operational => "operational",
            SystemStatus::Compromised => "compromised",
            SystemStatus::Critical => "critical",
        }
    }
}

/// Position on the map as percentages of width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

impl MapPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Offset from the radar centre, each axis in `[-100, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarOffset {
    pub dx: f64,
    pub dy: f64,
}

impl RadarOffset {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// A fictional geopolitical hotspot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictZone {
    pub id: String,
    pub name: String,
    pub location: String,
    pub position: MapPosition,
    pub status: Status,
    pub severity: Severity,
    pub last_update: String,
    pub casualties: String,
    pub key_developments: Vec<String>,
    pub involved_parties: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
}

impl ConflictZone {
    /// Whether this zone lists the given country key.
    #[must_use]
    pub fn involves_country(&self, key: &str) -> bool {
        self.countries.iter().any(|c| c == key)
    }

    /// Where the zone shows up on the radar.
    ///
    /// The map centre (50%, 50%) is the radar centre and the map edges
    /// land on the radar range.
    #[must_use]
    pub fn radar_offset(&self) -> RadarOffset {
        let scale = RADAR_RANGE / 50.0;
        RadarOffset::new(
            (self.position.x - 50.0) * scale,
            (self.position.y - 50.0) * scale,
        )
    }
}

/// Rectangular map area, in percent, that belongs to one country key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRegion {
    pub key: String,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl CountryRegion {
    #[must_use]
    pub fn contains(&self, pos: MapPosition) -> bool {
        (self.x0..=self.x1).contains(&pos.x) && (self.y0..=self.y1).contains(&pos.y)
    }
}

/// Category of a radar contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlipKind {
    Aircraft,
    Naval,
    Ground,
    Cyber,
}

impl BlipKind {
    /// Single-cell glyph drawn on the radar.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            BlipKind::Aircraft => "✈",
            BlipKind::Naval => "⚓",
            BlipKind::Ground => "▲",
            BlipKind::Cyber => "◆",
        }
    }
}

/// A radar contact.
///
/// `threat_level` is kept as a free label and styled through
/// [`crate::tone::severity_tone`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatBlip {
    pub id: String,
    pub offset: RadarOffset,
    pub kind: BlipKind,
    pub threat_level: String,
}

/// Entry of the threat board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatCard {
    pub level: Severity,
    pub location: String,
    pub kind: String,
    pub confidence: u8,
}

/// Timestamped line of the recent-developments feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Development {
    pub time: String,
    pub event: String,
    pub severity: Severity,
}

/// Prioritised item of the intelligence briefing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Briefing {
    pub priority: String,
    pub tone: Tone,
    pub text: String,
}

/// Item of the breaking-developments feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakingItem {
    pub stage: String,
    pub time: String,
    pub tone: Tone,
    pub text: String,
}

/// Figures shown in the HUD and the global status panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HudStatus {
    pub threat_level: u8,
    pub active_threats: u32,
    pub system_status: SystemStatus,
    /// Uplink saturation in percent. There is no network, so this is a mock.
    pub uplink_percent: u8,
}
