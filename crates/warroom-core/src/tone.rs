//! Display tones for severities and statuses.
//!
//! A `Tone` is a renderer-neutral colour token. The TUI maps it onto a
//! terminal colour and the CLI onto a console style; `hex()` keeps the
//! dashboard's original palette for anything else.

use serde::{Deserialize, Serialize};

use crate::model::{Severity, Status, SystemStatus};

/// Closed palette used across the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Cyan,
    Gray,
}

impl Tone {
    /// Hex colour for this tone.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Tone::Red => "#ff4444",
            Tone::Orange => "#ff8800",
            Tone::Yellow => "#ffff44",
            Tone::Green => "#44ff44",
            Tone::Blue => "#60a5fa",
            Tone::Purple => "#c084fc",
            Tone::Cyan => "#22d3ee",
            Tone::Gray => "#9ca3af",
        }
    }
}

impl Severity {
    /// Tone for this severity.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Severity::Critical => Tone::Red,
            Severity::High => Tone::Orange,
            Severity::Medium => Tone::Yellow,
            Severity::Low => Tone::Green,
        }
    }
}

impl Status {
    /// Tone for this status.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Status::Escalating => Tone::Red,
            Status::Active => Tone::Yellow,
            Status::DeEscalating => Tone::Green,
        }
    }
}

impl SystemStatus {
    /// Tone for this system status.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            SystemStatus::Operational => Tone::Green,
            SystemStatus::Compromised => Tone::Yellow,
            SystemStatus::Critical => Tone::Red,
        }
    }
}

/// Tone for a free-form severity label. Unknown labels get the "low" tone.
#[must_use]
pub fn severity_tone(label: &str) -> Tone {
    Severity::from_label(label).map_or(Severity::Low.tone(), Severity::tone)
}

/// Tone for a free-form status label. Unknown labels are gray.
#[must_use]
pub fn status_tone(label: &str) -> Tone {
    Status::from_label(label).map_or(Tone::Gray, Status::tone)
}
