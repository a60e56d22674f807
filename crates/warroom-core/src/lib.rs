//! # warroom-core
//!
//! Data and state for the warroom intelligence dashboard: the mock dataset,
//! the conflict zone registry, tone lookups, coordinate mapping, and the
//! small state machines behind the dialog, the poll and the animations.
//! Nothing in here touches a terminal.

pub mod animation;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod intel;
pub mod model;
pub mod orientation;
pub mod poll;
pub mod registry;
pub mod selection;
pub mod tone;

// Re-exports
pub use animation::{Blink, Clock, ScanLine, Sweep, TimerKind, TimerSettings};
pub use constants::exit_codes;
pub use dataset::Dataset;
pub use error::WarroomError;
pub use geo::{pointer_to_geo, Dms, GeoPoint};
pub use model::{
    BlipKind, ConflictZone, CountryRegion, HudStatus, MapPosition, RadarOffset, Severity, Status,
    SystemStatus, ThreatBlip, ThreatCard,
};
pub use orientation::{LayoutMode, OrientationError, OrientationHost, TerminalHost};
pub use poll::{format_number, vote_percentage, Poll, PollOption, PollState};
pub use registry::ZoneRegistry;
pub use selection::Selection;
pub use tone::{severity_tone, status_tone, Tone};
