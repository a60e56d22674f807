//! # warroom-tui
//!
//! Interactive warroom dashboard using ratatui with Elm architecture.

pub mod dialog;
pub mod footer;
pub mod header;
pub mod hud;
pub mod intel;
pub mod keymap;
pub mod map;
pub mod messages;
pub mod metrics;
pub mod model;
pub mod poll;
pub mod radar;
pub mod status;
pub mod styles;
pub mod tabs;
pub mod threats;
pub mod timers;

pub use intel::FeedScroll;
pub use keymap::{KeyAction, PointerEvent};
pub use messages::{DashboardMessage, SystemMetrics};
pub use metrics::{MetricsCollector, MetricsSampler};
pub use model::{DashboardApp, RunOptions};
pub use tabs::Tab;
pub use timers::{AnimationTimer, TimerSet};
