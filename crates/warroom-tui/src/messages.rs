//! TUI message types (Elm Messages).

use warroom_core::TimerKind;

use crate::keymap::{KeyAction, PointerEvent};

/// Host resource snapshot shown in the HUD footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemMetrics {
    /// CPU usage as a percentage (0.0 - 100.0).
    pub cpu_percent: f64,
    /// Used memory as a percentage of total (0.0 - 100.0).
    pub memory_percent: f64,
}

/// Messages that drive the dashboard update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardMessage {
    /// A periodic animation timer fired.
    Tick(TimerKind),
    /// Key press forwarded from the event loop.
    Key(KeyAction),
    /// Mouse movement or click forwarded from the event loop.
    Pointer(PointerEvent),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Host metrics sample.
    SystemMetrics(SystemMetrics),
    /// Quit the application.
    Quit,
}
