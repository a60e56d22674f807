//! Best-effort landscape enforcement.
//!
//! The dashboard first asks its host for a landscape lock. Hosts that cannot
//! lock (a terminal never can) return an error, which is logged and ignored;
//! the layout then falls back to a portrait flag recomputed on every resize.

/// Why an orientation request did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrientationError {
    /// The host has no orientation control.
    #[error("orientation lock unsupported by host")]
    Unsupported,
    /// The host refused the request.
    #[error("orientation lock denied: {0}")]
    Denied(String),
}

/// Something that may be able to pin the screen orientation.
pub trait OrientationHost {
    /// Ask for a landscape lock.
    fn request_landscape(&self) -> Result<(), OrientationError>;
}

/// Terminal host: orientation is whatever the window happens to be.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost;

impl OrientationHost for TerminalHost {
    fn request_landscape(&self) -> Result<(), OrientationError> {
        Err(OrientationError::Unsupported)
    }
}

/// Attempt a landscape lock, swallowing any refusal.
///
/// Returns whether the lock was granted.
pub fn try_lock_landscape(host: &dyn OrientationHost) -> bool {
    match host.request_landscape() {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "falling back to viewport-based layout");
            false
        }
    }
}

/// Layout mode derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Landscape,
    Portrait,
}

impl LayoutMode {
    /// Compare viewport width and height in terminal cells.
    ///
    /// A cell is roughly twice as tall as it is wide, so rows count double.
    #[must_use]
    pub fn from_viewport(width: u16, height: u16) -> Self {
        if u32::from(height) * 2 > u32::from(width) {
            LayoutMode::Portrait
        } else {
            LayoutMode::Landscape
        }
    }

    #[must_use]
    pub fn is_portrait(self) -> bool {
        self == LayoutMode::Portrait
    }
}
