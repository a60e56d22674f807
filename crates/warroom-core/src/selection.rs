//! Selected-record state feeding the detail dialog.

/// Dialog state: closed, or open on one conflict zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(String),
}

impl Selection {
    /// Open the dialog on `zone_id`, replacing any open record directly.
    pub fn select(&mut self, zone_id: impl Into<String>) {
        let zone_id = zone_id.into();
        tracing::debug!(zone = %zone_id, "dialog open");
        *self = Selection::Open(zone_id);
    }

    /// Close the dialog. Closing a closed dialog is a no-op.
    pub fn close(&mut self) {
        if let Selection::Open(id) = self {
            tracing::debug!(zone = %id, "dialog closed");
        }
        *self = Selection::Closed;
    }

    /// Id of the record shown, if open.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        match self {
            Selection::Open(id) => Some(id),
            Selection::Closed => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}
