//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line written to the log when the dashboard starts.
#[must_use]
pub fn full_version() -> String {
    format!("warroom {} ({})", version(), std::env::consts::OS)
}
