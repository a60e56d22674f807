//! Error handling and exit codes.

use warroom_core::exit_codes;
use warroom_core::WarroomError;

/// Errors raised by the binary itself rather than the data layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A flag combination or value that cannot be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Exit code for a data-layer error.
#[must_use]
pub fn exit_code(err: &WarroomError) -> i32 {
    match err {
        WarroomError::UnknownZone(_) | WarroomError::UnknownCountry(_) => {
            exit_codes::ERROR_NOT_FOUND
        }
        WarroomError::Dataset(_) | WarroomError::Parse(_) | WarroomError::DatasetRead(_) => {
            exit_codes::ERROR_CONFIG
        }
        WarroomError::Io(_) | WarroomError::Orientation(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error surfaced from `app::run`.
///
/// Context layers added with `anyhow::Context` are looked through.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<WarroomError>() {
        return exit_code(err);
    }
    if let Some(AppError::Config(_)) = err.downcast_ref::<AppError>() {
        return exit_codes::ERROR_CONFIG;
    }
    exit_codes::ERROR_GENERIC
}
