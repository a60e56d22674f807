//! Error type shared by the warroom crates.

use crate::orientation::OrientationError;

/// Errors raised while loading data or resolving records.
///
/// Rendering and widget state never fail; these only surface at the
/// edges (dataset files, CLI lookups, host capabilities).
#[derive(Debug, thiserror::Error)]
pub enum WarroomError {
    /// The dataset parsed but violates an invariant.
    #[error("invalid dataset: {0}")]
    Dataset(String),

    /// The dataset is not valid JSON for the expected shape.
    #[error("dataset parse error")]
    Parse(#[from] serde_json::Error),

    /// The dataset file could not be read.
    #[error("cannot read dataset file")]
    DatasetRead(#[source] std::io::Error),

    /// Any other i/o failure.
    #[error("i/o error")]
    Io(#[from] std::io::Error),

    /// No conflict zone carries this id.
    #[error("unknown conflict zone: {0}")]
    UnknownZone(String),

    /// No conflict zone lists this country key.
    #[error("no conflict zone involves country: {0}")]
    UnknownCountry(String),

    /// The host refused or cannot honour an orientation request.
    #[error(transparent)]
    Orientation(#[from] OrientationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            WarroomError::UnknownZone("atlantis".into()).to_string(),
            "unknown conflict zone: atlantis"
        );
        assert_eq!(
            WarroomError::UnknownCountry("brazil".into()).to_string(),
            "no conflict zone involves country: brazil"
        );
        assert!(WarroomError::Dataset("duplicate id".into())
            .to_string()
            .contains("duplicate id"));
    }

    #[test]
    fn sources_are_not_repeated_in_messages() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = WarroomError::DatasetRead(io);
        assert_eq!(err.to_string(), "cannot read dataset file");
        assert_eq!(err.source().unwrap().to_string(), "gone");

        let json = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = WarroomError::from(json);
        assert_eq!(err.to_string(), "dataset parse error");
        assert!(err.source().is_some());
    }

    #[test]
    fn json_errors_convert() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: WarroomError = err.into();
        assert!(matches!(err, WarroomError::Parse(_)));
    }
}
