//! Cross-crate scenario tests for the warroom workspace live in `tests/`.
