//! warroom library: configuration, dispatch and exit-code mapping for the
//! `warroom` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
