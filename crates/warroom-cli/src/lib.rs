//! # warroom-cli
//!
//! Plain-terminal presentation for warroom: zone tables, zone dossiers,
//! poll results and shell completion scripts.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CliPresenter;
