//! skillfolio - a portfolio skill matrix browser.
//!
//! The library holds the static portfolio data, the filter state and the
//! derivation engine that computes which skills are visible. The `cli` and
//! `tui` modules are the renderers built on top of it.

pub mod app;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod portfolio;
pub mod test_utils;
pub mod tui;

pub use error::{FolioError, Result};
