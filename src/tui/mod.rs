//! Terminal user interface for skillfolio.

pub mod browse;

pub use browse::{BrowseTui, run_browse_tui};
