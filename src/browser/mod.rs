//! Skills browser: filter state, the derivation engine and the controller
//! that ties them together.
//!
//! Renderers (the TUI and the `skills` command) only talk to
//! [`SkillsBrowser`]: they call its mutators on user input and read the
//! derived view back.

pub mod controller;
pub mod derive;
pub mod icons;
pub mod proficiency;
pub mod state;

pub use controller::SkillsBrowser;
pub use derive::{CloudEntry, VisibleCategory, derive_visible, flatten_cloud, skill_matches};
pub use icons::{AsciiIcons, IconProvider, IconStyle, UnicodeIcons};
pub use proficiency::{ColorBand, ProficiencyTable};
pub use state::{CategoryFilter, FilterState, ViewMode, empty_state_message, skill_count_label};
