//! Color support detection and semantic styles for CLI output.
//!
//! ```rust,ignore
//! use skillfolio::cli::colors::{ColorSupport, FolioStyles};
//!
//! let support = ColorSupport::detect();
//! println!("{}", FolioStyles::band("Kubernetes", ColorBand::High, support));
//! ```

use std::io::IsTerminal;

use colored::{ColoredString, Colorize};

use crate::browser::ColorBand;

// ============================================================================
// Color Support Detection
// ============================================================================

/// Level of color support detected for the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    /// No color support (NO_COLOR set, TERM=dumb, piped output)
    None,
    /// Basic 16-color support
    Basic,
    /// Extended 256-color support
    Extended,
    /// True color (24-bit) support
    TrueColor,
}

impl ColorSupport {
    /// Detect color support from environment and terminal capabilities
    #[must_use]
    pub fn detect() -> Self {
        // https://no-color.org/
        if std::env::var("NO_COLOR").is_ok() {
            return Self::None;
        }

        if std::env::var("FORCE_COLOR").is_ok() {
            return Self::detect_level();
        }

        if !std::io::stdout().is_terminal() {
            return Self::None;
        }

        if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::None;
        }

        Self::detect_level()
    }

    fn detect_level() -> Self {
        if std::env::var("COLORTERM").is_ok_and(|ct| ct == "truecolor" || ct == "24bit") {
            return Self::TrueColor;
        }

        if std::env::var("TERM").is_ok_and(|term| {
            term.contains("256color") || term.contains("kitty") || term.contains("alacritty")
        }) {
            return Self::Extended;
        }

        Self::Basic
    }

    #[must_use]
    pub const fn has_color(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether box-drawing and other non-ASCII glyphs are safe to print.
    #[must_use]
    pub fn supports_unicode() -> bool {
        std::env::var("TERM").map_or(true, |term| term != "dumb")
    }
}

impl Default for ColorSupport {
    fn default() -> Self {
        Self::detect()
    }
}

// ============================================================================
// Semantic Styles
// ============================================================================

pub struct FolioStyles;

impl FolioStyles {
    /// Style a skill by its proficiency band.
    #[must_use]
    pub fn band(text: &str, band: ColorBand, support: ColorSupport) -> String {
        if !support.has_color() {
            return text.to_string();
        }
        Self::band_colored(text, band).to_string()
    }

    fn band_colored(text: &str, band: ColorBand) -> ColoredString {
        match band {
            ColorBand::High => text.yellow().bold(),
            ColorBand::Mid => text.blue(),
            ColorBand::Low => text.magenta(),
        }
    }

    /// Category header.
    #[must_use]
    pub fn heading(text: &str, support: ColorSupport) -> String {
        if support.has_color() {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Secondary text such as counts.
    #[must_use]
    pub fn muted(text: &str, support: ColorSupport) -> String {
        if support.has_color() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Marker for top-level skills.
    #[must_use]
    pub fn star(support: ColorSupport) -> String {
        match (support.has_color(), ColorSupport::supports_unicode()) {
            (true, true) => "★".yellow().to_string(),
            (false, true) => "★".to_string(),
            (_, false) => "*".to_string(),
        }
    }
}
