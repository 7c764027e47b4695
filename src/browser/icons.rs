//! Icon resolution for renderers.
//!
//! Categories carry an opaque [`IconRef`]; an [`IconProvider`] turns it into
//! something a particular renderer can draw.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::portfolio::IconRef;

pub trait IconProvider {
    fn resolve(&self, icon: &IconRef) -> Cow<'static, str>;
}

/// Unicode glyphs for terminals that can draw them.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeIcons;

impl IconProvider for UnicodeIcons {
    fn resolve(&self, icon: &IconRef) -> Cow<'static, str> {
        Cow::Borrowed(match icon.as_str() {
            "code" => "</>",
            "cloud" => "☁",
            "server" => "▤",
            "activity" => "∿",
            "layers" => "≡",
            "award" => "★",
            _ => "•",
        })
    }
}

/// Plain ASCII tags, for `TERM=dumb` or piped output.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiIcons;

impl IconProvider for AsciiIcons {
    fn resolve(&self, icon: &IconRef) -> Cow<'static, str> {
        Cow::Borrowed(match icon.as_str() {
            "code" => "[code]",
            "cloud" => "[cloud]",
            "server" => "[srv]",
            "activity" => "[ops]",
            "layers" => "[lyr]",
            "award" => "[top]",
            _ => "*",
        })
    }
}

/// Configurable provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Unicode,
    Ascii,
}

impl IconStyle {
    #[must_use]
    pub fn provider(self) -> Box<dyn IconProvider> {
        match self {
            Self::Unicode => Box::new(UnicodeIcons),
            Self::Ascii => Box::new(AsciiIcons),
        }
    }
}

impl FromStr for IconStyle {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            _ => Err(FolioError::Config(format!(
                "invalid icon style {s} (expected unicode|ascii)"
            ))),
        }
    }
}
