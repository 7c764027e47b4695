//! Proficiency levels used to size and color skills in the cloud view.
//!
//! Purely cosmetic: nothing in the derivation engine reads these values.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{FolioError, Result};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;
pub const DEFAULT_LEVEL: u8 = 3;

/// Coarse color grouping for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    High,
    Mid,
    Low,
}

impl ColorBand {
    #[must_use]
    pub const fn for_level(level: u8) -> Self {
        if level >= 5 {
            Self::High
        } else if level >= 4 {
            Self::Mid
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProficiencyTable {
    levels: HashMap<String, u8>,
    default_level: u8,
}

impl Default for ProficiencyTable {
    fn default() -> Self {
        Self {
            levels: HashMap::new(),
            default_level: DEFAULT_LEVEL,
        }
    }
}

impl ProficiencyTable {
    /// Build a table; every level must be within `1..=5`.
    pub fn new<I, K>(levels: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, u8)>,
        K: Into<String>,
    {
        let mut table = Self::default();
        for (skill, level) in levels {
            let skill = skill.into();
            check_level(level).map_err(|msg| {
                FolioError::ValidationFailed(format!("proficiency for {skill}: {msg}"))
            })?;
            table.levels.insert(skill, level);
        }
        Ok(table)
    }

    /// Replace the level used for skills missing from the table.
    pub fn with_default_level(mut self, level: u8) -> Result<Self> {
        check_level(level)
            .map_err(|msg| FolioError::ValidationFailed(format!("default proficiency: {msg}")))?;
        self.default_level = level;
        Ok(self)
    }

    #[must_use]
    pub fn level_for(&self, skill: &str) -> u8 {
        self.levels
            .get(skill)
            .copied()
            .unwrap_or(self.default_level)
    }

    /// Relative display size, `level * 0.2 + 0.8`, so 1.0 ..= 1.8.
    #[must_use]
    pub fn size_for(&self, skill: &str) -> f32 {
        f32::from(self.level_for(skill)).mul_add(0.2, 0.8)
    }

    #[must_use]
    pub fn color_band(&self, skill: &str) -> ColorBand {
        ColorBand::for_level(self.level_for(skill))
    }

    /// Top-level skills get a star marker.
    #[must_use]
    pub fn is_starred(&self, skill: &str) -> bool {
        self.level_for(skill) >= MAX_LEVEL
    }

    #[must_use]
    pub const fn default_level(&self) -> u8 {
        self.default_level
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

fn check_level(level: u8) -> std::result::Result<(), String> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(format!(
            "level {level} out of range ({MIN_LEVEL}..={MAX_LEVEL})"
        ))
    }
}
