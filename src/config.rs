use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::browser::{CategoryFilter, IconStyle, ViewMode};
use crate::browser::proficiency::DEFAULT_LEVEL;
use crate::cli::OutputFormat;
use crate::error::{FolioError, Result};
use crate::portfolio::projects::DEFAULT_TECH_FILTER_LIMIT;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub proficiency: ProficiencyConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
    #[serde(default)]
    pub robot: RobotConfig,
}

impl Config {
    /// Defaults, then either the explicit file (`--config` / `FOLIO_CONFIG`)
    /// or the global and project files, then `FOLIO_*` overrides.
    pub fn load(explicit_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?
                .ok_or_else(|| FolioError::MissingConfig(path.display().to_string()))?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(cwd)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Where the project config would live, if a `.skillfolio` directory
    /// exists at or above `start`.
    #[must_use]
    pub fn project_config_path(start: &Path) -> Option<PathBuf> {
        find_upwards(start, ".skillfolio").map(|dir| dir.join("config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("skillfolio/config.toml"))
    }

    fn load_project(cwd: &Path) -> Result<Option<ConfigPatch>> {
        match Self::project_config_path(cwd) {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Config(format!("read config {}: {err}", path.display())))?;
        let mut patch: ConfigPatch = toml::from_str(&raw)
            .map_err(|err| FolioError::Config(format!("parse config {}: {err}", path.display())))?;

        // Relative data paths are relative to the config file.
        if let Some(data) = patch.data.as_mut() {
            if let Some(data_path) = data.path.as_mut() {
                if data_path.is_relative() {
                    if let Some(parent) = path.parent() {
                        *data_path = parent.join(&*data_path);
                    }
                }
            }
        }
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.data {
            self.data.merge(patch);
        }
        if let Some(patch) = patch.browser {
            self.browser.merge(patch);
        }
        if let Some(patch) = patch.proficiency {
            self.proficiency.merge(patch);
        }
        if let Some(patch) = patch.projects {
            self.projects.merge(patch);
        }
        if let Some(patch) = patch.robot {
            self.robot.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if env_bool("FOLIO_ROBOT").unwrap_or(false) {
            self.robot.format = OutputFormat::Json;
        }

        if let Some(value) = env_string("FOLIO_DATA_PATH") {
            self.data.path = Some(PathBuf::from(value));
        }

        if let Some(value) = env_string("FOLIO_BROWSER_DEFAULT_VIEW") {
            self.browser.default_view = value.parse()?;
        }
        if let Some(value) = env_string("FOLIO_BROWSER_DEFAULT_CATEGORY") {
            self.browser.default_category = CategoryFilter::parse(&value);
        }
        if let Some(value) = env_string("FOLIO_BROWSER_ICONS") {
            self.browser.icons = value.parse()?;
        }

        if let Some(value) = env_u8("FOLIO_PROFICIENCY_DEFAULT_LEVEL")? {
            self.proficiency.default_level = value;
        }

        if let Some(value) = env_usize("FOLIO_PROJECTS_TECH_FILTER_LIMIT")? {
            self.projects.tech_filter_limit = value;
        }

        if let Some(value) = env_string("FOLIO_ROBOT_FORMAT") {
            self.robot.format = value.parse()?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Portfolio data file; the built-in data is used when unset.
    pub path: Option<PathBuf>,
}

impl DataConfig {
    fn merge(&mut self, patch: DataPatch) {
        if let Some(value) = patch.path {
            self.path = Some(value);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    pub default_view: ViewMode,
    pub default_category: CategoryFilter,
    pub icons: IconStyle,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Cards,
            default_category: CategoryFilter::All,
            icons: IconStyle::Unicode,
        }
    }
}

impl BrowserConfig {
    fn merge(&mut self, patch: BrowserPatch) {
        if let Some(value) = patch.default_view {
            self.default_view = value;
        }
        if let Some(value) = patch.default_category {
            self.default_category = value;
        }
        if let Some(value) = patch.icons {
            self.icons = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyConfig {
    /// Level for skills missing from the proficiency table.
    pub default_level: u8,
}

impl Default for ProficiencyConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL,
        }
    }
}

impl ProficiencyConfig {
    fn merge(&mut self, patch: ProficiencyPatch) {
        if let Some(value) = patch.default_level {
            self.default_level = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsConfig {
    pub tech_filter_limit: usize,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            tech_filter_limit: DEFAULT_TECH_FILTER_LIMIT,
        }
    }
}

impl ProjectsConfig {
    fn merge(&mut self, patch: ProjectsPatch) {
        if let Some(value) = patch.tech_filter_limit {
            self.tech_filter_limit = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    pub format: OutputFormat,
}

impl RobotConfig {
    fn merge(&mut self, patch: RobotPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub data: Option<DataPatch>,
    pub browser: Option<BrowserPatch>,
    pub proficiency: Option<ProficiencyPatch>,
    pub projects: Option<ProjectsPatch>,
    pub robot: Option<RobotPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataPatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BrowserPatch {
    pub default_view: Option<ViewMode>,
    pub default_category: Option<CategoryFilter>,
    pub icons: Option<IconStyle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProficiencyPatch {
    pub default_level: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProjectsPatch {
    pub tech_filter_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RobotPatch {
    pub format: Option<OutputFormat>,
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_dir())
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u8(key: &str) -> Result<Option<u8>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u8>()
            .map(Some)
            .map_err(|err| FolioError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| FolioError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::UnitTestFixture;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.browser.default_view, ViewMode::Cards);
        assert_eq!(config.browser.default_category, CategoryFilter::All);
        assert_eq!(config.proficiency.default_level, 3);
        assert_eq!(config.projects.tech_filter_limit, 6);
        assert!(config.data.path.is_none());
        assert_eq!(config.robot.format, OutputFormat::Human);
    }

    #[test]
    fn patch_overrides_only_given_fields() {
        let mut config = Config::default();
        let patch: ConfigPatch = toml::from_str(
            r#"
[browser]
default_view = "cloud"

[projects]
tech_filter_limit = 3
"#,
        )
        .unwrap();
        config.merge_patch(patch);
        assert_eq!(config.browser.default_view, ViewMode::Cloud);
        assert_eq!(config.browser.icons, IconStyle::Unicode);
        assert_eq!(config.projects.tech_filter_limit, 3);
        assert_eq!(config.proficiency.default_level, 3);
    }

    #[test]
    fn relative_data_path_resolves_against_config_dir() {
        let fixture = UnitTestFixture::new();
        let path = fixture.create_file(
            "conf/config.toml",
            "[data]\npath = \"portfolio.toml\"\n\n[browser]\ndefault_category = \"Cloud\"\n",
        );
        let patch = Config::load_patch(&path).unwrap().unwrap();
        let mut config = Config::default();
        config.merge_patch(patch);
        assert_eq!(
            config.data.path.as_deref(),
            Some(fixture.data_path.join("conf/portfolio.toml").as_path())
        );
        assert_eq!(
            config.browser.default_category,
            CategoryFilter::named("Cloud")
        );
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let fixture = UnitTestFixture::new();
        assert!(
            Config::load_patch(&fixture.data_path.join("nope.toml"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn explicit_missing_file_is_missing_config() {
        let fixture = UnitTestFixture::new();
        let err = Config::load(
            Some(&fixture.data_path.join("absent.toml")),
            &fixture.data_path,
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::MissingConfig(_)));
        assert_eq!(err.code(), "missing_config");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let fixture = UnitTestFixture::new();
        let path = fixture.create_file("bad.toml", "[browser\n");
        let err = Config::load_patch(&path).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn output_format_is_validated_in_files() {
        let fixture = UnitTestFixture::new();
        let path = fixture.create_file("yaml.toml", "[robot]\nformat = \"yaml\"\n");
        let err = Config::load_patch(&path).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));

        let path = fixture.create_file("tsv.toml", "[robot]\nformat = \"tsv\"\n");
        let mut config = Config::default();
        config.merge_patch(Config::load_patch(&path).unwrap().unwrap());
        assert_eq!(config.robot.format, OutputFormat::Plain);
    }

    #[test]
    fn finds_project_config_upwards() {
        let fixture = UnitTestFixture::new();
        let _ = fixture.create_file(".skillfolio/config.toml", "");
        let nested = fixture.data_path.join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(
            Config::project_config_path(&nested),
            Some(fixture.data_path.join(".skillfolio/config.toml"))
        );
    }
}
