use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::browser::{FilterState, IconProvider, IconStyle, SkillsBrowser};
use crate::cli::colors::ColorSupport;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::portfolio::{Portfolio, SkillCatalog};

pub struct AppContext {
    pub config: Config,
    pub portfolio: Portfolio,
    pub catalog: Arc<SkillCatalog>,
    /// Where the portfolio came from; `None` for the built-in data.
    pub data_path: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        let output_format = cli.output_format(&config);
        Self::from_config(config, cli.data.clone(), output_format)
    }

    pub fn from_config(
        config: Config,
        data_override: Option<PathBuf>,
        output_format: OutputFormat,
    ) -> Result<Self> {
        let data_path = data_override.or_else(|| config.data.path.clone());
        let mut portfolio = Portfolio::load_or_builtin(data_path.as_deref())?;
        portfolio.proficiency = portfolio
            .proficiency
            .with_default_level(config.proficiency.default_level)?;

        debug!(
            target: "app",
            data = ?data_path,
            categories = portfolio.catalog.len(),
            format = ?output_format,
            "context ready"
        );

        Ok(Self {
            catalog: Arc::new(portfolio.catalog.clone()),
            config,
            portfolio,
            data_path,
            output_format,
        })
    }

    /// Initial filter state from configuration defaults.
    #[must_use]
    pub fn default_filter_state(&self) -> FilterState {
        FilterState::default()
            .with_category(self.config.browser.default_category.clone())
            .with_view_mode(self.config.browser.default_view)
    }

    /// Where the portfolio was loaded from, for display.
    #[must_use]
    pub fn data_source(&self) -> String {
        self.data_path
            .as_ref()
            .map_or_else(|| "built-in".to_string(), |path| path.display().to_string())
    }

    #[must_use]
    pub fn browser(&self, state: FilterState) -> SkillsBrowser {
        SkillsBrowser::with_state(Arc::clone(&self.catalog), state)
    }

    /// Configured icon style, downgraded to ASCII on terminals that cannot
    /// draw the glyphs.
    #[must_use]
    pub fn icons(&self) -> Box<dyn IconProvider> {
        let style = match self.config.browser.icons {
            IconStyle::Unicode if !ColorSupport::supports_unicode() => IconStyle::Ascii,
            style => style,
        };
        style.provider()
    }
}
