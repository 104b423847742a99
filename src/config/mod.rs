pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};

pub const DEFAULT_CATALOG_PATH: &str = "inventory.txt";
pub const DEFAULT_LOG_FILTER: &str = "small_store=warn";
pub const VERBOSE_LOG_FILTER: &str = "small_store=debug,info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(field_name: &str, value: &str) -> Result<Self> {
        validate_one_of(field_name, value, &["compact", "json"])?;
        Ok(if value == "json" {
            LogFormat::Json
        } else {
            LogFormat::Compact
        })
    }
}

/// Settings after command line, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub catalog_path: String,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl ConfigProvider for StoreSettings {
    fn catalog_path(&self) -> &str {
        &self.catalog_path
    }

    fn log_filter(&self) -> &str {
        &self.log_filter
    }

    fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Validate for StoreSettings {
    fn validate(&self) -> Result<()> {
        validate_path("catalog.path", &self.catalog_path)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "small-store")]
#[command(about = "A small text-menu store inventory manager")]
pub struct CliConfig {
    #[arg(long, help = "Catalog file to load and append to [default: inventory.txt]")]
    pub catalog_path: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, value_enum, help = "Log output format")]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command-line flags win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<StoreSettings> {
        let mut settings = StoreSettings::default();

        if let Some(path) = &self.config {
            toml_config::TomlConfig::from_file(path)?.apply_to(&mut settings)?;
        }
        if let Some(path) = &self.catalog_path {
            settings.catalog_path = path.clone();
        }
        if let Some(format) = self.log_format {
            settings.log_format = format;
        }
        if self.verbose {
            settings.log_filter = VERBOSE_LOG_FILTER.to_string();
        }

        settings.validate()?;
        Ok(settings)
    }
}
