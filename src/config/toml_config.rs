use crate::config::{LogFormat, StoreSettings};
use crate::utils::error::{Result, StoreError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `small_store=debug`.
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StoreError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays the values present in the file onto `settings`.
    pub fn apply_to(&self, settings: &mut StoreSettings) -> Result<()> {
        if let Some(path) = &self.catalog.path {
            settings.catalog_path = path.clone();
        }
        if let Some(level) = &self.logging.level {
            settings.log_filter = level.clone();
        }
        if let Some(format) = &self.logging.format {
            settings.log_format = LogFormat::parse("logging.format", format)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[catalog]
path = "/var/lib/store/inventory.txt"

[logging]
level = "small_store=debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let mut settings = StoreSettings::default();
        config.apply_to(&mut settings).unwrap();

        assert_eq!(settings.catalog_path, "/var/lib/store/inventory.txt");
        assert_eq!(settings.log_filter, "small_store=debug");
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_tables_keep_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let mut settings = StoreSettings::default();
        config.apply_to(&mut settings).unwrap();
        assert_eq!(settings.catalog_path, StoreSettings::default().catalog_path);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_STORE_TEST_DIR", "/tmp/store");

        let config = TomlConfig::from_toml_str(
            r#"
[catalog]
path = "${SMALL_STORE_TEST_DIR}/inventory.txt"
"#,
        )
        .unwrap();
        assert_eq!(
            config.catalog.path.as_deref(),
            Some("/tmp/store/inventory.txt")
        );

        std::env::remove_var("SMALL_STORE_TEST_DIR");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[catalog]
path = "${SMALL_STORE_SURELY_UNSET_VAR}/inventory.txt"
"#,
        )
        .unwrap();
        assert_eq!(
            config.catalog.path.as_deref(),
            Some("${SMALL_STORE_SURELY_UNSET_VAR}/inventory.txt")
        );
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let config = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        let mut settings = StoreSettings::default();
        assert!(matches!(
            config.apply_to(&mut settings),
            Err(StoreError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[catalog\npath = 1"),
            Err(StoreError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\npath = \"shop.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("shop.txt"));
    }
}
