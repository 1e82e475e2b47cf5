use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;
use crate::models::NamePolicy;

/// File looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "umi.toml";

/// Main configuration structure for the scaffolding tools
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub verifier: VerifierConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub name_policy: NamePolicy,
    /// Skip the overwrite prompt and always proceed.
    pub assume_yes: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(crate::ScaffoldError::Configuration(format!(
                "Unknown output format: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Exit with status 1 when a critical path is missing.
    pub fail_on_missing: bool,
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub target: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(), // pretty, json, compact
            target: "stderr".to_string(), // stdout, stderr
        }
    }
}

impl Config {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (UMI_SECTION__KEY, plus the UMI_* shorthands)
    /// 2. umi.toml in the working directory (if exists)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&std::env::current_dir()?)
    }

    /// Load configuration from a specific directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        let config_file = dir.join(CONFIG_FILE_NAME);
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file));
        }

        builder = builder.add_source(
            Environment::with_prefix("UMI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut result: Config = builder.build()?.try_deserialize()?;
        result.merge_env_vars()?;

        Ok(result)
    }

    /// Flat shorthand variables, applied last
    fn merge_env_vars(&mut self) -> Result<()> {
        if let Ok(policy) = std::env::var("UMI_NAME_POLICY") {
            self.generator.name_policy = policy.parse()?;
        }
        if let Ok(value) = std::env::var("UMI_ASSUME_YES") {
            self.generator.assume_yes = is_truthy(&value);
        }
        if let Ok(value) = std::env::var("UMI_FAIL_ON_MISSING") {
            self.verifier.fail_on_missing = is_truthy(&value);
        }
        if let Ok(level) = std::env::var("UMI_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs::write;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.generator.name_policy, NamePolicy::Permissive);
        assert!(!config.generator.assume_yes);
        assert!(!config.verifier.fail_on_missing);
        assert_eq!(config.verifier.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.target, "stderr");
    }

    #[test]
    fn test_load_from_toml_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_content = r#"
[generator]
name_policy = "strict"
assume_yes = true

[verifier]
format = "json"

[logging]
format = "json"
"#;
        write(temp_dir.path().join(CONFIG_FILE_NAME), config_content)?;

        let config = Config::load_from_dir(temp_dir.path())?;

        assert_eq!(config.generator.name_policy, NamePolicy::Strict);
        assert!(config.generator.assume_yes);
        assert_eq!(config.verifier.format, OutputFormat::Json);
        assert_eq!(config.logging.format, "json");
        // Untouched sections keep their defaults
        assert_eq!(config.logging.target, "stderr");

        Ok(())
    }

    #[test]
    fn test_env_overrides_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[verifier]\nfail_on_missing = false\n",
        )?;

        unsafe {
            env::set_var("UMI_VERIFIER__FAIL_ON_MISSING", "true");
        }
        let loaded = Config::load_from_dir(temp_dir.path());
        unsafe {
            env::remove_var("UMI_VERIFIER__FAIL_ON_MISSING");
        }

        assert!(loaded?.verifier.fail_on_missing);
        Ok(())
    }

    #[test]
    fn test_load_no_config_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from_dir(temp_dir.path())?;

        assert_eq!(config.verifier.format, OutputFormat::Text);
        Ok(())
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" Yes "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("off"));
    }
}
