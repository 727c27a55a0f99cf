use super::errors::ConfigError;
use super::links::LinksConfig;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};
use super::rules::RulesConfig;
use crate::validators::validate_link_template;
use serde::{Deserialize, Serialize};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration, loaded from TOML
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub rules_file: Option<String>,
}

impl Config {
    /// Load from `path` (defaults when `None`), then apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if let Some(rules_file) = overrides.rules_file {
            self.rules.rules_file = Some(rules_file);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }

        validate_link_template(&self.links.template).map_err(ConfigError::InvalidLinkTemplate)?;

        Ok(())
    }
}
