use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level timeless configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelessConfig {
    /// Defaults applied when a command leaves an option out.
    #[serde(default)]
    pub defaults: DefaultsToml,

    /// Period generation settings.
    #[serde(default)]
    pub period: PeriodToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsToml {
    #[serde(default = "default_zone")]
    pub zone: String,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Output pattern; empty for ISO-8601.
    #[serde(default)]
    pub format: String,
}

impl Default for DefaultsToml {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            week_start: default_week_start(),
            format: String::new(),
        }
    }
}

fn default_zone() -> String {
    "UTC".to_string()
}
fn default_week_start() -> String {
    "monday".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    #[serde(default = "default_frequency")]
    pub frequency: String,
    #[serde(default = "default_step")]
    pub step: i64,
}

impl Default for PeriodToml {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            step: default_step(),
        }
    }
}

fn default_frequency() -> String {
    "days".to_string()
}
fn default_step() -> i64 {
    1
}

/// Reads the configuration file, or returns defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<TimelessConfig> {
    let Some(path) = path else {
        return Ok(TimelessConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: TimelessConfig = toml::from_str("").unwrap();
        assert_eq!(config.defaults.zone, "UTC");
        assert_eq!(config.defaults.week_start, "monday");
        assert!(config.defaults.format.is_empty());
        assert_eq!(config.period.frequency, "days");
        assert_eq!(config.period.step, 1);
    }

    #[test]
    fn partial_sections() {
        let config: TimelessConfig = toml::from_str(
            r#"
            [defaults]
            zone = "Europe/Vienna"

            [period]
            step = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.zone, "Europe/Vienna");
        assert_eq!(config.defaults.week_start, "monday");
        assert_eq!(config.period.frequency, "days");
        assert_eq!(config.period.step, 2);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<TimelessConfig, _> = toml::from_str("[defaults]\ncolour = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_path_gives_defaults() {
        let config = load(None).unwrap();
        assert_eq!(config.period.frequency, "days");
    }
}
