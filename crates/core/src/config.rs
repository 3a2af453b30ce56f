use std::path::Path;

use serde::Deserialize;

use crate::error::RoasResult;
use crate::threshold::{SignalThreshold, DEFAULT_GREEN_THRESHOLD, DEFAULT_YELLOW_THRESHOLD};

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `ROAS_DASHBOARD__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub signal: SignalConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Global traffic-light thresholds, in ROAS percent.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    #[serde(default = "default_green_threshold")]
    pub green_threshold: f64,
    #[serde(default = "default_yellow_threshold")]
    pub yellow_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Keep campaigns with neither spend nor impressions in the campaign list.
    #[serde(default = "default_include_idle_campaigns")]
    pub include_idle_campaigns: bool,
}

/// Field campaign lists are ordered by, descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Spend,
    Roas,
    Revenue,
    Clicks,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spend" => Ok(SortKey::Spend),
            "roas" => Ok(SortKey::Roas),
            "revenue" => Ok(SortKey::Revenue),
            "clicks" => Ok(SortKey::Clicks),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

fn default_green_threshold() -> f64 {
    DEFAULT_GREEN_THRESHOLD
}
fn default_yellow_threshold() -> f64 {
    DEFAULT_YELLOW_THRESHOLD
}
fn default_currency() -> String {
    "KRW".to_string()
}
fn default_include_idle_campaigns() -> bool {
    true
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            green_threshold: default_green_threshold(),
            yellow_threshold: default_yellow_threshold(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort_by: SortKey::default(),
            currency: default_currency(),
            include_idle_campaigns: default_include_idle_campaigns(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables only.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an optional TOML file, with environment
    /// variables taking precedence over file values.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let builder = builder.add_source(
            config::Environment::with_prefix("ROAS_DASHBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// The configured global threshold pair, validated.
    pub fn signal_threshold(&self) -> RoasResult<SignalThreshold> {
        SignalThreshold::new(self.signal.green_threshold, self.signal.yellow_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoasError;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.report.sort_by, SortKey::Spend);
        assert_eq!(config.report.currency, "KRW");
        assert!(config.report.include_idle_campaigns);
        let t = config.signal_threshold().unwrap();
        assert_eq!(t, SignalThreshold::default());
    }

    #[test]
    fn test_invalid_configured_threshold_is_rejected() {
        let mut config = AppConfig::default();
        config.signal.green_threshold = 100.0;
        config.signal.yellow_threshold = 120.0;
        assert!(matches!(
            config.signal_threshold(),
            Err(RoasError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "roas-dashboard-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[signal]\ngreen_threshold = 400\n\n[report]\nsort_by = \"roas\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert!((config.signal.green_threshold - 400.0).abs() < f64::EPSILON);
        assert!((config.signal.yellow_threshold - 150.0).abs() < f64::EPSILON);
        assert_eq!(config.report.sort_by, SortKey::Roas);
        assert_eq!(config.report.currency, "KRW");
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("Revenue".parse::<SortKey>().unwrap(), SortKey::Revenue);
        assert!("ctr".parse::<SortKey>().is_err());
    }
}
