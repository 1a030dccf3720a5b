//! Generator configuration
//!
//! The defaults reproduce the stock planner: long English dates and a
//! 10:30 / 14:00 fallback break pair. A configuration can be loaded from JSON,
//! where any omitted field keeps its default.

use crate::breaks::{normalize_clock, ClockTime};
use crate::error::PlannerError;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Default `chrono` format for the plan date ("Monday, January 15, 2024")
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Morning break used when `work_start` cannot be parsed
pub const DEFAULT_FALLBACK_MORNING: &str = "10:30";

/// Afternoon break used when `work_start` cannot be parsed
pub const DEFAULT_FALLBACK_AFTERNOON: &str = "14:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// `chrono` strftime pattern for the response date
    pub date_format: String,
    /// Morning break time substituted for a malformed `work_start`
    pub fallback_morning: String,
    /// Afternoon break time substituted for a malformed `work_start`
    pub fallback_afternoon: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            fallback_morning: DEFAULT_FALLBACK_MORNING.to_string(),
            fallback_afternoon: DEFAULT_FALLBACK_AFTERNOON.to_string(),
        }
    }
}

impl PlannerConfig {
    /// Load and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let mut config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        config.fallback_morning = normalize_clock(&config.fallback_morning);
        config.fallback_afternoon = normalize_clock(&config.fallback_afternoon);
        Ok(config)
    }

    /// Serialize the configuration to pretty JSON
    pub fn to_json(&self) -> Result<String, PlannerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the fallback times are real clock times and the date
    /// format is usable.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.date_format.trim().is_empty() {
            return Err(PlannerError::ConfigError(
                "date_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(PlannerError::ConfigError(format!(
                "date_format {:?} is not a valid strftime pattern",
                self.date_format
            )));
        }

        for (field, value) in [
            ("fallback_morning", &self.fallback_morning),
            ("fallback_afternoon", &self.fallback_afternoon),
        ] {
            ClockTime::parse(value)
                .map_err(|e| PlannerError::ConfigError(format!("{}: {}", field, e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_morning, "10:30");
        assert_eq!(config.fallback_afternoon, "14:00");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PlannerConfig::from_json(r#"{"date_format": "%Y-%m-%d"}"#).unwrap();
        assert_eq!(
            config,
            PlannerConfig {
                date_format: "%Y-%m-%d".to_string(),
                ..PlannerConfig::default()
            }
        );
    }

    #[test]
    fn test_fallback_times_are_normalized_on_load() {
        let config =
            PlannerConfig::from_json(r#"{"fallback_morning": " 9:5", "fallback_afternoon": "014:00"}"#)
                .unwrap();
        assert_eq!(config.fallback_morning, "09:05");
        assert_eq!(config.fallback_afternoon, "14:00");
    }

    #[test]
    fn test_rejects_bad_fallback_time() {
        let result = PlannerConfig::from_json(r#"{"fallback_afternoon": "26:00"}"#);
        assert!(matches!(result, Err(PlannerError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_empty_date_format() {
        let result = PlannerConfig::from_json(r#"{"date_format": "  "}"#);
        assert!(matches!(result, Err(PlannerError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_unknown_specifier() {
        let result = PlannerConfig::from_json(r#"{"date_format": "%Q %Y"}"#);
        assert!(matches!(result, Err(PlannerError::ConfigError(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = PlannerConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(PlannerConfig::from_json(&json).unwrap(), config);
    }
}
