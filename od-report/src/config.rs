//! Report configuration.

use chrono::{Local, NaiveDate};

/// Environment variable overriding the report date (YYYY-MM-DD).
pub const TODAY_VAR: &str = "OD_REPORT_TODAY";

/// Environment variable turning unmatched bookings into an error.
pub const STRICT_VAR: &str = "OD_REPORT_STRICT";

/// Environment variable selecting pretty-printed JSON output.
pub const PRETTY_VAR: &str = "OD_REPORT_PRETTY";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: expected a YYYY-MM-DD date, got {value:?}")]
    InvalidDate { var: &'static str, value: String },

    #[error("{var}: expected 1/0/true/false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Configuration parameters for building a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Date the report is produced for. Defaults to the local date.
    pub today: Option<NaiveDate>,

    /// Fail when manifest bookings match no OD, instead of dropping them.
    pub strict_manifest: bool,

    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl ReportConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(today: Option<NaiveDate>, strict_manifest: bool, pretty: bool) -> Self {
        Self {
            today,
            strict_manifest,
            pretty,
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of a
    /// variable if set. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(TODAY_VAR) {
            let today = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                ConfigError::InvalidDate {
                    var: TODAY_VAR,
                    value: value.clone(),
                }
            })?;
            config.today = Some(today);
        }
        if let Some(value) = lookup(STRICT_VAR) {
            config.strict_manifest = parse_flag(STRICT_VAR, &value)?;
        }
        if let Some(value) = lookup(PRETTY_VAR) {
            config.pretty = parse_flag(PRETTY_VAR, &value)?;
        }

        Ok(config)
    }

    /// Returns the report date: the configured date, or today's local date.
    pub fn report_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
