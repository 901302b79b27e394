//! Local libSQL database configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_path() -> String {
    "workhub.db".to_string()
}

/// Per-call timeout in milliseconds.
const fn default_call_timeout_ms() -> u64 {
    5_000
}

const fn default_retry_max_attempts() -> u32 {
    3
}

const fn default_retry_base_delay_ms() -> u64 {
    50
}

const fn default_retry_max_delay_ms() -> u64 {
    1_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file path, or `:memory:` for a throwaway database.
    #[serde(default = "default_path")]
    pub path: String,

    /// Upper bound on a single gateway call.
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,

    /// Total attempts for a call that fails transiently (1 = no retry).
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,

    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,

    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            call_timeout_ms: default_call_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    pub const fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    pub const fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    pub const fn retry_max_delay(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }

    /// Reject values that would make every call fail or never back off.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid("database.path", "must not be empty"));
        }
        if self.call_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "database.call_timeout_ms",
                "must be greater than zero",
            ));
        }
        if self.retry_max_attempts == 0 {
            return Err(ConfigError::invalid(
                "database.retry_max_attempts",
                "must be at least 1",
            ));
        }
        if self.retry_max_delay_ms < self.retry_base_delay_ms {
            return Err(ConfigError::invalid(
                "database.retry_max_delay_ms",
                format!(
                    "{} is below retry_base_delay_ms ({})",
                    self.retry_max_delay_ms, self.retry_base_delay_ms
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "workhub.db");
        assert_eq!(config.call_timeout(), Duration::from_secs(5));
        assert_eq!(config.retry_max_attempts, 3);
        assert!(!config.is_in_memory());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = DatabaseConfig {
            call_timeout_ms: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("call_timeout_ms"));
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let config = DatabaseConfig {
            retry_max_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "database.retry_max_attempts"
        ));
    }

    #[test]
    fn max_delay_below_base_is_invalid() {
        let config = DatabaseConfig {
            retry_base_delay_ms: 500,
            retry_max_delay_ms: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn memory_path_detected() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
            ..Default::default()
        };
        assert!(config.is_in_memory());
    }
}
