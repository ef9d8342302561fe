//! Configuration management for the contact book.
//!
//! This module handles loading configuration from environment variables,
//! reading a `.env` file first when one is present. Every setting has a
//! default, so the bot runs with no environment at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Forward window, in days, for the upcoming-birthday report (default: 7)
    pub upcoming_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `UPCOMING_WINDOW_DAYS`: birthday report window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let upcoming_window_days = Self::parse_env_i64("UPCOMING_WINDOW_DAYS", 7)?;

        if upcoming_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_WINDOW_DAYS".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            upcoming_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upcoming_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper that clears touched vars when the test ends
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        env::remove_var("UPCOMING_WINDOW_DAYS");
        env::remove_var("LOG_LEVEL");
        let config = Config::from_env().unwrap();
        assert_eq!(config.upcoming_window_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_reads_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("UPCOMING_WINDOW_DAYS", "14");
        guard.set("LOG_LEVEL", "debug");
        let config = Config::from_env().unwrap();
        assert_eq!(config.upcoming_window_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_window() {
        let mut guard = EnvGuard::new();
        guard.set("UPCOMING_WINDOW_DAYS", "soon");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_rejects_negative_window() {
        let mut guard = EnvGuard::new();
        guard.set("UPCOMING_WINDOW_DAYS", "-1");
        assert!(Config::from_env().is_err());
    }
}
