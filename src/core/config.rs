// src/core/config.rs
use std::env;

use log::LevelFilter;

use crate::models::GenerationOptions;

// Configuration for the generator CLI
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,

    // Display
    pub history_display_limit: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: 16,
            history_display_limit: 20,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("PASSFORGE_DEFAULT_LENGTH") {
            match val.parse() {
                Ok(length) if length > 0 => config.default_length = length,
                _ => log::warn!("Invalid PASSFORGE_DEFAULT_LENGTH '{}', using {}", val, config.default_length),
            }
        }

        if let Ok(val) = env::var("PASSFORGE_HISTORY_LIMIT") {
            if let Ok(limit) = val.parse() {
                config.history_display_limit = limit;
            }
        }

        if let Ok(level) = env::var("PASSFORGE_LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "trace" => config.log_level = LevelFilter::Trace,
                "debug" => config.log_level = LevelFilter::Debug,
                "info" => config.log_level = LevelFilter::Info,
                "warn" => config.log_level = LevelFilter::Warn,
                "error" => config.log_level = LevelFilter::Error,
                "off" => config.log_level = LevelFilter::Off,
                _ => log::warn!("Unknown log level '{}', using Info", level),
            }
        }

        config
    }

    /// Generation options seeded with the configured default length
    /// and every character class enabled.
    pub fn default_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_length,
            ..GenerationOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.default_length, 16);
        assert_eq!(config.history_display_limit, 20);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn default_options_enable_every_class() {
        let config = Config::default();
        let options = config.default_options();
        assert_eq!(options.length, 16);
        assert!(options.any_class_selected());
        assert!(options.include_special);
    }
}
