// ABOUTME: Logging configuration and structured logging setup for the nutrition engine
// ABOUTME: Configures log levels, formatters, and output destinations via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! The engine crates only emit `tracing` events. Applications embedding the
//! engine call [`LoggingConfig::init`] (or [`init_from_env`]) once at startup
//! to install a subscriber.

use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Default service name reported in structured logs
pub const DEFAULT_SERVICE_NAME: &str = "nutricalc";

/// Logging configuration
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)] // Configuration struct needs multiple boolean flags
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: DEFAULT_SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Build the filter from `RUST_LOG`, falling back to the configured level
    fn env_filter(&self) -> EnvFilter {
        self.filter_for(env::var("RUST_LOG").ok().as_deref())
    }

    /// A `RUST_LOG` directive is used as written. Without one, the engine
    /// crates are pinned to `level` when it names a single level.
    fn filter_for(&self, rust_log: Option<&str>) -> EnvFilter {
        if let Some(directive) = rust_log {
            return EnvFilter::new(directive);
        }

        let filter = EnvFilter::new(&self.level);
        let level = self.level.trim();
        if level.parse::<Level>().is_err() {
            return filter;
        }
        ["nutricalc", "nutricalc_engine"]
            .into_iter()
            .filter_map(|target| format!("{target}={level}").parse::<Directive>().ok())
            .fold(filter, EnvFilter::add_directive)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Nutrition engine logging initialized"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Configuration loaded: {}", config_summary);
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_logging_env() {
        for name in [
            "RUST_LOG",
            "LOG_FORMAT",
            "ENVIRONMENT",
            "LOG_INCLUDE_LOCATION",
            "LOG_INCLUDE_THREAD",
            "LOG_INCLUDE_SPANS",
            "SERVICE_NAME",
            "SERVICE_VERSION",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_logging_env();
        let config = LoggingConfig::from_env();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert!(!config.include_location);
    }

    #[test]
    #[serial]
    fn test_from_env_production_enables_detail() {
        clear_logging_env();
        env::set_var("ENVIRONMENT", "production");
        env::set_var("LOG_FORMAT", "json");
        env::set_var("SERVICE_NAME", "clinic-backend");
        let config = LoggingConfig::from_env();
        clear_logging_env();

        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_location);
        assert!(config.include_thread);
        assert!(config.include_spans);
        assert_eq!(config.service_name, "clinic-backend");
    }

    #[test]
    fn test_rust_log_directives_are_kept_as_written() {
        let config = LoggingConfig {
            level: "warn,nutricalc_engine=debug".to_owned(),
            ..LoggingConfig::default()
        };
        let filter = config
            .filter_for(Some("warn,nutricalc_engine=debug"))
            .to_string();
        assert!(filter.contains("nutricalc_engine=debug"));
        assert!(!filter.contains("nutricalc=info"));
        assert!(!filter.contains("nutricalc_engine=info"));
    }

    #[test]
    fn test_plain_level_pins_engine_crates() {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            ..LoggingConfig::default()
        };
        let filter = config.filter_for(None).to_string();
        assert!(filter.contains("nutricalc=debug"));
        assert!(filter.contains("nutricalc_engine=debug"));

        let config = LoggingConfig {
            level: "warn,nutricalc=trace".to_owned(),
            ..LoggingConfig::default()
        };
        let filter = config.filter_for(None).to_string();
        assert!(filter.contains("nutricalc=trace"));
        assert!(!filter.contains("nutricalc_engine="));
    }
}
