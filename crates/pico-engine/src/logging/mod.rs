//! Logger setup for pico programs.
//!
//! Everything in the crate logs through the `log` facade; this module only
//! installs an `env_logger` backend so the messages go somewhere.

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `filter` follows the `env_logger` syntax (e.g. "warn",
/// "pico_engine=debug,wgpu=warn"). When unset, `RUST_LOG` is consulted and
/// then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Verbose preset for debugging a sketch.
    pub fn debug() -> Self {
        Self { default_level: LevelFilter::Debug, ..Self::default() }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored, as is failure when
/// the host program already installed its own logger.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(config.default_level);
                    // wgpu is chatty at info and below.
                    builder.filter_module("wgpu_core", LevelFilter::Warn);
                    builder.filter_module("wgpu_hal", LevelFilter::Warn);
                }
            },
        }

        builder.write_style(config.write_style);
        builder.format_target(true);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
