use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::form::{DelayedEcho, FormOptions};

#[derive(Debug, Parser)]
#[command(
    name = "ortho-signup",
    version,
    about = "Agile Ortho doctor registration form"
)]
pub struct Cli {
    /// Simulated submission latency in milliseconds.
    #[arg(long = "submit-delay-ms", value_name = "MS", default_value_t = 400)]
    pub submit_delay_ms: u64,

    /// Log level written to stderr.
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevelArg,

    /// Initial window width in pixels.
    #[arg(long, default_value_t = AppConfig::DEFAULT_WIDTH)]
    pub width: f32,

    /// Initial window height in pixels.
    #[arg(long, default_value_t = AppConfig::DEFAULT_HEIGHT)]
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Off => LevelFilter::Off,
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        }
    }
}

/// Runtime settings of the registration app.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    pub submit_delay: Duration,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: LevelFilter,
    pub form: FormOptions,
}

impl AppConfig {
    pub const DEFAULT_WIDTH: f32 = 560.0;
    pub const DEFAULT_HEIGHT: f32 = 820.0;
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submit_delay: DelayedEcho::DEFAULT_DELAY,
            window_width: Self::DEFAULT_WIDTH,
            window_height: Self::DEFAULT_HEIGHT,
            log_level: LevelFilter::Info,
            form: FormOptions::default(),
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            submit_delay: Duration::from_millis(cli.submit_delay_ms),
            window_width: cli.width,
            window_height: cli.height,
            log_level: cli.log_level.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let cli = Cli::try_parse_from(["ortho-signup"]).expect("no arguments parse");
        assert_eq!(AppConfig::from(cli), AppConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "ortho-signup",
            "--submit-delay-ms",
            "0",
            "--log-level",
            "debug",
            "--width",
            "640",
        ])
        .expect("flags parse");
        let config = AppConfig::from(cli);
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.window_width, 640.0);
        assert_eq!(config.window_height, AppConfig::DEFAULT_HEIGHT);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["ortho-signup", "--log-level", "loud"]).is_err());
    }
}
