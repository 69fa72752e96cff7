//! Logger initialisation for the CLI.

use std::io::Write;

use clap::ValueEnum;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

use crate::CliError;

/// Verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    #[value(alias = "warning")]
    Warn,
    /// Progress messages.
    Info,
    /// Sequencing and store diagnostics.
    Debug,
    /// Everything.
    Trace,
    /// Silence all output.
    Off,
}

impl LogLevel {
    /// The matching `log` filter.
    #[must_use]
    pub const fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

/// Install a stderr logger at `level`. Directives in `RUST_LOG` are applied
/// on top.
pub(crate) fn init_logging(level: LogLevel) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .parse_env("RUST_LOG")
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });
    builder.try_init().map_err(CliError::Logging)
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
