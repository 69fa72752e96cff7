//! Resolved inputs shared by the per-day commands.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use tiered_route_core::SqliteRouteStore;

use crate::{ARG_DATABASE, ARG_DATE, CliError, fs::file_is_file};

/// A validated database path and delivery date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayConfig {
    /// Path to the SQLite database holding customers, orders and config.
    pub(crate) database: Utf8PathBuf,
    /// Delivery date, matched verbatim against `orders.order_date`.
    pub(crate) date: String,
}

impl DayConfig {
    /// Build from merged subcommand arguments, naming the subcommand's
    /// environment variables when a value is absent.
    pub(crate) fn from_parts(
        database: Option<Utf8PathBuf>,
        date: Option<String>,
        env_database: &'static str,
        env_date: &'static str,
    ) -> Result<Self, CliError> {
        let database = database.ok_or(CliError::MissingArgument {
            field: ARG_DATABASE,
            env: env_database,
        })?;
        let date = date.ok_or(CliError::MissingArgument {
            field: ARG_DATE,
            env: env_date,
        })?;
        Ok(Self { database, date })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.database, ARG_DATABASE)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub(crate) fn open_store(&self) -> Result<SqliteRouteStore, CliError> {
        debug!("opening route store at {}", self.database);
        SqliteRouteStore::open(self.database.as_std_path()).map_err(CliError::OpenStore)
    }
}
