//! `stops` command: list one day's stops as JSON.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tiered_route_core::{RoutePlanner, Stop};

use crate::{
    ARG_DATABASE, ARG_DATE, CliError, ENV_STOPS_DATABASE, ENV_STOPS_DATE, day::DayConfig,
    output::write_json,
};

/// CLI arguments for the `stops` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the stops scheduled for one day with their customer, \
                 tier and location, in order id order.",
    about = "List the stops scheduled for one day"
)]
#[ortho_config(prefix = "TIERED_ROUTE")]
pub(crate) struct StopsArgs {
    /// Path to the SQLite database with customers, orders and depot config.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Delivery date to list, as stored in `orders.order_date`.
    #[arg(long = ARG_DATE, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) date: Option<String>,
}

impl StopsArgs {
    fn into_config(self) -> Result<DayConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DayConfig::try_from(merged)
    }
}

impl TryFrom<StopsArgs> for DayConfig {
    type Error = CliError;

    fn try_from(args: StopsArgs) -> Result<Self, Self::Error> {
        Self::from_parts(args.database, args.date, ENV_STOPS_DATABASE, ENV_STOPS_DATE)
    }
}

pub(crate) fn run_stops(args: StopsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_stops_with(&config, writer)
}

pub(crate) fn run_stops_with(config: &DayConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let stops = list_stops(config)?;
    write_json(writer, &stops)
}

pub(crate) fn list_stops(config: &DayConfig) -> Result<Vec<Stop>, CliError> {
    config.validate_sources()?;
    let planner = RoutePlanner::new(config.open_store()?);
    let stops = planner.stops_for_date(&config.date)?;
    info!("{} stops scheduled for {}", stops.len(), config.date);
    Ok(stops)
}
