//! `route` command: plan one day's route and print it as JSON.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tiered_route_core::{RoutePlan, RoutePlanner};

use crate::{
    ARG_DATABASE, ARG_DATE, CliError, ENV_ROUTE_DATABASE, ENV_ROUTE_DATE, day::DayConfig,
    output::write_json,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan the delivery route for one day. BLACK-tier stops are \
                 visited first, each tier in greedy nearest-neighbour order \
                 starting from the depot. Inputs can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Plan the delivery route for one day"
)]
#[ortho_config(prefix = "TIERED_ROUTE")]
pub(crate) struct RouteArgs {
    /// Path to the SQLite database with customers, orders and depot config.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Delivery date to plan, as stored in `orders.order_date`.
    #[arg(long = ARG_DATE, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) date: Option<String>,
}

impl RouteArgs {
    fn into_config(self) -> Result<DayConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DayConfig::try_from(merged)
    }
}

impl TryFrom<RouteArgs> for DayConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        Self::from_parts(args.database, args.date, ENV_ROUTE_DATABASE, ENV_ROUTE_DATE)
    }
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_route_with(&config, writer)
}

pub(crate) fn run_route_with(config: &DayConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let plan = plan_route(config)?;
    write_json(writer, &plan)
}

pub(crate) fn plan_route(config: &DayConfig) -> Result<RoutePlan, CliError> {
    config.validate_sources()?;
    let planner = RoutePlanner::new(config.open_store()?);
    let plan = planner.plan_for_date(&config.date)?;
    info!(
        "route for {} visits {} stops over {} km",
        config.date,
        plan.sequence.len(),
        plan.kpis.total_distance_km
    );
    Ok(plan)
}
