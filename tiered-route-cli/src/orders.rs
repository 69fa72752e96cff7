//! `orders` command: list one day's full order rows as JSON.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tiered_route_core::OrderRecord;

use crate::{
    ARG_DATABASE, ARG_DATE, CliError, ENV_ORDERS_DATABASE, ENV_ORDERS_DATE, day::DayConfig,
    output::write_json,
};

/// CLI arguments for the `orders` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the orders scheduled for one day with their delivery \
                 window, weight, volume, status and customer tier, in order \
                 id order. Orders whose customer has no coordinates are \
                 included with a null location.",
    about = "List the orders scheduled for one day"
)]
#[ortho_config(prefix = "TIERED_ROUTE")]
pub(crate) struct OrdersArgs {
    /// Path to the SQLite database with customers, orders and depot config.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Delivery date to list, as stored in `orders.order_date`.
    #[arg(long = ARG_DATE, value_name = "YYYY-MM-DD")]
    #[serde(default)]
    pub(crate) date: Option<String>,
}

impl OrdersArgs {
    fn into_config(self) -> Result<DayConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DayConfig::try_from(merged)
    }
}

impl TryFrom<OrdersArgs> for DayConfig {
    type Error = CliError;

    fn try_from(args: OrdersArgs) -> Result<Self, Self::Error> {
        Self::from_parts(args.database, args.date, ENV_ORDERS_DATABASE, ENV_ORDERS_DATE)
    }
}

pub(crate) fn run_orders(args: OrdersArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_orders_with(&config, writer)
}

pub(crate) fn run_orders_with(config: &DayConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let orders = list_orders(config)?;
    write_json(writer, &orders)
}

pub(crate) fn list_orders(config: &DayConfig) -> Result<Vec<OrderRecord>, CliError> {
    config.validate_sources()?;
    let orders = config
        .open_store()?
        .orders_for_date(&config.date)
        .map_err(CliError::ReadOrders)?;
    info!("{} orders scheduled for {}", orders.len(), config.date);
    Ok(orders)
}
