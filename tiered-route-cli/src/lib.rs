//! Command-line interface for planning tiered delivery routes.
//!
//! `tiered-route route` prints the planned route for one day as JSON;
//! `tiered-route stops` prints the raw stops the route would be built from;
//! `tiered-route orders` prints the full order rows for the day.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod day;
mod error;
mod fs;
mod logging;
mod orders;
mod output;
mod route;
mod stops;

pub use error::CliError;
pub use logging::LogLevel;

use orders::OrdersArgs;
use route::RouteArgs;
use stops::StopsArgs;

pub(crate) const ARG_DATABASE: &str = "database";
pub(crate) const ARG_DATE: &str = "date";
pub(crate) const ENV_ROUTE_DATABASE: &str = "TIERED_ROUTE_CMDS_ROUTE_DATABASE";
pub(crate) const ENV_ROUTE_DATE: &str = "TIERED_ROUTE_CMDS_ROUTE_DATE";
pub(crate) const ENV_STOPS_DATABASE: &str = "TIERED_ROUTE_CMDS_STOPS_DATABASE";
pub(crate) const ENV_STOPS_DATE: &str = "TIERED_ROUTE_CMDS_STOPS_DATE";
pub(crate) const ENV_ORDERS_DATABASE: &str = "TIERED_ROUTE_CMDS_ORDERS_DATABASE";
pub(crate) const ENV_ORDERS_DATE: &str = "TIERED_ROUTE_CMDS_ORDERS_DATE";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// database cannot be read, or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init_logging(cli.log_level)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Route(args) => route::run_route(args, &mut stdout),
        Command::Stops(args) => stops::run_stops(args, &mut stdout),
        Command::Orders(args) => orders::run_orders(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tiered-route",
    about = "Plan delivery routes that serve BLACK-tier customers first",
    version
)]
struct Cli {
    /// Log verbosity written to stderr.
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan the route for one day and print it as JSON.
    Route(RouteArgs),
    /// List the stops scheduled for one day as JSON.
    Stops(StopsArgs),
    /// List the full order rows for one day as JSON.
    Orders(OrdersArgs),
}

#[cfg(test)]
mod tests;
