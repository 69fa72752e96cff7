//! Unit tests for the tiered-route CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod day_unit;
mod helpers;
mod route_unit;
