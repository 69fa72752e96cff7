//! Unit tests covering `route` configuration and output.

use super::helpers::{SEEDED_DATE, SeededDatabase, utf8_output};
use super::*;
use crate::day::DayConfig;
use crate::route::{plan_route, run_route_with};
use rstest::rstest;
use tiered_route_core::{PlanError, SqliteRouteStoreError};

#[rstest]
#[case::missing_database(None, Some("2025-09-24"), ARG_DATABASE, ENV_ROUTE_DATABASE)]
#[case::missing_date(Some("routes.db"), None, ARG_DATE, ENV_ROUTE_DATE)]
fn converting_route_args_reports_missing_fields(
    #[case] database: Option<&str>,
    #[case] date: Option<&str>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = RouteArgs {
        database: database.map(Into::into),
        date: date.map(str::to_owned),
    };

    let err = DayConfig::try_from(args).expect_err("conversion should fail");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn missing_argument_message_names_flag_and_env() {
    let err = DayConfig::try_from(RouteArgs::default()).expect_err("conversion should fail");
    assert_eq!(
        err.to_string(),
        "missing database (set --database or TIERED_ROUTE_CMDS_ROUTE_DATABASE)"
    );
}

#[rstest]
fn missing_database_file_is_reported() {
    let seeded = SeededDatabase::new();
    let config = DayConfig {
        database: seeded.root().join("absent.db"),
        date: SEEDED_DATE.to_owned(),
    };

    let err = plan_route(&config).expect_err("missing database");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_DATABASE);
            assert_eq!(path, config.database);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_as_database_is_reported() {
    let seeded = SeededDatabase::new();
    let config = DayConfig {
        database: seeded.root().to_path_buf(),
        date: SEEDED_DATE.to_owned(),
    };

    let err = plan_route(&config).expect_err("directory is not a database");
    assert!(matches!(err, CliError::SourcePathNotFile { field, .. } if field == ARG_DATABASE));
}

#[rstest]
fn missing_depot_surfaces_as_plan_error() {
    let seeded = SeededDatabase::with_depot(None);
    let config = DayConfig {
        database: seeded.database().to_path_buf(),
        date: SEEDED_DATE.to_owned(),
    };

    let err = plan_route(&config).expect_err("depot is missing");
    assert!(matches!(
        err,
        CliError::Plan(PlanError::Store(SqliteRouteStoreError::MissingDepot { .. }))
    ));
}

#[rstest]
fn route_output_is_json_plan() {
    let seeded = SeededDatabase::new();
    let config = DayConfig {
        database: seeded.database().to_path_buf(),
        date: SEEDED_DATE.to_owned(),
    };

    let mut buffer = Vec::new();
    run_route_with(&config, &mut buffer).expect("route should be planned");
    let output = utf8_output(buffer);
    assert!(output.ends_with('\n'));

    let json: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(json["prioritized"], serde_json::Value::Bool(true));
    assert_eq!(json["depot"]["latitude"], -33.518);
    let ids: Vec<_> = json["sequence"]
        .as_array()
        .expect("sequence array")
        .iter()
        .map(|entry| entry["stop_id"].as_str().expect("stop id").to_owned())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
    assert_eq!(json["sequence"][0]["tier"], "BLACK");
    assert_eq!(json["sequence"][0]["customer_key"], "customer-1");
    assert!(json["kpis"]["total_distance_km"].as_f64().expect("distance") > 0.0);
}

#[rstest]
fn unscheduled_date_prints_empty_plan() {
    let seeded = SeededDatabase::new();
    let config = DayConfig {
        database: seeded.database().to_path_buf(),
        date: "2030-01-01".to_owned(),
    };

    let mut buffer = Vec::new();
    run_route_with(&config, &mut buffer).expect("route should be planned");
    let json: serde_json::Value =
        serde_json::from_str(&utf8_output(buffer)).expect("valid JSON");
    assert_eq!(json["sequence"], serde_json::json!([]));
    assert_eq!(json["kpis"]["total_distance_km"], 0.0);
}
