//! Unit tests for building `DayConfig` from merged arguments.

use super::*;
use crate::day::DayConfig;
use rstest::rstest;

const ENV_DATABASE: &str = "EXAMPLE_DATABASE";
const ENV_DATE: &str = "EXAMPLE_DATE";

#[rstest]
fn both_parts_build_a_config() {
    let config = DayConfig::from_parts(
        Some("routes.db".into()),
        Some("2025-09-24".to_owned()),
        ENV_DATABASE,
        ENV_DATE,
    )
    .expect("config should build");
    assert_eq!(config.database.as_str(), "routes.db");
    assert_eq!(config.date, "2025-09-24");
}

#[rstest]
#[case::database(None, Some("2025-09-24"), ARG_DATABASE, ENV_DATABASE)]
#[case::date(Some("routes.db"), None, ARG_DATE, ENV_DATE)]
#[case::database_reported_first(None, None, ARG_DATABASE, ENV_DATABASE)]
fn missing_part_names_the_given_env_var(
    #[case] database: Option<&str>,
    #[case] date: Option<&str>,
    #[case] expected_field: &str,
    #[case] expected_env: &str,
) {
    let err = DayConfig::from_parts(
        database.map(Into::into),
        date.map(str::to_owned),
        ENV_DATABASE,
        ENV_DATE,
    )
    .expect_err("a part is missing");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}
