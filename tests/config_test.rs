#![cfg(feature = "cli")]

use article_counts::utils::validation::Validate;
use article_counts::{planned_ranges, CliConfig, TomlConfig};
use clap::Parser;

#[test]
fn test_planned_ranges_cover_every_year() {
    let config = CliConfig::parse_from([
        "article-counts",
        "--api-key",
        "abc",
        "--start-year",
        "2018",
        "--end-year",
        "2020",
    ]);

    let ranges = planned_ranges(&config).unwrap();
    let params: Vec<(String, String)> = ranges
        .iter()
        .map(|r| (r.begin_param(), r.end_param()))
        .collect();

    assert_eq!(
        params,
        vec![
            ("20180101".to_string(), "20181231".to_string()),
            ("20190101".to_string(), "20191231".to_string()),
            ("20200101".to_string(), "20201231".to_string()),
        ]
    );
}

#[test]
fn test_default_cli_run_plans_forty_one_years() {
    let config = CliConfig::parse_from(["article-counts", "--api-key", "abc"]);
    let ranges = planned_ranges(&config).unwrap();

    assert_eq!(ranges.len(), 41);
    assert_eq!(ranges.first().unwrap().begin_param(), "19800101");
    assert_eq!(ranges.last().unwrap().end_param(), "20201231");
}

#[test]
fn test_toml_rejects_empty_query_and_bad_years() {
    let toml_content = r#"
[source]
api_key = "abc"

[search]
query = "  "

[range]
start_year = 2020
end_year = 2019
"#;

    let config = TomlConfig::from_toml_str(toml_content).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_describe_never_prints_api_key() {
    let config = CliConfig::parse_from(["article-counts", "--api-key", "super-secret-key"]);
    let summary = article_counts::config::describe(&config).join("\n");

    assert!(summary.contains("climate Change"));
    assert!(summary.contains("41 requests"));
    assert!(!summary.contains("super-secret-key"));
}

#[test]
fn test_extreme_year_span_is_described_and_rejected() {
    let config = CliConfig::parse_from([
        "article-counts",
        "--api-key",
        "abc",
        "--start-year=-2147483648",
        "--end-year",
        "2147483647",
    ]);

    let summary = article_counts::config::describe(&config).join("\n");
    assert!(summary.contains("4294967296 requests"));
    assert!(config.validate().is_err());

    let reversed = CliConfig::parse_from([
        "article-counts",
        "--api-key",
        "abc",
        "--start-year",
        "2147483647",
        "--end-year=-2147483648",
    ]);
    assert!(article_counts::config::describe(&reversed)
        .join("\n")
        .contains("(0 requests)"));
}
