use crate::config::{
    validate_provider, DEFAULT_API_ENDPOINT, DEFAULT_END_YEAR, DEFAULT_FIELD_LIST,
    DEFAULT_OUTPUT_FILE, DEFAULT_PAGE_SIZE, DEFAULT_QUERY, DEFAULT_REQUEST_DELAY_SECS,
    DEFAULT_SORT, DEFAULT_START_YEAR,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "article-counts")]
#[command(about = "Collect yearly article counts from a news search API into a CSV file")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, env = "NYT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_QUERY)]
    pub query: String,

    #[arg(long, default_value = DEFAULT_FIELD_LIST)]
    pub field_list: String,

    #[arg(long, default_value = DEFAULT_SORT)]
    pub sort: String,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    pub start_year: i32,

    #[arg(long, default_value_t = DEFAULT_END_YEAR)]
    pub end_year: i32,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(long, default_value_t = DEFAULT_REQUEST_DELAY_SECS, help = "Seconds to wait between requests")]
    pub request_delay_secs: u64,

    #[arg(long, help = "Log the planned requests without calling the API")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn field_list(&self) -> &str {
        &self.field_list
    }

    fn sort(&self) -> &str {
        &self.sort
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn start_year(&self) -> i32 {
        self.start_year
    }

    fn end_year(&self) -> i32 {
        self.end_year
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("api_key", &self.api_key)?;
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CountError;

    #[test]
    fn test_defaults_match_original_run() {
        let config = CliConfig::parse_from(["article-counts", "--api-key", "abc"]);

        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.query(), "climate Change");
        assert_eq!(config.field_list(), "headline");
        assert_eq!(config.sort(), "newest");
        assert_eq!(config.page_size(), 10);
        assert_eq!((config.start_year(), config.end_year()), (1980, 2020));
        assert_eq!(config.output_file(), "nyt_annual_climate_article_counts.csv");
        assert_eq!(config.request_delay(), Duration::from_secs(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "article-counts",
            "--api-key",
            "abc",
            "--query",
            "sea level",
            "--start-year",
            "2001",
            "--end-year",
            "2003",
            "--request-delay-secs",
            "0",
            "--dry-run",
        ]);

        assert_eq!(config.query(), "sea level");
        assert_eq!(config.start_year..=config.end_year, 2001..=2003);
        assert!(config.request_delay().is_zero());
        assert!(config.dry_run);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let config = CliConfig::parse_from([
            "article-counts",
            "--api-key",
            "abc",
            "--start-year",
            "2020",
            "--end-year",
            "1980",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_key_rejected() {
        let mut config = CliConfig::parse_from(["article-counts", "--api-key", "abc"]);
        config.api_key = None;
        assert!(matches!(
            config.validate(),
            Err(CountError::MissingConfigError { .. })
        ));
    }
}
