#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{CountError, Result};
use crate::utils::validation;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.nytimes.com/svc/search/v2/articlesearch.json";
pub const DEFAULT_QUERY: &str = "climate Change";
pub const DEFAULT_FIELD_LIST: &str = "headline";
pub const DEFAULT_SORT: &str = "newest";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_START_YEAR: i32 = 1980;
pub const DEFAULT_END_YEAR: i32 = 2020;
pub const DEFAULT_OUTPUT_FILE: &str = "nyt_annual_climate_article_counts.csv";
pub const DEFAULT_REQUEST_DELAY_SECS: u64 = 20;

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_url("api_endpoint", config.api_endpoint())?;
    validation::validate_non_empty_string("api_key", config.api_key())?;

    // 未替換的 ${VAR} 代表環境變數不存在
    if config.api_key().starts_with("${") {
        return Err(CountError::MissingConfigError {
            field: format!("api_key (environment variable {})", config.api_key()),
        });
    }

    validation::validate_non_empty_string("query", config.query())?;
    validation::validate_positive_number("page_size", config.page_size(), 1)?;
    validation::validate_year_range(config.start_year(), config.end_year())?;
    validation::validate_path("output_file", config.output_file())?;
    Ok(())
}

/// Human-readable summary. The API key is never printed.
pub fn describe<C: ConfigProvider>(config: &C) -> Vec<String> {
    vec![
        format!("Endpoint: {}", config.api_endpoint()),
        format!("Query: {}", config.query()),
        format!(
            "Years: {}..={} ({} requests)",
            config.start_year(),
            config.end_year(),
            (i64::from(config.end_year()) - i64::from(config.start_year()) + 1).max(0)
        ),
        format!(
            "Fields: {}, sort: {}, page size: {}",
            config.field_list(),
            config.sort(),
            config.page_size()
        ),
        format!("Output: {}", config.output_file()),
        format!("Request delay: {:?}", config.request_delay()),
    ]
}
