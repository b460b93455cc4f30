// Application layer: wires a config source to the fetcher, CSV storage and driver.

use crate::core::csv_storage::CsvFileStorage;
use crate::core::driver::CountDriver;
use crate::core::fetcher::ArticleCountFetcher;
use crate::core::{ConfigProvider, DateRange, Result, RunSummary};
use crate::utils::error::CountError;

/// Runs the whole collection against the configured API and output file.
pub async fn collect_counts<C: ConfigProvider>(config: C) -> Result<RunSummary> {
    let storage = CsvFileStorage::new(config.output_file());
    let years = config.start_year()..=config.end_year();
    let delay = config.request_delay();

    let fetcher = ArticleCountFetcher::new(config);
    let driver = CountDriver::new(fetcher, storage, years, delay);
    driver.run().await
}

/// Date windows a real run would request, in order.
pub fn planned_ranges<C: ConfigProvider>(config: &C) -> Result<Vec<DateRange>> {
    (config.start_year()..=config.end_year())
        .map(|year| {
            DateRange::for_year(year).ok_or_else(|| CountError::ConfigError {
                message: format!("Year {} is outside the supported calendar", year),
            })
        })
        .collect()
}

pub fn log_dry_run<C: ConfigProvider>(config: &C) -> Result<()> {
    tracing::info!("🔍 DRY RUN MODE - no requests will be sent");
    for line in crate::config::describe(config) {
        tracing::info!("  {}", line);
    }
    for range in planned_ranges(config)? {
        tracing::info!(
            "  GET begin_date={} end_date={}",
            range.begin_param(),
            range.end_param()
        );
    }
    Ok(())
}
