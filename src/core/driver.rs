use crate::core::{CountSource, CountStorage, DateRange, Result, YearCount};
use crate::domain::model::RunSummary;
use crate::utils::error::CountError;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Walks the year range in order: fetch, append, report, wait.
pub struct CountDriver<F: CountSource, S: CountStorage> {
    source: F,
    storage: S,
    years: RangeInclusive<i32>,
    request_delay: Duration,
}

impl<F: CountSource, S: CountStorage> CountDriver<F, S> {
    pub fn new(source: F, storage: S, years: RangeInclusive<i32>, request_delay: Duration) -> Self {
        Self {
            source,
            storage,
            years,
            request_delay,
        }
    }

    /// Stops at the first error; rows already appended stay in the file.
    pub async fn run(&self) -> Result<RunSummary> {
        let header_created = self.storage.ensure_header().await?;
        let mut rows = Vec::new();

        tracing::info!(
            "🚀 Collecting yearly counts {}..={} into {}",
            self.years.start(),
            self.years.end(),
            self.storage.location()
        );

        let last_year = *self.years.end();
        for year in self.years.clone() {
            let range = DateRange::for_year(year).ok_or_else(|| CountError::ConfigError {
                message: format!("Year {} is outside the supported calendar", year),
            })?;

            let count = self.source.article_count(&range).await.inspect_err(|e| {
                tracing::error!("❌ Request for {} failed: {}", year, e);
            })?;

            let row = YearCount::new(year, count);
            self.storage.append(&row).await?;
            rows.push(row);

            println!("Year {} has {} articles.", year, count);
            tracing::debug!("Appended {:?}", row);

            // 最後一年不需要等待
            if year < last_year && !self.request_delay.is_zero() {
                tracing::debug!("Sleeping {:?} before next request", self.request_delay);
                tokio::time::sleep(self.request_delay).await;
            }
        }

        Ok(RunSummary {
            output_path: self.storage.location(),
            header_created,
            rows,
        })
    }
}
