pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;

pub use app::{collect_counts, planned_ranges};
pub use core::{
    csv_storage::CsvFileStorage, driver::CountDriver, fetcher::ArticleCountFetcher, DateRange,
    RunSummary, YearCount,
};
pub use utils::error::{CountError, Result};
