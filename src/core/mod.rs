pub mod csv_storage;
pub mod driver;
pub mod fetcher;

pub use crate::domain::model::{DateRange, RunSummary, YearCount};
pub use crate::domain::ports::{ConfigProvider, CountSource, CountStorage};
pub use crate::utils::error::Result;
