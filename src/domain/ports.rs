use crate::domain::model::{DateRange, YearCount};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait CountStorage: Send + Sync {
    /// Writes the header if the file does not exist yet. Returns whether it did.
    fn ensure_header(&self) -> impl std::future::Future<Output = Result<bool>> + Send;
    fn append(&self, row: &YearCount) -> impl std::future::Future<Output = Result<()>> + Send;
    fn location(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn query(&self) -> &str;
    fn field_list(&self) -> &str;
    fn sort(&self) -> &str;
    fn page_size(&self) -> usize;
    fn start_year(&self) -> i32;
    fn end_year(&self) -> i32;
    fn output_file(&self) -> &str;
    fn request_delay(&self) -> Duration;
}

#[async_trait]
pub trait CountSource: Send + Sync {
    async fn article_count(&self, range: &DateRange) -> Result<u64>;
}
