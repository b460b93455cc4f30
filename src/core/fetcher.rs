use crate::core::{ConfigProvider, CountSource, DateRange, Result};
use crate::domain::model::SearchResponse;
use crate::utils::error::CountError;
use reqwest::Client;

/// Asks the article search endpoint how many articles match the query in a date window.
pub struct ArticleCountFetcher<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ArticleCountFetcher<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn query_params(&self, range: &DateRange) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.config.query().to_string()),
            ("api-key", self.config.api_key().to_string()),
            ("begin_date", range.begin_param()),
            ("end_date", range.end_param()),
            ("fl", self.config.field_list().to_string()),
            ("sort", self.config.sort().to_string()),
            ("page_size", self.config.page_size().to_string()),
        ]
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> CountSource for ArticleCountFetcher<C> {
    async fn article_count(&self, range: &DateRange) -> Result<u64> {
        tracing::debug!(
            "Requesting {} for {}..{}",
            self.config.api_endpoint(),
            range.begin_param(),
            range.end_param()
        );

        let response = self
            .client
            .get(self.config.api_endpoint())
            .query(&self.query_params(range))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CountError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.hits())
    }
}
