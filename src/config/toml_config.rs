use crate::config::{
    validate_provider, DEFAULT_API_ENDPOINT, DEFAULT_FIELD_LIST, DEFAULT_OUTPUT_FILE,
    DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_DELAY_SECS, DEFAULT_SORT,
};
use crate::core::ConfigProvider;
use crate::utils::error::{CountError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub search: SearchConfig,
    pub range: RangeConfig,
    pub output: Option<OutputConfig>,
    pub rate_limit: Option<RateLimitConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub query: String,
    pub fields: Option<String>,
    pub sort: Option<String>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    pub start_year: i32,
    pub end_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    pub request_delay_seconds: u64,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CountError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NYT_API_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CountError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }

    fn api_key(&self) -> &str {
        &self.source.api_key
    }

    fn query(&self) -> &str {
        &self.search.query
    }

    fn field_list(&self) -> &str {
        self.search.fields.as_deref().unwrap_or(DEFAULT_FIELD_LIST)
    }

    fn sort(&self) -> &str {
        self.search.sort.as_deref().unwrap_or(DEFAULT_SORT)
    }

    fn page_size(&self) -> usize {
        self.search.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    fn start_year(&self) -> i32 {
        self.range.start_year
    }

    fn end_year(&self) -> i32 {
        self.range.end_year
    }

    fn output_file(&self) -> &str {
        self.output
            .as_ref()
            .map(|o| o.file.as_str())
            .unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    fn request_delay(&self) -> Duration {
        let secs = self
            .rate_limit
            .as_ref()
            .map(|r| r.request_delay_seconds)
            .unwrap_or(DEFAULT_REQUEST_DELAY_SECS);
        Duration::from_secs(secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
