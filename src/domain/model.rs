use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: [&str; 2] = ["Year", "Article Count"];

/// One output row: the total number of hits for a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Article Count")]
    pub count: u64,
}

impl YearCount {
    pub fn new(year: i32, count: u64) -> Self {
        Self { year, count }
    }
}

/// Inclusive begin/end dates sent as `begin_date` / `end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Jan 1 through Dec 31 of `year`. `None` if chrono cannot represent the year.
    pub fn for_year(year: i32) -> Option<Self> {
        Some(Self {
            begin: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    pub fn begin_param(&self) -> String {
        self.begin.format("%Y%m%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y%m%d").to_string()
    }
}

// 只解析需要的欄位：response.meta.hits
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchBody {
    pub meta: SearchMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchMeta {
    pub hits: u64,
}

impl SearchResponse {
    pub fn hits(&self) -> u64 {
        self.response.meta.hits
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub header_created: bool,
    pub rows: Vec<YearCount>,
}

impl RunSummary {
    pub fn total_hits(&self) -> u64 {
        self.rows.iter().map(|row| row.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_params() {
        let range = DateRange::for_year(1980).unwrap();
        assert_eq!(range.begin_param(), "19800101");
        assert_eq!(range.end_param(), "19801231");
    }

    #[test]
    fn test_search_response_ignores_other_fields() {
        let body = serde_json::json!({
            "status": "OK",
            "copyright": "Copyright (c) 2023",
            "response": {
                "docs": [{"headline": {"main": "Warming Seas"}}],
                "meta": {"hits": 4321, "offset": 0, "time": 27}
            }
        });

        let parsed: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.hits(), 4321);
    }

    #[test]
    fn test_search_response_requires_hits() {
        let body = serde_json::json!({"response": {"meta": {"offset": 0}}});
        assert!(serde_json::from_value::<SearchResponse>(body).is_err());
    }

    #[test]
    fn test_run_summary_total_hits() {
        let summary = RunSummary {
            output_path: "counts.csv".to_string(),
            header_created: true,
            rows: vec![YearCount::new(1980, 10), YearCount::new(1981, 32)],
        };
        assert_eq!(summary.total_hits(), 42);
    }
}
