use crate::errors::ClientError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: String,
    pub emoji: String,
    pub color: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub timestamp: String,
}

impl HistoryItem {
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    pub fn into_result(self) -> Result<AnalysisResult, ClientError> {
        if !self.success {
            return Err(ClientError::Application(server_message(self.error)));
        }
        self.result
            .ok_or_else(|| ClientError::Transport("response did not include a result".into()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchAnalyzeRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BatchAnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Vec<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchAnalyzeResponse {
    pub fn into_results(self) -> Result<Vec<AnalysisResult>, ClientError> {
        if self.success {
            Ok(self.results)
        } else {
            Err(ClientError::Application(server_message(self.error)))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SentimentStats {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_polarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_subjectivity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SentimentStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatsResponse {
    pub fn into_stats(self) -> Result<SentimentStats, ClientError> {
        match (self.success, self.stats) {
            (true, Some(stats)) => Ok(stats),
            (true, None) => Ok(SentimentStats::default()),
            (false, _) => Err(ClientError::Application(server_message(self.error))),
        }
    }
}

fn server_message(error: Option<String>) -> String {
    error.unwrap_or_else(|| "unknown error".to_string())
}
