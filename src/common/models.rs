// Wire models exchanged with the analysis service
use serde::{Serialize, Deserialize};

/// Body of `POST /analyze-fraud`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Successful response of the analysis service.
///
/// Only `analysis` is required. The reference service echoes the submitted
/// text back as `input_text` and adds a `status` marker; neither is checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AnalysisResult {
    pub fn new(analysis: impl Into<String>) -> Self {
        Self {
            analysis: analysis.into(),
            input_text: None,
            status: None,
        }
    }
}
