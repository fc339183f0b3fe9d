use thiserror::Error;

/// Failure of a single analysis request.
///
/// Kept cloneable so it can travel inside GUI messages and stay stored in
/// the request state after the call has finished.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The service answered with a non-2xx status.
    #[error("analysis service returned HTTP {status}")]
    Http { status: u16, body: String },

    /// The request never completed or the response body was not valid JSON.
    #[error("transport error: {0}")]
    Transport(String),
}

impl AnalysisError {
    pub fn is_http(&self) -> bool {
        matches!(self, AnalysisError::Http { .. })
    }

    /// Short text shown to the user in the error bar.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Http { status, .. } => format!("Analysis failed (HTTP {})", status),
            AnalysisError::Transport(_) => "Analysis failed: service unreachable or invalid response".to_string(),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AnalysisError::Transport(format!("invalid response body: {}", e))
        } else {
            AnalysisError::Transport(e.to_string())
        }
    }
}
