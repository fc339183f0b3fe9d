use crate::client::config::HostType;
use crate::client::models::app_state::Completion;

#[derive(Debug, Clone)]
pub enum Message {
    // Input editing
    InputChanged(String),
    HostSelected(HostType),
    ManualHostChanged(String),
    // Request lifecycle
    Submit,
    Cancel,
    Retry,
    DismissError,
    /// `None` when the request was aborted before finishing.
    AnalysisFinished(Option<Completion>),
    // Logger bar
    ClearLog,
    None,
}
