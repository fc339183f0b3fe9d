use log::{debug, error, info, warn};
use crate::client::config::HostType;
use crate::common::errors::AnalysisError;
use crate::common::models::AnalysisResult;

/// Identifies one submission. Completions carrying any other id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight(RequestId),
    Completed,
    Failed(AnalysisError),
}

/// A submission accepted by [`AnalysisClient::begin_submit`], waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub text: String,
}

/// Outcome of a sent request, fed back through [`AnalysisClient::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: RequestId,
    pub outcome: Result<AnalysisResult, AnalysisError>,
}

/// Input text, last result and request state for one analysis screen.
///
/// The last successful result lives next to the state rather than inside
/// `Completed`, because a later failure must leave it on screen.
#[derive(Debug, Clone, Default)]
pub struct AnalysisClient {
    input: String,
    state: RequestState,
    result: Option<AnalysisResult>,
    last_submitted: Option<String>,
    next_id: u64,
}

impl AnalysisClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.state {
            RequestState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::InFlight(_))
    }

    pub fn in_flight_id(&self) -> Option<RequestId> {
        match self.state {
            RequestState::InFlight(id) => Some(id),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Starts a submission of the current input.
    ///
    /// Returns `None` without touching any state when the input is blank or a
    /// request is already in flight. The returned text is the raw input; only
    /// the emptiness check looks at the trimmed value.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if self.is_loading() {
            debug!("Submit ignored: request {} still in flight", self.in_flight_id().map(|i| i.to_string()).unwrap_or_default());
            return None;
        }
        if self.input.trim().is_empty() {
            return None;
        }
        let text = self.input.clone();
        Some(self.start(text))
    }

    /// Resubmits the text of the last failed request.
    pub fn retry(&mut self) -> Option<PendingRequest> {
        if !matches!(self.state, RequestState::Failed(_)) {
            return None;
        }
        let text = self.last_submitted.clone()?;
        info!("Retrying analysis ({} chars)", text.len());
        Some(self.start(text))
    }

    fn start(&mut self, text: String) -> PendingRequest {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.state = RequestState::InFlight(id);
        self.last_submitted = Some(text.clone());
        info!("Analysis request {} submitted ({} chars)", id, text.len());
        PendingRequest { id, text }
    }

    /// Applies the outcome of a request.
    ///
    /// Returns `false` when the completion belongs to a cancelled or
    /// superseded request, in which case nothing changes.
    pub fn finish(&mut self, completion: Completion) -> bool {
        if self.in_flight_id() != Some(completion.id) {
            debug!("Discarding stale completion for request {}", completion.id);
            return false;
        }
        match completion.outcome {
            Ok(result) => {
                info!("Analysis request {} completed ({} chars)", completion.id, result.analysis.len());
                self.result = Some(result);
                self.state = RequestState::Completed;
            }
            Err(e) => {
                match &e {
                    AnalysisError::Http { status, body } => {
                        warn!("Analysis request {} failed with HTTP {}: {}", completion.id, status, body);
                    }
                    AnalysisError::Transport(msg) => {
                        error!("Analysis request {} failed: {}", completion.id, msg);
                    }
                }
                self.state = RequestState::Failed(e);
            }
        }
        true
    }

    /// Drops the in-flight request, if any, and returns its id.
    pub fn cancel(&mut self) -> Option<RequestId> {
        let id = self.in_flight_id()?;
        info!("Analysis request {} cancelled", id);
        self.state = RequestState::Idle;
        Some(id)
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.state, RequestState::Failed(_)) {
            self.state = RequestState::Idle;
        }
    }
}

/// Everything the GUI renders, on top of the analysis controller.
#[derive(Debug, Clone, Default)]
pub struct FwaAppState {
    pub client: AnalysisClient,
    pub selected_host: HostType,
    pub manual_host: String,
    pub logger: Vec<crate::client::gui::views::logger::LogMessage>,
}
