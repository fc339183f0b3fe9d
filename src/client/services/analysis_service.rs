use std::future::Future;
use futures_util::future::{abortable, AbortHandle};
use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::client::config::{ClientConfig, HostType};
use crate::client::models::app_state::{Completion, PendingRequest};
use crate::common::errors::AnalysisError;
use crate::common::models::{AnalysisResult, AnalyzeRequest};

/// HTTP transport for the `/analyze-fraud` endpoint.
///
/// Cheap to clone: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    http: Client,
    endpoint: Url,
}

impl AnalysisService {
    pub fn new(endpoint: Url) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("fwa-detect/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &ClientConfig, host: HostType, manual_host: &str) -> anyhow::Result<Self> {
        let endpoint = config.endpoint_for(host, manual_host)?;
        info!("Using analysis endpoint {}", endpoint);
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts `{"text": text}` and decodes the analysis.
    ///
    /// No retry and no timeout: a hung service keeps the future pending until
    /// the connection errors out or the caller drops it.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        debug!("POST {} ({} chars)", self.endpoint, text.len());
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&AnalyzeRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Http { status: status.as_u16(), body });
        }

        let result = response.json::<AnalysisResult>().await?;
        Ok(result)
    }

    pub async fn run(&self, pending: PendingRequest) -> Completion {
        let outcome = self.analyze(&pending.text).await;
        Completion { id: pending.id, outcome }
    }

    /// Like [`run`](Self::run), but the request can be dropped mid-flight via
    /// the returned handle. An aborted request resolves to `None`.
    pub fn run_abortable(
        &self,
        pending: PendingRequest,
    ) -> (impl Future<Output = Option<Completion>> + Send + 'static, AbortHandle) {
        let svc = self.clone();
        let (fut, handle) = abortable(async move { svc.run(pending).await });
        (async move { fut.await.ok() }, handle)
    }
}
