use std::future::Future;
use std::io::Write;
use clap::Parser;
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::client::config::{ClientConfig, HostType};
use crate::client::models::app_state::{AnalysisClient, RequestState};
use crate::client::services::analysis_service::AnalysisService;

/// Terminal client for the healthcare FWA analysis service.
#[derive(Debug, Parser)]
#[command(name = "fwa-cli", version)]
pub struct CliArgs {
    /// Base URL of the analysis service (e.g. http://10.0.0.5:8000).
    /// Defaults to ANALYSIS_HOST / ANALYSIS_PORT.
    #[arg(long)]
    pub host: Option<String>,

    /// Use ANALYSIS_PUBLIC_HOST instead of the local host.
    #[arg(long, conflicts_with = "host")]
    pub remote: bool,

    /// Text to analyze. Without it an interactive prompt is started.
    pub text: Vec<String>,
}

impl CliArgs {
    pub fn service(&self, config: &ClientConfig) -> anyhow::Result<AnalysisService> {
        match (&self.host, self.remote) {
            (Some(host), _) => AnalysisService::from_config(config, HostType::Manual, host),
            (None, true) => AnalysisService::from_config(config, HostType::Remote, ""),
            (None, false) => AnalysisService::from_config(config, HostType::Localhost, ""),
        }
    }

    pub fn one_shot_text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}

/// Runs one submission and returns the analysis text.
pub async fn analyze_once(service: &AnalysisService, text: &str) -> anyhow::Result<String> {
    let mut client = AnalysisClient::new();
    client.set_input(text);
    let Some(pending) = client.begin_submit() else {
        anyhow::bail!("nothing to analyze: input is blank");
    };
    let completion = service.run(pending).await;
    client.finish(completion);
    match client.state() {
        RequestState::Completed => Ok(client.result().map(|r| r.analysis.clone()).unwrap_or_default()),
        RequestState::Failed(e) => Err(anyhow::anyhow!(e.clone())),
        other => Err(anyhow::anyhow!("unexpected request state {:?}", other)),
    }
}

/// Interactive prompt: one text per line, `/retry` resends the last failed
/// text, `/quit` exits. Ctrl-C cancels the request in flight, or ends the
/// session when nothing is in flight.
pub async fn run_repl<R, W, E>(service: &AnalysisService, input: R, out: &mut W, err: &mut E) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
{
    run_repl_with_interrupt(service, input, out, err, || async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Prompt loop driven by an arbitrary interrupt source instead of SIGINT.
pub async fn run_repl_with_interrupt<R, W, E, F, Fut>(
    service: &AnalysisService,
    input: R,
    out: &mut W,
    err: &mut E,
    mut interrupt: F,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut client = AnalysisClient::new();
    let mut lines = input.lines();
    writeln!(out, "[CLIENT] Analysis endpoint: {}", service.endpoint())?;
    writeln!(out, "[CLIENT] Enter healthcare-related text (/retry, /quit):")?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = interrupt() => {
                writeln!(out)?;
                writeln!(out, "[CLIENT] Bye.")?;
                break;
            }
        };
        let Some(line) = line else { break };
        let pending = match line.trim() {
            "/quit" => {
                writeln!(out, "[CLIENT] Bye.")?;
                break;
            }
            "/retry" => match client.retry() {
                Some(p) => p,
                None => {
                    writeln!(out, "[CLIENT] Nothing to retry.")?;
                    continue;
                }
            },
            _ => {
                client.set_input(line.clone());
                match client.begin_submit() {
                    Some(p) => p,
                    None => continue,
                }
            }
        };

        let (fut, handle) = service.run_abortable(pending);
        let completion = tokio::select! {
            c = fut => c,
            _ = interrupt() => {
                handle.abort();
                client.cancel();
                writeln!(out, "[CLIENT] Request cancelled.")?;
                continue;
            }
        };
        let Some(completion) = completion else { continue };
        client.finish(completion);

        match client.state() {
            RequestState::Completed => {
                if let Some(result) = client.result() {
                    writeln!(out, "[ANALYSIS]\n{}", result.analysis)?;
                }
            }
            RequestState::Failed(e) => {
                warn!("Analysis failed: {}", e);
                writeln!(err, "[ERROR] {} (type /retry to resend)", e.user_message())?;
            }
            _ => {}
        }
    }
    info!("Interactive session finished");
    Ok(())
}
