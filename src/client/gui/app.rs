use iced::{Application, Command, Element, Theme};
use futures_util::future::AbortHandle;
use log::{info, warn};
use crate::client::config::ClientConfig;
use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::app_state::{FwaAppState, PendingRequest};
use crate::client::models::messages::Message;
use crate::client::services::analysis_service::AnalysisService;

pub struct FwaApp {
    pub state: FwaAppState,
    pub config: ClientConfig,
    service: Option<AnalysisService>,
    abort: Option<AbortHandle>,
}

impl FwaApp {
    /// Service for the current host selection, built lazily and dropped
    /// whenever the selection changes.
    fn service(&mut self) -> anyhow::Result<AnalysisService> {
        if let Some(svc) = &self.service {
            return Ok(svc.clone());
        }
        let svc = AnalysisService::from_config(&self.config, self.state.selected_host, &self.state.manual_host)?;
        self.service = Some(svc.clone());
        Ok(svc)
    }

    /// The alert bar shows one entry at a time, so each new one replaces the last.
    fn show(&mut self, entry: LogMessage) {
        self.state.logger.clear();
        self.state.logger.push(entry);
    }

    fn start_request(&mut self, service: AnalysisService, pending: PendingRequest) -> Command<Message> {
        self.show(LogMessage::info(format!("Analyzing via {}...", service.endpoint())));
        let (fut, handle) = service.run_abortable(pending);
        self.abort = Some(handle);
        Command::perform(fut, Message::AnalysisFinished)
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.abort.take() {
            handle.abort();
        }
    }
}

impl Application for FwaApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        let app = FwaApp {
            state: FwaAppState::default(),
            config,
            service: None,
            abort: None,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Healthcare FWA Detection".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::InputChanged(text) => {
                self.state.client.set_input(text);
            }
            Message::HostSelected(host) => {
                if host != self.state.selected_host {
                    info!("Analysis host changed to {}", host);
                    self.state.selected_host = host;
                    self.service = None;
                }
            }
            Message::ManualHostChanged(host) => {
                self.state.manual_host = host;
                self.service = None;
            }
            Message::Submit => {
                if !self.state.client.can_submit() {
                    return Command::none();
                }
                let service = match self.service() {
                    Ok(svc) => svc,
                    Err(e) => {
                        warn!("Cannot resolve analysis endpoint: {:#}", e);
                        self.show(LogMessage::warning(format!("{:#}", e)));
                        return Command::none();
                    }
                };
                if let Some(pending) = self.state.client.begin_submit() {
                    return self.start_request(service, pending);
                }
            }
            Message::Retry => {
                let service = match self.service() {
                    Ok(svc) => svc,
                    Err(e) => {
                        self.show(LogMessage::warning(format!("{:#}", e)));
                        return Command::none();
                    }
                };
                if let Some(pending) = self.state.client.retry() {
                    return self.start_request(service, pending);
                }
            }
            Message::Cancel => {
                if self.state.client.cancel().is_some() {
                    self.abort_in_flight();
                    self.show(LogMessage::warning("Analysis cancelled"));
                }
            }
            Message::DismissError => {
                self.state.client.dismiss_error();
                self.state.logger.clear();
            }
            Message::AnalysisFinished(None) => {
                // aborted by Cancel; state was already reset
            }
            Message::AnalysisFinished(Some(completion)) => {
                let succeeded = completion.outcome.is_ok();
                if !self.state.client.finish(completion) {
                    return Command::none();
                }
                self.abort = None;
                if succeeded {
                    self.show(LogMessage::success("Analysis complete"));
                    return Command::perform(
                        async move {
                            tokio::time::sleep(tokio::time::Duration::from_millis(2000)).await;
                            Message::ClearLog
                        },
                        |msg| msg,
                    );
                }
                if let Some(err) = self.state.client.error() {
                    self.show(LogMessage::error(err.user_message()));
                }
            }
            Message::ClearLog => {
                // errors stay until dismissed or retried
                let showing_error = self.state.logger.last().map(|l| l.level == LogLevel::Error).unwrap_or(false);
                if !showing_error {
                    self.state.logger.clear();
                }
            }
            Message::None => {}
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::analyze::view(&self.state)
    }
}
