use std::env;
use anyhow::Context;
use log::info;
use url::Url;

/// Which analysis service the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostType {
    #[default]
    Localhost,
    Remote,
    Manual,
}

impl std::fmt::Display for HostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HostType::Localhost => "Localhost",
            HostType::Remote => "Remote",
            HostType::Manual => "Manual",
        };
        write!(f, "{}", s)
    }
}

const ALL_HOSTS: [HostType; 3] = [HostType::Localhost, HostType::Remote, HostType::Manual];

impl HostType {
    pub fn all() -> &'static [HostType] {
        &ALL_HOSTS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub default_host: String,
    pub default_port: u16,
    pub public_host: String,
    pub scheme: String,
    pub analyze_path: String,
    pub log_level: String,
}

pub const GUI_LOG_LEVEL: &str = "info";
pub const CLI_LOG_LEVEL: &str = "warn";

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    /// Reads `.env` and the process environment. `LOG_LEVEL` falls back to
    /// `default_log_level` when unset.
    pub fn from_env(default_log_level: &str) -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup_with_log_default(|key| env::var(key).ok(), default_log_level)
    }

    pub fn log_summary(&self) {
        info!(
            "Client configuration loaded: local={}:{} public={} path={} log_level={}",
            self.default_host, self.default_port, self.public_host, self.analyze_path, self.log_level
        );
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_log_default(lookup, GUI_LOG_LEVEL)
    }

    pub fn from_lookup_with_log_default<F>(lookup: F, default_log_level: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let analyze_path = lookup("ANALYSIS_PATH").unwrap_or_else(|| "/analyze-fraud".to_string());
        let analyze_path = if analyze_path.starts_with('/') {
            analyze_path
        } else {
            format!("/{}", analyze_path)
        };
        Self {
            default_host: lookup("ANALYSIS_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            default_port: lookup("ANALYSIS_PORT").and_then(|p| p.parse().ok()).unwrap_or(8000),
            public_host: lookup("ANALYSIS_PUBLIC_HOST").unwrap_or_else(|| "fwa.example.com".to_string()),
            scheme: lookup("ANALYSIS_SCHEME").unwrap_or_else(|| "http".to_string()),
            analyze_path,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| default_log_level.to_string()),
        }
    }

    pub fn local_base(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.default_host, self.default_port)
    }

    pub fn public_base(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.public_host, self.default_port)
    }

    /// Resolves the full `/analyze-fraud` URL for a host selection.
    ///
    /// `manual` is only read for [`HostType::Manual`]; a bare `host:port` gets
    /// the configured scheme prepended.
    pub fn endpoint_for(&self, host: HostType, manual: &str) -> anyhow::Result<Url> {
        let base = match host {
            HostType::Localhost => self.local_base(),
            HostType::Remote => self.public_base(),
            HostType::Manual => {
                let manual = manual.trim();
                if manual.is_empty() {
                    anyhow::bail!("no server address entered");
                }
                if manual.contains("://") {
                    manual.to_string()
                } else {
                    format!("{}://{}", self.scheme, manual)
                }
            }
        };
        self.endpoint_from_base(&base)
    }

    pub fn endpoint_from_base(&self, base: &str) -> anyhow::Result<Url> {
        let base = Url::parse(base).with_context(|| format!("invalid server address '{}'", base))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("invalid server address '{}'", base);
        }
        base.join(&self.analyze_path)
            .with_context(|| format!("cannot append '{}' to '{}'", self.analyze_path, base))
    }
}
