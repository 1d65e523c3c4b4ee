//! Client configuration.
//!
//! Loaded from `AMADEUS_*` environment variables or a TOML file; both feed
//! the same [`Config`] struct.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which Amadeus environment to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hostname {
    #[default]
    Test,
    Production,
}

impl Hostname {
    pub fn host(&self) -> &'static str {
        match self {
            Hostname::Test => "test.api.amadeus.com",
            Hostname::Production => "api.amadeus.com",
        }
    }
}

impl FromStr for Hostname {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "test" => Ok(Hostname::Test),
            "production" => Ok(Hostname::Production),
            other => Err(Error::Config(format!("unknown hostname '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silent,
    #[default]
    Warn,
    Debug,
}

impl LogLevel {
    /// Directive for `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Warn => "warn",
            LogLevel::Debug => "debug",
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(LogLevel::Silent),
            "warn" => Ok(LogLevel::Warn),
            "debug" => Ok(LogLevel::Debug),
            other => Err(Error::Config(format!("unknown log level '{}'", other))),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub hostname: Hostname,
    /// Overrides `hostname` when set (e.g. a proxy or a mock server)
    pub host: Option<String>,
    pub ssl: bool,
    pub port: Option<u16>,
    /// Appended to the user agent as `{app_id}/{app_version}`
    pub app_id: Option<String>,
    pub app_version: Option<String>,
    pub timeout_secs: u64,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            hostname: Hostname::default(),
            host: None,
            ssl: true,
            port: None,
            app_id: None,
            app_version: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::default(),
        }
    }
}

// Keeps the secret out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("hostname", &self.hostname)
            .field("host", &self.host)
            .field("ssl", &self.ssl)
            .field("port", &self.port)
            .field("app_id", &self.app_id)
            .field("app_version", &self.app_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Self::default()
        }
    }

    pub fn with_hostname(mut self, hostname: Hostname) -> Self {
        self.hostname = hostname;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_app(mut self, app_id: impl Into<String>, app_version: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self.app_version = Some(app_version.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    /// Read configuration from `AMADEUS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::new(
            lookup("AMADEUS_CLIENT_ID").unwrap_or_default(),
            lookup("AMADEUS_CLIENT_SECRET").unwrap_or_default(),
        );

        if let Some(hostname) = lookup("AMADEUS_HOSTNAME") {
            config.hostname = hostname.parse()?;
        }
        config.host = lookup("AMADEUS_HOST").filter(|h| !h.is_empty());
        if let Some(ssl) = lookup("AMADEUS_SSL") {
            config.ssl = parse_bool(&ssl)?;
        }
        if let Some(port) = lookup("AMADEUS_PORT") {
            config.port = Some(
                port.parse()
                    .map_err(|_| Error::Config(format!("invalid AMADEUS_PORT '{}'", port)))?,
            );
        }
        config.app_id = lookup("AMADEUS_CUSTOM_APP_ID");
        config.app_version = lookup("AMADEUS_CUSTOM_APP_VERSION");
        if let Some(timeout) = lookup("AMADEUS_TIMEOUT") {
            config.timeout_secs = timeout
                .parse()
                .map_err(|_| Error::Config(format!("invalid AMADEUS_TIMEOUT '{}'", timeout)))?;
        }
        if let Some(level) = lookup("AMADEUS_LOG_LEVEL") {
            config.log_level = level.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(Error::Config("missing required argument: client_id".into()));
        }
        if self.client_secret.is_empty() {
            return Err(Error::Config("missing required argument: client_secret".into()));
        }
        Ok(())
    }

    /// Base URL all request paths are appended to, without a trailing slash
    pub fn base_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        let host = self.host.as_deref().unwrap_or_else(|| self.hostname.host());
        match self.port {
            Some(port) => format!("{}://{}:{}", scheme, host.trim_end_matches('/'), port),
            None => format!("{}://{}", scheme, host.trim_end_matches('/')),
        }
    }

    pub fn user_agent(&self) -> String {
        let mut agent = format!("amadeus-rust/{}", env!("CARGO_PKG_VERSION"));
        if let (Some(id), Some(version)) = (&self.app_id, &self.app_version) {
            agent.push_str(&format!(" {}/{}", id, version));
        }
        agent
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(Error::Config(format!("invalid boolean '{}'", other))),
    }
}
