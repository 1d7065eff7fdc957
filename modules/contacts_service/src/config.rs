//! Configuration for the contacts service
//!
//! Sources, lowest precedence first: built-in defaults, an optional YAML file,
//! `CONTACTS__`-prefixed environment variables (`__` separates nested keys),
//! and finally the bare `PORT` variable.

use anyhow::{ensure, Context};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Contacts service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: IpAddr,

    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which store client backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Hosted database over its REST API
    #[default]
    Rest,
    /// Process-local, lost on restart
    Memory,
}

/// Remote store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default)]
    pub kind: StoreKind,

    /// Base URL of the hosted database project
    #[serde(default)]
    pub url: Option<String>,

    /// API key sent with every store request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Table holding the contacts
    #[serde(default = "default_table")]
    pub table: String,

    /// Upper bound on a single store call
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            url: None,
            api_key: None,
            table: default_table(),
            timeout: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_bind_addr() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5000
}

fn default_table() -> String {
    "contacts".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Layered configuration sources, without validation
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("CONTACTS__").split("__"))
            .merge(Env::raw().only(&["PORT"]))
    }

    /// Load and validate configuration
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            ensure!(path.exists(), "config file {} does not exist", path.display());
        }

        let config: Config = Self::figment(path)
            .extract()
            .context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.store.kind == StoreKind::Rest {
            self.store.rest_target()?;
        }
        ensure!(!self.store.table.is_empty(), "store.table must not be empty");
        Ok(())
    }

    /// Copy safe to print: the store API key is masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.store.api_key.is_some() {
            config.store.api_key = Some("***".to_string());
        }
        config
    }
}

impl StoreConfig {
    /// Parsed base URL and API key of the REST store
    pub fn rest_target(&self) -> anyhow::Result<(Url, &str)> {
        let url = self
            .url
            .as_deref()
            .context("store.url is required for the rest store")?;
        let url = Url::parse(url).with_context(|| format!("store.url '{}' is not a valid URL", url))?;

        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .context("store.api_key is required for the rest store")?;

        Ok((url, api_key))
    }
}
