use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// Directory served for every GET that no API route matches.
    #[serde(default = "default_web_root")]
    pub web_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            web_root: default_web_root(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8080 }
fn default_web_root() -> String { "webroot".into() }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { format: default_log_format() } }
}

fn default_log_format() -> String { "compact".into() }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// Load [`config_path`]; a missing file means "all defaults".
/// A file that exists and does not parse is still an error.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_path();
    if Path::new(&path).exists() {
        load_from_file(&path)
    } else {
        Ok(AppConfig::default())
    }
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_or_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_and_validate_with(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::normalize_and_validate`] with an injectable env lookup.
    pub fn normalize_and_validate_with<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.server.normalize()?;
        self.database.normalize_from(&env)?;
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        if self.web_root.trim().is_empty() {
            self.web_root = default_web_root();
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) -> Result<()> {
        self.normalize_from(&|key: &str| std::env::var(key).ok())
    }

    /// Fill an empty URL from `DATABASE_URL`, or assemble one from
    /// `DB_HOST` / `DB_USERNAME` / `DB_PASSWORD`. Credentials are
    /// percent-encoded into the userinfo.
    pub fn normalize_from<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if !self.url.trim().is_empty() {
            return Ok(());
        }
        if let Some(url) = env("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
            self.url = url;
            return Ok(());
        }
        let host = env("DB_HOST").unwrap_or_else(|| "localhost".into());
        let user = env("DB_USERNAME").unwrap_or_else(|| "postgres".into());
        let mut url = Url::parse(&format!("postgres://{host}:5432/postgres"))
            .with_context(|| format!("DB_HOST {host:?} does not form a database url"))?;
        url.set_username(&user)
            .map_err(|_| anyhow!("DB_USERNAME cannot be placed in the database url"))?;
        if let Some(password) = env("DB_PASSWORD") {
            url.set_password(Some(&password))
                .map_err(|_| anyhow!("DB_PASSWORD cannot be placed in the database url"))?;
        }
        self.url = url.into();
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        match self.format.to_ascii_lowercase().as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be compact or json, got {other}")),
        }
    }
}
