use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8787;
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Sweep cadence in seconds. Recurring matching is minute-granular, so any
/// value above 60 can skip or double-fire occurrences.
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Top-level config (nudge.toml + NUDGE_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NudgeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub line: LineConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// LINE Messaging API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Channel secret — HMAC key for webhook signature verification.
    pub channel_secret: String,
    /// Channel access token — bearer token for push/reply calls.
    pub channel_access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Seconds between sweep cycles. Must stay <= 60 for the
    /// at-most-once-per-minute recurring guarantee to hold.
    #[serde(default = "default_sweep_interval")]
    pub interval_secs: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

impl NudgeConfig {
    /// Load from `config_path` (or `~/.nudge/nudge.toml`) merged with
    /// `NUDGE_*` environment overrides.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: NudgeConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("NUDGE_").split("_"))
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        if config.line.channel_secret.is_empty() {
            return Err(ConfigError::Missing("line.channel_secret"));
        }
        if config.line.channel_access_token.is_empty() {
            return Err(ConfigError::Missing("line.channel_access_token"));
        }
        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.nudge/nudge.toml", home)
}

fn default_db_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.nudge/nudge.db", home)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_sweep_interval() -> u64 {
    DEFAULT_SWEEP_INTERVAL_SECS
}
