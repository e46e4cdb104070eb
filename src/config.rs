//! Configuration types.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Skill service configuration.
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Address the HTTP endpoint binds to.
    pub bind_addr: String,
    /// HTTP listen port.
    pub port: u16,
    /// Directory holding the APL documents (`pager.json`, `karaoke.json`, `devices.json`).
    pub documents_dir: PathBuf,
    /// When set, requests from any other application id are rejected.
    pub skill_id: Option<String>,
    /// When set, requests older than this many seconds are rejected.
    pub timestamp_tolerance_secs: Option<u64>,
    /// Register the request/response logging interceptors.
    pub log_envelopes: bool,
    /// Also write daily-rolling log files into this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            documents_dir: PathBuf::from("documents"),
            skill_id: None,
            timestamp_tolerance_secs: None,
            log_envelopes: false,
            log_dir: None,
        }
    }
}

impl SkillConfig {
    /// Build config from `PAGER_KARAOKE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PAGER_KARAOKE_PORT") {
            Some(raw) => parse_value("PAGER_KARAOKE_PORT", &raw)?,
            None => defaults.port,
        };

        let timestamp_tolerance_secs = get("PAGER_KARAOKE_TIMESTAMP_TOLERANCE_SECS")
            .map(|raw| parse_value("PAGER_KARAOKE_TIMESTAMP_TOLERANCE_SECS", &raw))
            .transpose()?;

        let log_envelopes = match get("PAGER_KARAOKE_LOG_ENVELOPES") {
            Some(raw) => parse_flag("PAGER_KARAOKE_LOG_ENVELOPES", &raw)?,
            None => defaults.log_envelopes,
        };

        Ok(Self {
            bind_addr: get("PAGER_KARAOKE_BIND").unwrap_or(defaults.bind_addr),
            port,
            documents_dir: get("PAGER_KARAOKE_DOCUMENTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.documents_dir),
            skill_id: get("PAGER_KARAOKE_SKILL_ID"),
            timestamp_tolerance_secs,
            log_envelopes,
            log_dir: get("PAGER_KARAOKE_LOG_DIR").map(PathBuf::from),
        })
    }

    /// `host:port` string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("{raw:?}: {e}"),
    })
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{raw:?} is not a boolean"),
        }),
    }
}
