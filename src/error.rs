//! Error types for the Pager Karaoke skill.

/// Top-level error type for the skill service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Skill error: {0}")]
    Skill(#[from] SkillError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while handling a single request envelope.
///
/// Anything raised by a handler action is swallowed by the router and turned
/// into the fallback response. Only envelope-level checks (`SkillIdMismatch`,
/// `StaleRequest`) reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("No handler can handle {request_type} request (intent: {})", .intent.as_deref().unwrap_or("none"))]
    UnhandledRequest {
        request_type: String,
        intent: Option<String>,
    },

    #[error("Failed to load APL document {name}: {reason}")]
    Document { name: String, reason: String },

    #[error("Skill ID verification failed: expected {expected}, got {}", .actual.as_deref().unwrap_or("none"))]
    SkillIdMismatch {
        expected: String,
        actual: Option<String>,
    },

    #[error("Request is {age_secs}s old, tolerance is {tolerance_secs}s")]
    StaleRequest { age_secs: i64, tolerance_secs: u64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the skill service.
pub type Result<T> = std::result::Result<T, Error>;
