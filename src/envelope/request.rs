//! Inbound request envelope.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// One inbound voice/display interaction as delivered by the voice platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Context,
    pub request: Request,
}

impl RequestEnvelope {
    /// Application (skill) id, preferring the session copy over the context copy.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .or(self.context.system.as_ref().and_then(|s| s.application.as_ref()))
            .map(|a| a.application_id.as_str())
    }

    /// Session attributes to echo back in the response envelope.
    pub fn session_attributes(&self) -> serde_json::Map<String, serde_json::Value> {
        self.session
            .as_ref()
            .map(|s| s.attributes.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    #[serde(default)]
    pub new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

/// Device and session context attached to every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemState>,
    /// `None` when absent or unreadable; an odd viewport never rejects the envelope.
    #[serde(
        rename = "Viewport",
        default,
        deserialize_with = "lenient_viewport",
        skip_serializing_if = "Option::is_none"
    )]
    pub viewport: Option<ViewportState>,
}

fn lenient_viewport<'de, D>(deserializer: D) -> Result<Option<ViewportState>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(viewport) => Ok(Some(viewport)),
        Err(e) => {
            debug!(error = %e, "Ignoring unreadable viewport");
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub device_id: String,
    /// Interface name → interface-specific descriptor (e.g. `Alexa.Presentation.APL`).
    #[serde(default)]
    pub supported_interfaces: HashMap<String, serde_json::Value>,
}

/// Screen characteristics of the requesting device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    #[serde(default)]
    pub shape: Shape,
    #[serde(default)]
    pub pixel_width: u32,
    #[serde(default)]
    pub pixel_height: u32,
    #[serde(default)]
    pub current_pixel_width: u32,
    #[serde(default)]
    pub current_pixel_height: u32,
    #[serde(default)]
    pub dpi: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experiences: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    Round,
    Rectangle,
    /// Any shape this skill has no profile for.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Request type tags this skill routes on.
pub mod request_types {
    pub const LAUNCH: &str = "LaunchRequest";
    pub const INTENT: &str = "IntentRequest";
    pub const SESSION_ENDED: &str = "SessionEndedRequest";
}

/// The request body. `type` is the discriminant; the optional fields are only
/// present for the request types that carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Intent requests only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<String>,
    /// Session-ended requests only: `USER_INITIATED`, `ERROR` or `EXCEEDED_MAX_REPROMPTS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SessionEndedError>,
}

impl Request {
    pub fn is_type(&self, request_type: &str) -> bool {
        self.request_type == request_type
    }

    /// Intent name, for intent requests only.
    pub fn intent_name(&self) -> Option<&str> {
        if !self.is_type(request_types::INTENT) {
            return None;
        }
        self.intent.as_ref().map(|i| i.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub slots: HashMap<String, Slot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEndedError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}
