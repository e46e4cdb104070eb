//! Outbound response envelope.

use serde::{Deserialize, Serialize};

use crate::apl::Directive;

/// Envelope returned to the voice platform for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default)]
    pub session_attributes: serde_json::Map<String, serde_json::Value>,
    pub response: Response,
}

impl ResponseEnvelope {
    pub fn new(
        response: Response,
        session_attributes: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes,
            response,
        }
    }
}

/// A finalized response. Built with [`crate::dispatch::ResponseBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl Response {
    /// Whether the conversation stays open for another user turn.
    pub fn keeps_session_open(&self) -> bool {
        self.should_end_session == Some(false)
    }

    /// The SSML of the spoken output, if any.
    pub fn speech_ssml(&self) -> Option<&str> {
        self.output_speech.as_ref().map(OutputSpeech::text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
    #[serde(rename = "PlainText")]
    PlainText { text: String },
}

impl OutputSpeech {
    /// Wrap `text` in a single `<speak>` element. An existing wrapper is trimmed first.
    pub fn ssml(text: &str) -> Self {
        let trimmed = text.trim();
        let inner = trimmed
            .strip_prefix("<speak>")
            .and_then(|rest| rest.strip_suffix("</speak>"))
            .unwrap_or(trimmed);
        Self::Ssml {
            ssml: format!("<speak>{inner}</speak>"),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Ssml { ssml } => ssml,
            Self::PlainText { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Companion-app card summarising the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

impl Card {
    pub fn title(&self) -> &str {
        match self {
            Self::Simple { title, .. } => title,
        }
    }
}
