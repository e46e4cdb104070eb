//! Per-request input handed to predicates and actions.

use crate::apl::DocumentStore;
use crate::envelope::RequestEnvelope;
use crate::envelope::request::request_types;
use crate::viewport::{self, ViewportProfile};

/// Borrowed view of one request plus the resources an action may need.
#[derive(Debug, Clone, Copy)]
pub struct HandlerInput<'a> {
    pub envelope: &'a RequestEnvelope,
    pub documents: &'a DocumentStore,
}

impl<'a> HandlerInput<'a> {
    pub fn new(envelope: &'a RequestEnvelope, documents: &'a DocumentStore) -> Self {
        Self {
            envelope,
            documents,
        }
    }

    pub fn request_type(&self) -> &'a str {
        &self.envelope.request.request_type
    }

    pub fn intent_name(&self) -> Option<&'a str> {
        self.envelope.request.intent_name()
    }

    pub fn is_request_type(&self, request_type: &str) -> bool {
        self.envelope.request.is_type(request_type)
    }

    /// True for an intent request naming `name`.
    pub fn is_intent_name(&self, name: &str) -> bool {
        self.is_request_type(request_types::INTENT) && self.intent_name() == Some(name)
    }

    pub fn viewport_profile(&self) -> ViewportProfile {
        viewport::viewport_profile(self.envelope)
    }

    /// Whether the device can render APL directives.
    pub fn supports_apl(&self) -> bool {
        viewport::supports_apl(self.envelope)
    }
}
