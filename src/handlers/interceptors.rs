//! Request/response logging interceptors, enabled with `PAGER_KARAOKE_LOG_ENVELOPES`.

use tracing::debug;

use crate::dispatch::HandlerInput;
use crate::envelope::Response;

pub fn log_request(input: &HandlerInput<'_>) {
    match serde_json::to_string(&input.envelope.request) {
        Ok(json) => debug!(request = %json, "Skill request"),
        Err(e) => debug!(error = %e, "Skill request (unserializable)"),
    }
}

pub fn log_response(_input: &HandlerInput<'_>, response: &Response) {
    match serde_json::to_string(response) {
        Ok(json) => debug!(response = %json, "Skill response"),
        Err(e) => debug!(error = %e, "Skill response (unserializable)"),
    }
}
