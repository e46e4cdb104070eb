//! Catch-all exception handler.

use tracing::error;

use super::{EXCEPTION_MESSAGE, HELP_REPROMPT};
use crate::dispatch::{HandlerInput, ResponseBuilder};
use crate::envelope::Response;
use crate::error::SkillError;

/// Log the failure and apologise. The session stays open so the user can retry.
pub fn catch_all(input: &HandlerInput<'_>, err: &SkillError) -> Response {
    error!(
        error = %err,
        request_id = %input.envelope.request.request_id,
        request_type = input.request_type(),
        "Request handling failed"
    );

    ResponseBuilder::new()
        .speak(EXCEPTION_MESSAGE)
        .ask(HELP_REPROMPT)
        .build()
}
