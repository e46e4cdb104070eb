//! Intent router: first-match dispatch over an immutable, ordered handler list.
//!
//! A request is offered to each registered handler in registration order; the
//! first whose predicate accepts it runs, and no other handler sees it. If the
//! action fails, or no predicate accepts the request, the exception handler
//! turns the error into a response. Errors never escape [`SkillRouter::route`].

use tracing::{debug, warn};

use super::handler_input::HandlerInput;
use crate::apl::DocumentStore;
use crate::envelope::{RequestEnvelope, Response, ResponseEnvelope};
use crate::error::SkillError;

/// Decides whether a handler accepts a request.
pub type Predicate = fn(&HandlerInput<'_>) -> bool;
/// Produces the response for an accepted request.
pub type Action = fn(&HandlerInput<'_>) -> Result<Response, SkillError>;
/// Converts a failure into a response. Must not fail itself.
pub type ExceptionAction = fn(&HandlerInput<'_>, &SkillError) -> Response;
/// Runs before dispatch, for every request.
pub type RequestInterceptor = fn(&HandlerInput<'_>);
/// Runs on a handler's response. Not run on exception-handler output.
pub type ResponseInterceptor = fn(&HandlerInput<'_>, &Response);

/// A (predicate, action) pair with a name for logs.
#[derive(Clone, Copy)]
pub struct RequestHandler {
    pub name: &'static str,
    pub can_handle: Predicate,
    pub handle: Action,
}

impl std::fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Immutable dispatch table built once at startup.
pub struct SkillRouter {
    handlers: Vec<RequestHandler>,
    exception_handler: ExceptionAction,
    request_interceptors: Vec<RequestInterceptor>,
    response_interceptors: Vec<ResponseInterceptor>,
    skill_id: Option<String>,
}

impl std::fmt::Debug for SkillRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillRouter")
            .field("handlers", &self.handler_names())
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .field("skill_id", &self.skill_id)
            .finish()
    }
}

impl SkillRouter {
    pub fn builder() -> SkillRouterBuilder {
        SkillRouterBuilder::default()
    }

    /// Registered handler names, in dispatch order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name).collect()
    }

    /// Dispatch one request. Always produces a response.
    ///
    /// Response interceptors only see responses produced by a handler; a
    /// failure goes straight from the exception handler to the caller.
    pub fn route(&self, input: &HandlerInput<'_>) -> Response {
        for interceptor in &self.request_interceptors {
            interceptor(input);
        }

        let response = match self.dispatch(input) {
            Ok(response) => response,
            Err(err) => return (self.exception_handler)(input, &err),
        };

        for interceptor in &self.response_interceptors {
            interceptor(input, &response);
        }
        response
    }

    fn dispatch(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        let handler = self
            .handlers
            .iter()
            .find(|h| (h.can_handle)(input))
            .ok_or_else(|| SkillError::UnhandledRequest {
                request_type: input.request_type().to_string(),
                intent: input.intent_name().map(String::from),
            })?;

        debug!(
            handler = handler.name,
            request_id = %input.envelope.request.request_id,
            "Dispatching request"
        );
        (handler.handle)(input)
    }

    /// Verify the envelope, route it and wrap the response in an envelope.
    ///
    /// Skill-id verification failures are returned to the caller rather than
    /// routed to the exception handler.
    pub fn invoke(
        &self,
        envelope: &RequestEnvelope,
        documents: &DocumentStore,
    ) -> Result<ResponseEnvelope, SkillError> {
        if let Some(expected) = &self.skill_id {
            let actual = envelope.application_id();
            if actual != Some(expected.as_str()) {
                warn!(
                    expected = %expected,
                    actual = actual.unwrap_or("none"),
                    "Rejected request for another skill"
                );
                return Err(SkillError::SkillIdMismatch {
                    expected: expected.clone(),
                    actual: actual.map(String::from),
                });
            }
        }

        let input = HandlerInput::new(envelope, documents);
        let response = self.route(&input);
        Ok(ResponseEnvelope::new(response, envelope.session_attributes()))
    }
}

/// Collects handlers in registration order.
#[derive(Default)]
pub struct SkillRouterBuilder {
    handlers: Vec<RequestHandler>,
    exception_handler: Option<ExceptionAction>,
    request_interceptors: Vec<RequestInterceptor>,
    response_interceptors: Vec<ResponseInterceptor>,
    skill_id: Option<String>,
}

impl SkillRouterBuilder {
    pub fn add_request_handler(mut self, handler: RequestHandler) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn add_request_interceptor(mut self, interceptor: RequestInterceptor) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn add_response_interceptor(mut self, interceptor: ResponseInterceptor) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Replace the exception handler. Defaults to an empty response.
    pub fn exception_handler(mut self, handler: ExceptionAction) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    /// Only accept envelopes addressed to this application id.
    pub fn skill_id(mut self, skill_id: Option<String>) -> Self {
        self.skill_id = skill_id;
        self
    }

    pub fn build(self) -> SkillRouter {
        SkillRouter {
            handlers: self.handlers,
            exception_handler: self.exception_handler.unwrap_or(empty_response),
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
            skill_id: self.skill_id,
        }
    }
}

fn empty_response(_input: &HandlerInput<'_>, err: &SkillError) -> Response {
    warn!(error = %err, "No exception handler registered");
    Response::default()
}
