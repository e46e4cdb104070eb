//! Built-in intents: help, cancel/stop, and session end.

use tracing::info;

use super::{HELP_MESSAGE, HELP_REPROMPT, SKILL_NAME, STOP_MESSAGE};
use crate::dispatch::{HandlerInput, RequestHandler, ResponseBuilder};
use crate::envelope::Response;
use crate::envelope::request::request_types;
use crate::error::SkillError;

pub const HELP: RequestHandler = RequestHandler {
    name: "help",
    can_handle: |input| input.is_intent_name("AMAZON.HelpIntent"),
    handle: handle_help,
};

pub const CANCEL_OR_STOP: RequestHandler = RequestHandler {
    name: "cancel_or_stop",
    can_handle: |input| {
        input.is_intent_name("AMAZON.CancelIntent") || input.is_intent_name("AMAZON.StopIntent")
    },
    handle: handle_cancel_or_stop,
};

pub const SESSION_ENDED: RequestHandler = RequestHandler {
    name: "session_ended",
    can_handle: |input| input.is_request_type(request_types::SESSION_ENDED),
    handle: handle_session_ended,
};

fn handle_help(_input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    info!("In HelpIntent");

    Ok(ResponseBuilder::new()
        .speak(HELP_MESSAGE)
        .ask(HELP_REPROMPT)
        .simple_card(SKILL_NAME, HELP_MESSAGE)
        .build())
}

fn handle_cancel_or_stop(_input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    info!("In CancelOrStopIntent");

    Ok(ResponseBuilder::new().speak(STOP_MESSAGE).build())
}

fn handle_session_ended(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let request = &input.envelope.request;
    info!(
        reason = request.reason.as_deref().unwrap_or("unknown"),
        error = request.error.as_ref().map(|e| e.message.as_str()).unwrap_or(""),
        "Session ended"
    );

    Ok(ResponseBuilder::new().build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::*;

    #[test]
    fn help_reprompts_with_card() {
        let docs = shipped_documents();
        let env = intent("AMAZON.HelpIntent");
        let input = HandlerInput::new(&env, &docs);
        assert!((HELP.can_handle)(&input));

        let response = (HELP.handle)(&input).unwrap();
        assert_eq!(
            response.speech_ssml(),
            Some(format!("<speak>{HELP_MESSAGE}</speak>").as_str())
        );
        assert!(response.keeps_session_open());
        assert_eq!(response.card.unwrap().title(), SKILL_NAME);
    }

    #[test]
    fn cancel_and_stop_both_say_goodbye() {
        let docs = shipped_documents();
        for name in ["AMAZON.CancelIntent", "AMAZON.StopIntent"] {
            let env = intent(name);
            let input = HandlerInput::new(&env, &docs);
            assert!((CANCEL_OR_STOP.can_handle)(&input), "{name} not accepted");

            let response = (CANCEL_OR_STOP.handle)(&input).unwrap();
            assert_eq!(response.speech_ssml(), Some("<speak>Goodbye!</speak>"));
            assert!(!response.keeps_session_open());
        }
    }

    #[test]
    fn help_does_not_take_stop() {
        let docs = shipped_documents();
        let env = intent("AMAZON.StopIntent");
        assert!(!(HELP.can_handle)(&HandlerInput::new(&env, &docs)));
    }

    #[test]
    fn session_ended_returns_empty_response() {
        let docs = shipped_documents();
        let env = envelope_with(
            serde_json::json!({
                "type": "SessionEndedRequest",
                "requestId": "req-end",
                "timestamp": "2019-01-10T12:00:00Z",
                "reason": "USER_INITIATED"
            }),
            None,
        );
        let input = HandlerInput::new(&env, &docs);
        assert!((SESSION_ENDED.can_handle)(&input));
        assert_eq!((SESSION_ENDED.handle)(&input).unwrap(), Response::default());
    }
}
