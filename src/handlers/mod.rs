//! The Pager Karaoke skill: registered handlers and the router that holds them.

pub mod builtin;
pub mod device;
pub mod display;
pub mod exception;
pub mod interceptors;
pub mod launch;

use crate::config::SkillConfig;
use crate::dispatch::{RequestHandler, SkillRouter};

pub const SKILL_NAME: &str = "Pager Karaoke";
pub const HELP_MESSAGE: &str =
    "You can say, show me pager, show me karaoke, or show me device information!";
pub const HELP_REPROMPT: &str =
    "You can say, show me pager, show me karaoke, or show me device information!";
pub const STOP_MESSAGE: &str = "Goodbye!";
pub const EXCEPTION_MESSAGE: &str = "Sorry, I can't understand the command. Please say again.";

/// Request handlers in dispatch order. Order matters: the first match wins.
pub const HANDLERS: &[RequestHandler] = &[
    launch::LAUNCH,
    display::PAGER,
    display::KARAOKE,
    device::DEVICE,
    builtin::HELP,
    builtin::CANCEL_OR_STOP,
    builtin::SESSION_ENDED,
];

/// Build the skill's router.
pub fn skill_router(config: &SkillConfig) -> SkillRouter {
    let mut builder = HANDLERS
        .iter()
        .fold(SkillRouter::builder(), |b, handler| b.add_request_handler(*handler))
        .exception_handler(exception::catch_all)
        .skill_id(config.skill_id.clone());

    if config.log_envelopes {
        builder = builder
            .add_request_interceptor(interceptors::log_request)
            .add_response_interceptor(interceptors::log_response);
    }
    builder.build()
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::dispatch::HandlerInput;

    #[test]
    fn handlers_are_registered_in_order() {
        let router = skill_router(&SkillConfig::default());
        assert_eq!(
            router.handler_names(),
            vec![
                "launch",
                "pager",
                "karaoke",
                "device",
                "help",
                "cancel_or_stop",
                "session_ended"
            ]
        );
    }

    #[test]
    fn launch_speaks_welcome_with_card() {
        let router = skill_router(&SkillConfig::default());
        let docs = shipped_documents();
        let env = launch();

        let response = router.route(&HandlerInput::new(&env, &docs));
        assert_eq!(
            response.speech_ssml(),
            Some(format!("<speak>{}</speak>", launch::WELCOME_MESSAGE).as_str())
        );
        assert_eq!(response.card.as_ref().map(|c| c.title()), Some(SKILL_NAME));
        assert!(response.keeps_session_open());
    }

    #[test]
    fn unknown_intent_gets_apology_and_reprompt() {
        let router = skill_router(&SkillConfig::default());
        let docs = shipped_documents();
        let env = intent("OrderPizzaIntent");

        let response = router.route(&HandlerInput::new(&env, &docs));
        assert_eq!(
            response.speech_ssml(),
            Some(format!("<speak>{EXCEPTION_MESSAGE}</speak>").as_str())
        );
        assert_eq!(
            response.reprompt.unwrap().output_speech.text(),
            format!("<speak>{HELP_REPROMPT}</speak>")
        );
    }

    #[test]
    fn missing_documents_fall_back_to_apology() {
        let router = skill_router(&SkillConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let docs = crate::apl::DocumentStore::new(dir.path());
        let env = intent("PagerIntent");

        let response = router.route(&HandlerInput::new(&env, &docs));
        assert!(response.directives.is_empty());
        assert_eq!(
            response.speech_ssml(),
            Some(format!("<speak>{EXCEPTION_MESSAGE}</speak>").as_str())
        );
        assert!(response.keeps_session_open());
    }

    #[test]
    fn envelope_logging_is_opt_in() {
        let config = SkillConfig {
            log_envelopes: true,
            ..SkillConfig::default()
        };
        let router = skill_router(&config);
        let docs = shipped_documents();
        let env = intent("AMAZON.StopIntent");
        let response = router.route(&HandlerInput::new(&env, &docs));
        assert_eq!(response.speech_ssml(), Some("<speak>Goodbye!</speak>"));
    }
}
