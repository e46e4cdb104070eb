//! Skill launch.

use tracing::info;

use super::SKILL_NAME;
use crate::dispatch::{HandlerInput, RequestHandler, ResponseBuilder};
use crate::envelope::Response;
use crate::envelope::request::request_types;
use crate::error::SkillError;

pub const WELCOME_MESSAGE: &str = "Welcome to the Pager Karaoke Device skill! \
     You can say, show me pager, show me karaoke, or show me device information!";

pub const LAUNCH: RequestHandler = RequestHandler {
    name: "launch",
    can_handle,
    handle,
};

fn can_handle(input: &HandlerInput<'_>) -> bool {
    input.is_request_type(request_types::LAUNCH)
}

fn handle(_input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    info!("In LaunchRequest");

    Ok(ResponseBuilder::new()
        .speak(WELCOME_MESSAGE)
        .ask(WELCOME_MESSAGE)
        .simple_card(SKILL_NAME, WELCOME_MESSAGE)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::*;

    #[test]
    fn accepts_launch_only() {
        let docs = shipped_documents();
        let env = launch();
        assert!(can_handle(&HandlerInput::new(&env, &docs)));
        let env = intent("PagerIntent");
        assert!(!can_handle(&HandlerInput::new(&env, &docs)));
    }

    #[test]
    fn welcome_is_spoken_and_reprompted() {
        let docs = shipped_documents();
        let env = launch();
        let response = handle(&HandlerInput::new(&env, &docs)).unwrap();

        let expected = format!("<speak>{WELCOME_MESSAGE}</speak>");
        assert_eq!(response.speech_ssml(), Some(expected.as_str()));
        assert_eq!(response.reprompt.unwrap().output_speech.text(), expected);
        assert!(response.directives.is_empty());
        match response.card {
            Some(crate::envelope::Card::Simple { title, content }) => {
                assert_eq!(title, "Pager Karaoke");
                assert_eq!(content, WELCOME_MESSAGE);
            }
            None => panic!("Expected a card"),
        }
    }
}
