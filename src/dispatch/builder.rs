//! Incremental response construction.

use crate::apl::Directive;
use crate::envelope::{Card, OutputSpeech, Reprompt, Response};

/// Accumulates the optional parts of a [`Response`].
///
/// ```
/// use pager_karaoke::dispatch::ResponseBuilder;
///
/// let response = ResponseBuilder::new()
///     .speak("Hello")
///     .ask("Are you there?")
///     .build();
/// assert!(response.keeps_session_open());
/// ```
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spoken output. Text is wrapped in `<speak>` tags.
    pub fn speak(mut self, speech: impl AsRef<str>) -> Self {
        self.response.output_speech = Some(OutputSpeech::ssml(speech.as_ref()));
        self
    }

    /// Set the re-prompt and keep the session open for the user's answer.
    pub fn ask(mut self, reprompt: impl AsRef<str>) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(reprompt.as_ref()),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn simple_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.response.card = Some(Card::Simple {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// Append a directive. Directives are sent in the order they are added.
    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.response.directives.push(directive);
        self
    }

    pub fn should_end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}
