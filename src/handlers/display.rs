//! Pager and karaoke templates.
//!
//! Both render a document from disk and then drive one of its components with
//! an execute-commands directive addressed by the same token. Devices without
//! APL only get the speech.

use std::collections::BTreeMap;

use tracing::info;

use crate::apl::{Command, DataSource, Directive, HighlightMode, Transformer, TransformerType, documents};
use crate::dispatch::{HandlerInput, RequestHandler, ResponseBuilder};
use crate::envelope::Response;
use crate::error::SkillError;

pub const PAGER_TOKEN: &str = "pagerToken";
pub const PAGER_COMPONENT_ID: &str = "pagerComponentId";
/// Milliseconds each pager page stays on screen.
pub const PAGER_DURATION_MS: u64 = 5000;

pub const KARAOKE_TOKEN: &str = "karaokeToken";
pub const KARAOKE_COMPONENT_ID: &str = "karaokespeechtext";

const HINT: &str = "try the blue cheese!";

const KARAOKE_SSML: &str = "<speak>We’re excited to announce a new video training series from \
     A Cloud Guru on Alexa skill development. The free training series called Alexa Devs walks \
     new developers and non-developers through how to build Alexa skills from start to finish. \
     You’ll also learn how to enhance your skill using persistence, Speechcons, and SSML to \
     create more engaging voice experiences for customers. Check out the first episode on how \
     to build your first Alexa skill here.</speak>";

pub const PAGER: RequestHandler = RequestHandler {
    name: "pager",
    can_handle: |input| input.is_intent_name("PagerIntent"),
    handle: handle_pager,
};

pub const KARAOKE: RequestHandler = RequestHandler {
    name: "karaoke",
    can_handle: |input| input.is_intent_name("KaraokeIntent"),
    handle: handle_karaoke,
};

fn handle_pager(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    info!("In PagerIntent");

    let builder = ResponseBuilder::new().speak("This is the pager template!");
    if !input.supports_apl() {
        return Ok(builder.build());
    }

    let datasources = BTreeMap::from([(
        "pagerTemplateData".to_string(),
        DataSource::object()
            .with_property("hintString", HINT)
            .with_transformer(Transformer::new("hintString", TransformerType::TextToHint)),
    )]);

    Ok(builder
        .add_directive(Directive::RenderDocument {
            token: Some(PAGER_TOKEN.to_string()),
            document: input.documents.load(documents::PAGER)?,
            datasources,
        })
        .add_directive(Directive::ExecuteCommands {
            token: PAGER_TOKEN.to_string(),
            commands: vec![Command::auto_page(PAGER_COMPONENT_ID, PAGER_DURATION_MS)],
        })
        .build())
}

fn handle_karaoke(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    info!("In KaraokeIntent");

    let builder = ResponseBuilder::new().speak("This is the karaoke template!");
    if !input.supports_apl() {
        return Ok(builder.build());
    }

    let datasources = BTreeMap::from([(
        "karaokeTemplateData".to_string(),
        DataSource::object()
            .with_object_id("karaokeSample")
            .with_property("karaokeSsml", KARAOKE_SSML)
            .with_property("hintString", HINT)
            .with_transformer(
                Transformer::new("karaokeSsml", TransformerType::SsmlToSpeech)
                    .with_output("karaokeSpeech"),
            )
            .with_transformer(
                Transformer::new("karaokeSsml", TransformerType::SsmlToText)
                    .with_output("karaokeText"),
            )
            .with_transformer(Transformer::new("hintString", TransformerType::TextToHint)),
    )]);

    Ok(builder
        .add_directive(Directive::RenderDocument {
            token: Some(KARAOKE_TOKEN.to_string()),
            document: input.documents.load(documents::KARAOKE)?,
            datasources,
        })
        .add_directive(Directive::ExecuteCommands {
            token: KARAOKE_TOKEN.to_string(),
            commands: vec![Command::speak_item(KARAOKE_COMPONENT_ID, HighlightMode::Line)],
        })
        .build())
}
