//! Device information: tells the user which viewport profile they are on.

use std::collections::BTreeMap;

use tracing::info;

use crate::apl::{DataSource, Directive, Transformer, TransformerType, documents};
use crate::dispatch::{HandlerInput, RequestHandler, ResponseBuilder};
use crate::envelope::Response;
use crate::error::SkillError;
use crate::viewport::ViewportProfile;

pub const DEVICE: RequestHandler = RequestHandler {
    name: "device",
    can_handle: |input| input.is_intent_name("DeviceIntent"),
    handle,
};

/// Spoken name of a profile. Profiles without a phrase are "echo device!".
pub fn device_phrase(profile: ViewportProfile) -> &'static str {
    match profile {
        ViewportProfile::HubLandscapeLarge => "hub landscape large",
        ViewportProfile::HubLandscapeMedium => "hub landscape medium",
        ViewportProfile::HubRoundSmall => "hub round small",
        ViewportProfile::TvLandscapeXlarge => "tv landscape extra large",
        ViewportProfile::MobileLandscapeSmall => "mobile landscape small",
        _ => "echo device!",
    }
}

fn handle(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let profile = input.viewport_profile();
    info!(profile = %profile, "In DeviceIntent");

    let builder = ResponseBuilder::new().speak(format!(
        "This device is a {}",
        device_phrase(profile)
    ));
    if !input.supports_apl() {
        return Ok(builder.build());
    }

    let datasources = BTreeMap::from([(
        "deviceTemplateData".to_string(),
        DataSource::object()
            .with_object_id("deviceSample")
            .with_property("deviceName", profile.as_str())
            .with_property("hintString", "try and buy more devices!")
            .with_transformer(Transformer::new("hintString", TransformerType::TextToHint)),
    )]);

    Ok(builder
        .add_directive(Directive::RenderDocument {
            token: None,
            document: input.documents.load(documents::DEVICES)?,
            datasources,
        })
        .build())
}
