//! APL directives, data sources and commands.
//!
//! Field names and type tags follow the APL wire format exactly; the
//! downstream renderer rejects anything else.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An instruction to the rendering runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Display `document`, filling its template slots from `datasources`.
    #[serde(rename = "Alexa.Presentation.APL.RenderDocument")]
    RenderDocument {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
        document: serde_json::Value,
        #[serde(default)]
        datasources: BTreeMap<String, DataSource>,
    },
    /// Run `commands` against the document rendered under `token`.
    #[serde(rename = "Alexa.Presentation.APL.ExecuteCommands")]
    ExecuteCommands { token: String, commands: Vec<Command> },
}

impl Directive {
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::RenderDocument { token, .. } => token.as_deref(),
            Self::ExecuteCommands { token, .. } => Some(token),
        }
    }
}

/// Named structured input merged into a document's template slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub properties: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transformers: Vec<Transformer>,
}

impl DataSource {
    /// An `object` data source with no properties.
    pub fn object() -> Self {
        Self {
            source_type: "object".to_string(),
            object_id: None,
            properties: serde_json::Map::new(),
            transformers: Vec::new(),
        }
    }

    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = Some(object_id.into());
        self
    }

    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_transformer(mut self, transformer: Transformer) -> Self {
        self.transformers.push(transformer);
        self
    }
}

/// A text transform applied to one property before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformer {
    pub input_path: String,
    /// Defaults to `input_path` on the renderer side when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
    pub transformer: TransformerType,
}

impl Transformer {
    pub fn new(input_path: impl Into<String>, transformer: TransformerType) -> Self {
        Self {
            input_path: input_path.into(),
            output_name: None,
            transformer,
        }
    }

    pub fn with_output(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = Some(output_name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformerType {
    /// SSML → speech audio the document can play.
    SsmlToSpeech,
    /// SSML → plain text for display.
    SsmlToText,
    /// Text → "Try, Alexa, ..." hint text.
    TextToHint,
    TextToSpeech,
}

/// A command addressed to a component of the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    AutoPage {
        component_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<u32>,
        /// Milliseconds each page stays on screen.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay: Option<u64>,
    },
    #[serde(rename_all = "camelCase")]
    SpeakItem {
        component_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        highlight_mode: Option<HighlightMode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        align: Option<Align>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum_dwell_time: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay: Option<u64>,
    },
}

impl Command {
    pub fn auto_page(component_id: impl Into<String>, duration_ms: u64) -> Self {
        Self::AutoPage {
            component_id: component_id.into(),
            count: None,
            duration: Some(duration_ms),
            delay: None,
        }
    }

    pub fn speak_item(component_id: impl Into<String>, highlight_mode: HighlightMode) -> Self {
        Self::SpeakItem {
            component_id: component_id.into(),
            highlight_mode: Some(highlight_mode),
            align: None,
            minimum_dwell_time: None,
            delay: None,
        }
    }

    pub fn component_id(&self) -> &str {
        match self {
            Self::AutoPage { component_id, .. } | Self::SpeakItem { component_id, .. } => {
                component_id
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightMode {
    /// Highlight each line as it is spoken (karaoke).
    Line,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    First,
    Center,
    Last,
    Visible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_document_wire_format() {
        let mut datasources = BTreeMap::new();
        datasources.insert(
            "pagerTemplateData".to_string(),
            DataSource::object()
                .with_property("hintString", "try the blue cheese!")
                .with_transformer(Transformer::new("hintString", TransformerType::TextToHint)),
        );
        let directive = Directive::RenderDocument {
            token: Some("pagerToken".into()),
            document: serde_json::json!({ "type": "APL", "version": "1.0" }),
            datasources,
        };

        let json = serde_json::to_value(&directive).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Alexa.Presentation.APL.RenderDocument",
                "token": "pagerToken",
                "document": { "type": "APL", "version": "1.0" },
                "datasources": {
                    "pagerTemplateData": {
                        "type": "object",
                        "properties": { "hintString": "try the blue cheese!" },
                        "transformers": [
                            { "inputPath": "hintString", "transformer": "textToHint" }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn render_document_without_token_omits_it() {
        let directive = Directive::RenderDocument {
            token: None,
            document: serde_json::json!({}),
            datasources: BTreeMap::new(),
        };
        let json = serde_json::to_value(&directive).unwrap();
        assert!(json.get("token").is_none());
        assert_eq!(directive.token(), None);
    }

    #[test]
    fn execute_commands_wire_format() {
        let directive = Directive::ExecuteCommands {
            token: "karaokeToken".into(),
            commands: vec![
                Command::speak_item("karaokespeechtext", HighlightMode::Line),
                Command::auto_page("pagerComponentId", 5000),
            ],
        };
        let json = serde_json::to_value(&directive).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Alexa.Presentation.APL.ExecuteCommands",
                "token": "karaokeToken",
                "commands": [
                    { "type": "SpeakItem", "componentId": "karaokespeechtext", "highlightMode": "line" },
                    { "type": "AutoPage", "componentId": "pagerComponentId", "duration": 5000 }
                ]
            })
        );
    }

    #[test]
    fn transformer_output_name_serialized_when_set() {
        let t = Transformer::new("karaokeSsml", TransformerType::SsmlToSpeech).with_output("karaokeSpeech");
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["outputName"], "karaokeSpeech");
        assert_eq!(json["transformer"], "ssmlToSpeech");
    }

    #[test]
    fn commands_parse_back_from_renderer_json() {
        let command: Command = serde_json::from_value(serde_json::json!({
            "type": "AutoPage",
            "componentId": "pager",
            "count": 2,
            "duration": 1000
        }))
        .unwrap();
        assert_eq!(command.component_id(), "pager");
        assert!(matches!(command, Command::AutoPage { count: Some(2), .. }));
    }
}
