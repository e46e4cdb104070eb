//! Alexa Presentation Language vocabulary: directives, data sources, documents.

pub mod directive;
pub mod document;

pub use directive::{
    Align, Command, DataSource, Directive, HighlightMode, Transformer, TransformerType,
};
pub use document::{DocumentStore, documents};
