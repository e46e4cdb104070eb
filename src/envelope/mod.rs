//! Request and response envelopes exchanged with the voice platform.

pub mod request;
pub mod response;

pub use request::{Request, RequestEnvelope, ViewportState, request_types};
pub use response::{Card, OutputSpeech, Reprompt, Response, ResponseEnvelope};
