//! Request dispatch: handler input, response builder and the intent router.

pub mod builder;
pub mod handler_input;
pub mod router;

pub use builder::ResponseBuilder;
pub use handler_input::HandlerInput;
pub use router::{RequestHandler, SkillRouter, SkillRouterBuilder};
