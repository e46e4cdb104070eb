//! Pager Karaoke: voice skill backend for smart displays.

pub mod apl;
pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod viewport;
