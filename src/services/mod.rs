//! External service integrations: the chain transport and the alert sink.

pub mod notification;
pub use notification::*;

pub mod provider;
pub use provider::*;
