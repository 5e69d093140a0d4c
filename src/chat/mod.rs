//! Chat assistant: append-only message log plus the keyword-matched
//! canned-response engine.

pub mod message;
pub mod responder;
pub mod session;

pub use message::{ChatMessage, Sender};
pub use responder::{ResponseMatcher, ResponseRule, SUGGESTED_QUERIES};
pub use session::{ChatSession, ChatSnapshot, GREETING};
