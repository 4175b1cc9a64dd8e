//! Data models for Shiftboard

mod conversation;
mod message;
mod shift;

pub use conversation::*;
pub use message::*;
pub use shift::*;
