//! Shiftboard Core Library
//!
//! Chat models with their JSON wire contract, display formatting, and the
//! shift card projection used by the Shiftboard mobile screens.

pub mod card;
pub mod decode;
pub mod error;
pub mod format;
pub mod models;

pub use card::{
    Button, ButtonStyle, Capability, CardAction, CardView, DetailItem, Fragment, Icon, ShiftCard,
};
pub use error::{DecodeError, Result};
pub use models::*;
