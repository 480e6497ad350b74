//! Input event state.

pub mod keyboard;

pub use keyboard::{KeyState, KeyboardEvent, Modifiers, convert_key_event};
