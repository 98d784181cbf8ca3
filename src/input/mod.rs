//! Input mapping from keyboard keys and keypad buttons to engine actions.

mod action;
mod keypad;

pub use action::Action;
pub use keypad::{Button, button_for_label, default_keypad, render_keypad};
