//! The default button grid.

use std::fmt::Write;

use super::Action;

/// A keypad button: the glyph it shows and what pressing it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
}

impl Button {
    const fn new(label: &'static str, action: Action) -> Self {
        Self { label, action }
    }
}

/// Buttons in row-major order, four per row.
static KEYPAD: [[Button; 4]; 5] = [
    [
        Button::new("C", Action::Clear),
        Button::new("⌫", Action::DeleteLast),
        Button::new("(", Action::Append('(')),
        Button::new(")", Action::Append(')')),
    ],
    [
        Button::new("7", Action::Append('7')),
        Button::new("8", Action::Append('8')),
        Button::new("9", Action::Append('9')),
        Button::new("÷", Action::Append('/')),
    ],
    [
        Button::new("4", Action::Append('4')),
        Button::new("5", Action::Append('5')),
        Button::new("6", Action::Append('6')),
        Button::new("×", Action::Append('*')),
    ],
    [
        Button::new("1", Action::Append('1')),
        Button::new("2", Action::Append('2')),
        Button::new("3", Action::Append('3')),
        Button::new("−", Action::Append('-')),
    ],
    [
        Button::new("0", Action::Append('0')),
        Button::new(".", Action::Append('.')),
        Button::new("=", Action::Evaluate),
        Button::new("+", Action::Append('+')),
    ],
];

/// The default keypad, row by row.
pub fn default_keypad() -> &'static [[Button; 4]] {
    &KEYPAD
}

/// Find the button showing `label`.
pub fn button_for_label(label: &str) -> Option<&'static Button> {
    KEYPAD.iter().flatten().find(|b| b.label == label)
}

/// Render the keypad as a text grid.
pub fn render_keypad() -> String {
    let mut out = String::new();
    for row in default_keypad() {
        let cells: Vec<String> = row.iter().map(|b| format!("[ {} ]", b.label)).collect();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}
