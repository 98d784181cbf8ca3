//! Key events mapped to engine actions.

/// A single thing the user asked the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a token to the expression.
    Append(char),
    /// Remove the last character.
    DeleteLast,
    /// Reset the expression.
    Clear,
    /// Evaluate the expression.
    Evaluate,
}

impl Action {
    /// Map a keyboard key name (as reported by the UI layer) to an action.
    ///
    /// Single printable keys use their character; named keys are `Enter`,
    /// `Backspace` and `Escape`. Unknown keys return `None` and should be
    /// ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Action::Evaluate),
            "Backspace" => Some(Action::DeleteLast),
            "Escape" => Some(Action::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Map a typed character to an action.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '+' | '-' | '*' | '/' | '.' | '(' | ')' => Some(Action::Append(c)),
            '=' => Some(Action::Evaluate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_and_operator_keys() {
        assert_eq!(Action::from_key("7"), Some(Action::Append('7')));
        assert_eq!(Action::from_key("*"), Some(Action::Append('*')));
        assert_eq!(Action::from_key("("), Some(Action::Append('(')));
        assert_eq!(Action::from_key("."), Some(Action::Append('.')));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(Action::from_key("Enter"), Some(Action::Evaluate));
        assert_eq!(Action::from_key("="), Some(Action::Evaluate));
        assert_eq!(Action::from_key("Backspace"), Some(Action::DeleteLast));
        assert_eq!(Action::from_key("Escape"), Some(Action::Clear));
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(Action::from_key("a"), None);
        assert_eq!(Action::from_key("Shift"), None);
        assert_eq!(Action::from_key("^"), None);
        assert_eq!(Action::from_key(""), None);
        assert_eq!(Action::from_key("12"), None);
    }
}
