//! # Intents and Key Mapping
//!
//! An [`Intent`] is one discrete user action. Shells translate their own
//! input events into intents and hand them to
//! [`Calculator::apply`](crate::engine::Calculator::apply).
//!
//! [`Intent::from_key`] provides the keyboard layout of the desktop
//! calculator so every shell maps keys the same way:
//!
//! | Key | Intent |
//! |---|---|
//! | `0`-`9`, `.` | `Digit` |
//! | `+` `-` `*` `/` `^` (and `− × ÷`) | `Operator` |
//! | `p` / `P` | `Operator(^)` |
//! | `=`, Enter | `Evaluate` |
//! | Backspace, Delete | `Backspace` |
//! | Escape, `c` / `C` | `Clear` |
//! | `n` / `N` | `InvertSign` |

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Intent {
    /// A digit or decimal point
    Digit(char),
    Operator(Operator),
    Evaluate,
    Clear,
    Backspace,
    InvertSign,
}

/// A raw key press as a shell sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Escape,
}

/// Character keys that are not digits
static CHAR_KEYS: Lazy<HashMap<char, Intent>> = Lazy::new(|| {
    let mut keys = HashMap::new();
    for symbol in ['+', '-', '*', '/', '^', '\u{2212}', '\u{00D7}', '\u{00F7}'] {
        if let Some(op) = Operator::from_symbol(symbol) {
            keys.insert(symbol, Intent::Operator(op));
        }
    }
    keys.insert('p', Intent::Operator(Operator::Power));
    keys.insert('P', Intent::Operator(Operator::Power));
    keys.insert('=', Intent::Evaluate);
    keys.insert('n', Intent::InvertSign);
    keys.insert('N', Intent::InvertSign);
    keys.insert('c', Intent::Clear);
    keys.insert('C', Intent::Clear);
    keys
});

impl Intent {
    /// Map a key press to an intent. Unmapped keys yield `None`.
    pub fn from_key(key: KeyInput) -> Option<Intent> {
        match key {
            KeyInput::Enter => Some(Intent::Evaluate),
            KeyInput::Backspace | KeyInput::Delete => Some(Intent::Backspace),
            KeyInput::Escape => Some(Intent::Clear),
            KeyInput::Char(ch) if ch.is_ascii_digit() || ch == '.' => Some(Intent::Digit(ch)),
            KeyInput::Char(ch) => CHAR_KEYS.get(&ch).copied(),
        }
    }

    /// Map every character of `keys` to intents, skipping unmapped ones.
    pub fn from_keys(keys: &str) -> Vec<Intent> {
        keys.chars()
            .filter_map(|ch| Intent::from_key(KeyInput::Char(ch)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        assert_eq!(Intent::from_key(KeyInput::Char('7')), Some(Intent::Digit('7')));
        assert_eq!(Intent::from_key(KeyInput::Char('.')), Some(Intent::Digit('.')));
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(
            Intent::from_key(KeyInput::Char('p')),
            Some(Intent::Operator(Operator::Power))
        );
        assert_eq!(
            Intent::from_key(KeyInput::Char('\u{00F7}')),
            Some(Intent::Operator(Operator::Divide))
        );
        assert_eq!(
            Intent::from_key(KeyInput::Char('-')),
            Some(Intent::Operator(Operator::Subtract))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(Intent::from_key(KeyInput::Enter), Some(Intent::Evaluate));
        assert_eq!(Intent::from_key(KeyInput::Char('=')), Some(Intent::Evaluate));
        assert_eq!(Intent::from_key(KeyInput::Delete), Some(Intent::Backspace));
        assert_eq!(Intent::from_key(KeyInput::Escape), Some(Intent::Clear));
        assert_eq!(Intent::from_key(KeyInput::Char('N')), Some(Intent::InvertSign));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(Intent::from_key(KeyInput::Char(' ')), None);
        assert_eq!(Intent::from_key(KeyInput::Char('q')), None);
        assert_eq!(Intent::from_key(KeyInput::Char('%')), None);
    }

    #[test]
    fn test_from_keys() {
        let intents = Intent::from_keys("12 + 3=");
        assert_eq!(
            intents,
            vec![
                Intent::Digit('1'),
                Intent::Digit('2'),
                Intent::Operator(Operator::Add),
                Intent::Digit('3'),
                Intent::Evaluate,
            ]
        );
    }

    #[test]
    fn test_intent_serialization() {
        let json = serde_json::to_string(&Intent::Operator(Operator::Multiply)).unwrap();
        assert_eq!(json, r#"{"type":"Operator","value":"*"}"#);

        let roundtrip: Intent = serde_json::from_str(r#"{"type":"Evaluate"}"#).unwrap();
        assert_eq!(roundtrip, Intent::Evaluate);
    }
}
