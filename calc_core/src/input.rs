//! # Input Buffer
//!
//! The text of the number currently being typed. The buffer only ever holds
//! a prefix of a decimal number: an optional leading `-` (placed by sign
//! inversion, never typed), digits, and at most one `.`. Keystrokes that
//! would break that shape are refused rather than reported.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input::InputBuffer;
//!
//! let mut buffer = InputBuffer::new();
//! for ch in "1.5".chars() {
//!     buffer.push(ch);
//! }
//! assert!(!buffer.push('.'));
//! assert_eq!(buffer.as_str(), "1.5");
//! assert_eq!(buffer.value(), Some(1.5));
//! ```

use serde::{Deserialize, Serialize};

use crate::equation::format_number;

/// In-progress text of the number being entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputBuffer(String);

impl InputBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        InputBuffer(String::new())
    }

    /// Append a digit or decimal point.
    ///
    /// Returns `false` and leaves the buffer untouched when `ch` is not a
    /// digit or `.`, or when it would introduce a second `.`.
    pub fn push(&mut self, ch: char) -> bool {
        if !(ch.is_ascii_digit() || ch == '.') {
            return false;
        }
        if ch == '.' && self.0.contains('.') {
            return false;
        }
        self.0.push(ch);
        true
    }

    /// Remove the last character. Returns `false` on an empty buffer.
    pub fn backspace(&mut self) -> bool {
        self.0.pop().is_some()
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Current text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing has been typed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the buffer, if it holds a complete finite number.
    ///
    /// `""`, `"."` and `"-"` have no value. A digit string too long to
    /// represent as a finite `f64` has no value either.
    pub fn value(&self) -> Option<f64> {
        if !self.0.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Replace the text with the negation of its value.
    ///
    /// No-op (returns `false`) when the buffer has no value.
    pub fn negate(&mut self) -> bool {
        match self.value() {
            Some(value) => {
                self.0 = format_number(-value, None);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
