//! # Binary Operators
//!
//! The five operators a calculator key can select. Each one maps to a typed
//! floating-point function with explicit zero-division and range checks, so
//! no equation text is ever parsed back into arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operator::Operator;
//!
//! let op = Operator::from_symbol('×').unwrap();
//! assert_eq!(op, Operator::Multiply);
//! assert_eq!(op.apply(6.0, 7.0).unwrap(), 42.0);
//! assert!(Operator::Divide.apply(5.0, 0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Binary operator applied between a left and a right operand.
///
/// Serializes as its ASCII symbol (`"+"`, `"-"`, `"*"`, `"/"`, `"^"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Operator; 5] = [
        Operator::Power,
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Parse an operator from either its ASCII or typographic symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' | '\u{2212}' => Some(Operator::Subtract),
            '*' | '\u{00D7}' => Some(Operator::Multiply),
            '/' | '\u{00F7}' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    /// ASCII symbol shown in the equation line
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
        }
    }

    /// Human-readable operator name
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
            Operator::Power => "power",
        }
    }

    /// Compute `left <op> right`.
    ///
    /// # Errors
    ///
    /// * `DivisionByZero` - `/` with a right operand of exactly zero, or `^`
    ///   raising zero to a negative power
    /// * `Overflow` - the result is infinite
    /// * `Domain` - the result is NaN (e.g. `(-8) ^ 0.5`)
    pub fn apply(&self, left: f64, right: f64) -> CalcResult<f64> {
        let result = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero { left });
                }
                left / right
            }
            Operator::Power => {
                // 0 ^ -n is 1 / 0 ^ n
                if left == 0.0 && right < 0.0 {
                    return Err(CalcError::DivisionByZero { left: 1.0 });
                }
                left.powf(right)
            }
        };

        if result.is_nan() {
            return Err(CalcError::domain(left, self.symbol(), right));
        }
        if result.is_infinite() {
            return Err(CalcError::overflow(left, self.symbol(), right));
        }
        Ok(result)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
