//! # Equation Line
//!
//! The running summary shown above the input. It is derived data: the engine
//! stores the operands and outcome of the current computation and renders
//! text on demand, so nothing ever reads numbers back out of the display.
//!
//! Shapes:
//!
//! ```text
//! 0                      initial / cleared
//! 123 + ??               operator chosen, right operand pending
//! 123 + 4 = 127          evaluated
//! 5 / 0 = error          evaluation failed
//! ```

use serde::{Deserialize, Serialize};

use crate::operator::Operator;
use crate::settings::EngineSettings;

/// Derived equation display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EquationLine {
    #[default]
    Initial,
    Pending {
        left: f64,
        operator: Operator,
    },
    Evaluated {
        left: f64,
        operator: Operator,
        right: f64,
        result: f64,
    },
    Failed {
        left: f64,
        operator: Operator,
        right: f64,
    },
}

impl EquationLine {
    /// Render the line with the given settings.
    pub fn render(&self, settings: &EngineSettings) -> String {
        match *self {
            EquationLine::Initial => settings.initial_equation.clone(),
            EquationLine::Pending { left, operator } => {
                format!("{} {} {}", format_number(left, None), operator, settings.pending_marker)
            }
            EquationLine::Evaluated {
                left,
                operator,
                right,
                result,
            } => format!(
                "{} {} {} = {}",
                format_number(left, None),
                operator,
                format_number(right, None),
                format_number(result, settings.precision)
            ),
            EquationLine::Failed { left, operator, right } => format!(
                "{} {} {} = {}",
                format_number(left, None),
                operator,
                format_number(right, None),
                settings.error_text
            ),
        }
    }

    /// Result of the last successful evaluation, if this line shows one
    pub fn result(&self) -> Option<f64> {
        match self {
            EquationLine::Evaluated { result, .. } => Some(*result),
            _ => None,
        }
    }
}

impl std::fmt::Display for EquationLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&EngineSettings::default()))
    }
}

/// Format a number for display.
///
/// Without a precision the shortest text that round-trips is used, so whole
/// numbers show no fractional part. With a precision the value is rounded and
/// trailing zeros are trimmed. Negative zero renders as `0`.
pub fn format_number(value: f64, precision: Option<u8>) -> String {
    let text = match precision {
        Some(places) => {
            let fixed = format!("{:.*}", usize::from(places), value);
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                fixed
            }
        }
        None => value.to_string(),
    };

    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}
