//! # Calculator Engine
//!
//! The state machine behind the calculator. It owns three pieces of state:
//!
//! - the [`InputBuffer`] holding the number being typed
//! - an optional [`PendingOperation`] (captured left operand and operator)
//! - the [`EquationLine`] describing the current or last computation
//!
//! and exposes one method per user intent. Shells hold a single `Calculator`
//! value, feed it intents one at a time, and render [`Calculator::input_text`]
//! and [`Calculator::equation_text`].
//!
//! ## States
//!
//! ```text
//!            choose_operator            evaluate (ok)
//!   Empty ------------------> LeftCaptured ----------> Evaluated
//!                              ^   |  ^                    |
//!          choose_operator     |   |  +--------------------+
//!          (overwrite) --------+   |       choose_operator (chaining)
//!                                  | evaluate (arithmetic error)
//!                                  v
//!                               Errored --choose_operator (fresh left)--> LeftCaptured
//!
//!   clear: any state -> Empty
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::Calculator;
//! use calc_core::operator::Operator;
//!
//! let mut calc = Calculator::new();
//! for ch in "123".chars() {
//!     calc.enter(ch);
//! }
//! calc.choose_operator(Operator::Add)?;
//! calc.enter('4');
//! let result = calc.evaluate()?;
//!
//! assert_eq!(result, 127.0);
//! assert_eq!(calc.equation_text(), "123 + 4 = 127");
//! assert_eq!(calc.input_text(), "");
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equation::EquationLine;
use crate::errors::{CalcError, CalcResult, OperandSide};
use crate::input::InputBuffer;
use crate::intent::Intent;
use crate::operator::Operator;
use crate::settings::EngineSettings;

/// Outer state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// Nothing captured yet (initial or cleared)
    #[default]
    Empty,
    /// Left operand and operator captured, right operand being typed
    LeftCaptured,
    /// Last evaluation succeeded; its result is the pending left operand
    Evaluated,
    /// Last evaluation failed; a fresh left operand is required
    Errored,
}

/// Captured left operand and operator awaiting a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub left: f64,
    pub operator: Operator,
}

/// Read-only projection handed to shells after each intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Live input buffer text
    pub input: String,
    /// Rendered equation line
    pub equation: String,
    pub state: EngineState,
}

/// Calculator state machine.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    settings: EngineSettings,
    input: InputBuffer,
    pending: Option<PendingOperation>,
    equation: EquationLine,
    state: EngineState,
}

impl Calculator {
    /// Create a calculator with default settings
    pub fn new() -> Self {
        Calculator::default()
    }

    /// Create a calculator that renders with the given settings
    pub fn with_settings(settings: EngineSettings) -> Self {
        Calculator {
            settings,
            ..Calculator::default()
        }
    }

    /// Append a digit or `.` to the input buffer.
    ///
    /// Keystrokes that would not leave a valid partial number (a second `.`,
    /// anything that is not a digit) are ignored. Returns the buffer text.
    pub fn enter(&mut self, ch: char) -> &str {
        if !self.input.push(ch) {
            debug!(key = %ch, input = %self.input, "ignored keystroke");
        }
        self.input.as_str()
    }

    /// Choose the operator for the pending operation.
    ///
    /// With no pending operation the input buffer becomes the left operand.
    /// With one already pending (right after an evaluation, or when an
    /// operator is pressed twice) only the operator is replaced: the captured
    /// left operand is kept and whatever was typed since is discarded.
    ///
    /// # Errors
    ///
    /// `MissingOperand` when no operation is pending and the buffer does not
    /// hold a number. State is left unchanged.
    pub fn choose_operator(&mut self, operator: Operator) -> CalcResult<()> {
        let left = match self.pending {
            Some(pending) => {
                if !self.input.is_empty() {
                    debug!(discarded = %self.input, "operator overwrite discards typed input");
                }
                pending.left
            }
            None => match self.input.value() {
                Some(value) => value,
                None => {
                    debug!(input = %self.input, "operator chosen without left operand");
                    return Err(CalcError::missing_operand(OperandSide::Left));
                }
            },
        };

        self.pending = Some(PendingOperation { left, operator });
        self.input.clear();
        self.equation = EquationLine::Pending { left, operator };
        self.state = EngineState::LeftCaptured;
        debug!(left, operator = operator.name(), "left operand captured");
        Ok(())
    }

    /// Evaluate the pending operation against the input buffer.
    ///
    /// On success the result becomes the new left operand (the operator is
    /// kept), so choosing an operator immediately chains from it.
    ///
    /// # Errors
    ///
    /// * `MissingOperand` - nothing pending or the buffer holds no number;
    ///   state is left unchanged
    /// * `DivisionByZero`, `Overflow`, `Domain` - the equation line shows the
    ///   failed equation and the pending operation is dropped
    pub fn evaluate(&mut self) -> CalcResult<f64> {
        let (pending, right) = match (self.pending, self.input.value()) {
            (Some(pending), Some(right)) => (pending, right),
            _ => {
                debug!(input = %self.input, "evaluate without right operand");
                return Err(CalcError::missing_operand(OperandSide::Right));
            }
        };

        let PendingOperation { left, operator } = pending;
        self.input.clear();

        match operator.apply(left, right) {
            Ok(result) => {
                self.equation = EquationLine::Evaluated {
                    left,
                    operator,
                    right,
                    result,
                };
                self.pending = Some(PendingOperation { left: result, operator });
                self.state = EngineState::Evaluated;
                debug!(left, right, result, operator = operator.name(), "evaluated");
                Ok(result)
            }
            Err(err) => {
                self.equation = EquationLine::Failed { left, operator, right };
                self.pending = None;
                self.state = EngineState::Errored;
                debug!(left, right, operator = operator.name(), error = %err, "evaluation failed");
                Err(err)
            }
        }
    }

    /// Reset input, pending operation and equation line.
    pub fn clear(&mut self) {
        self.input.clear();
        self.pending = None;
        self.equation = EquationLine::Initial;
        self.state = EngineState::Empty;
        debug!("cleared");
    }

    /// Remove the last typed character. No-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    /// Negate the number in the buffer. No-op when it holds no number.
    pub fn invert_sign(&mut self) {
        if !self.input.negate() {
            debug!(input = %self.input, "ignored sign inversion");
        }
    }

    /// Dispatch an intent and return the resulting projection.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`choose_operator`](Self::choose_operator)
    /// and [`evaluate`](Self::evaluate). The engine has already settled into
    /// its post-failure state when the error is returned.
    pub fn apply(&mut self, intent: Intent) -> CalcResult<Snapshot> {
        match intent {
            Intent::Digit(ch) => {
                self.enter(ch);
            }
            Intent::Operator(operator) => self.choose_operator(operator)?,
            Intent::Evaluate => {
                self.evaluate()?;
            }
            Intent::Clear => self.clear(),
            Intent::Backspace => self.backspace(),
            Intent::InvertSign => self.invert_sign(),
        }
        Ok(self.snapshot())
    }

    /// Text of the number being typed
    pub fn input_text(&self) -> &str {
        self.input.as_str()
    }

    /// Rendered equation line
    pub fn equation_text(&self) -> String {
        self.equation.render(&self.settings)
    }

    pub fn equation(&self) -> &EquationLine {
        &self.equation
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Both projections plus the outer state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            input: self.input_text().to_string(),
            equation: self.equation_text(),
            state: self.state,
        }
    }
}
