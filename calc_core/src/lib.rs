//! # calc_core - Desktop Calculator Engine
//!
//! `calc_core` is the computational heart of Tally: the state machine that
//! tracks the number being typed, the pending left operand and operator, and
//! what happens on evaluate, clear, backspace, sign inversion and error.
//! Windowing, layout and theming live in the shell; the shell forwards
//! intents and renders two strings the engine produces.
//!
//! ## Design Philosophy
//!
//! - **Owned state**: one [`Calculator`] value per shell, no globals
//! - **Typed arithmetic**: operators map to functions, never to parsed text
//! - **Derived display**: the equation line is rendered from typed state
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Calculator, Intent};
//!
//! let mut calc = Calculator::new();
//! for intent in Intent::from_keys("3+4=") {
//!     calc.apply(intent)?;
//! }
//! assert_eq!(calc.equation_text(), "3 + 4 = 7");
//! # Ok::<(), calc_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The calculator state machine
//! - [`operator`] - The five binary operators and their arithmetic
//! - [`input`] - The input buffer for the number being typed
//! - [`equation`] - The derived equation line and number formatting
//! - [`intent`] - User intents and the keyboard mapping
//! - [`settings`] - Rendering settings
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings files with atomic saves

pub mod engine;
pub mod equation;
pub mod errors;
pub mod file_io;
pub mod input;
pub mod intent;
pub mod operator;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use engine::{Calculator, EngineState, PendingOperation, Snapshot};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_settings, save_settings};
pub use intent::{Intent, KeyInput};
pub use operator::Operator;
pub use settings::EngineSettings;
