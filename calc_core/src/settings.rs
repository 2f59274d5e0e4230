//! # Engine Settings
//!
//! Presentation settings for the equation line. Settings never change the
//! arithmetic, only how the engine renders it. They serialize to a small JSON
//! file (see [`crate::file_io`]) wrapped with a schema version.
//!
//! ## Structure
//!
//! ```text
//! SettingsFile
//! ├── version: String (schema version for migration checks)
//! └── settings: EngineSettings
//!     ├── initial_equation ("0")
//!     ├── pending_marker   ("??")
//!     ├── error_text       ("error")
//!     └── precision        (None = shortest round-trip form)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::EngineSettings;
//!
//! let settings = EngineSettings {
//!     precision: Some(4),
//!     ..EngineSettings::default()
//! };
//! assert!(settings.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Largest accepted number of decimal places for result rounding
pub const MAX_PRECISION: u8 = 15;

/// Rendering settings for the equation line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Equation text before any operator is chosen and after clear
    pub initial_equation: String,

    /// Placeholder for the right operand while it is being typed
    pub pending_marker: String,

    /// Result text for an equation that failed
    pub error_text: String,

    /// Decimal places to round results to; `None` shows the shortest
    /// representation that round-trips
    pub precision: Option<u8>,
}

impl EngineSettings {
    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.initial_equation.trim().is_empty() {
            return Err(CalcError::invalid_setting(
                "initial_equation",
                &self.initial_equation,
                "Initial equation text must not be blank",
            ));
        }
        if self.pending_marker.trim().is_empty() {
            return Err(CalcError::invalid_setting(
                "pending_marker",
                &self.pending_marker,
                "Pending marker must not be blank",
            ));
        }
        if self.error_text.trim().is_empty() {
            return Err(CalcError::invalid_setting(
                "error_text",
                &self.error_text,
                "Error text must not be blank",
            ));
        }
        if let Some(places) = self.precision {
            if places > MAX_PRECISION {
                return Err(CalcError::invalid_setting(
                    "precision",
                    places.to_string(),
                    format!("Precision must be at most {}", MAX_PRECISION),
                ));
            }
        }
        Ok(())
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            initial_equation: "0".to_string(),
            pending_marker: "??".to_string(),
            error_text: "error".to_string(),
            precision: None,
        }
    }
}

/// On-disk wrapper carrying the schema version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFile {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub settings: EngineSettings,
}

impl SettingsFile {
    /// Wrap settings with the current schema version
    pub fn new(settings: EngineSettings) -> Self {
        SettingsFile {
            version: SCHEMA_VERSION.to_string(),
            settings,
        }
    }
}
