//! # File I/O Module
//!
//! Loads and saves [`EngineSettings`] as JSON:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//! - **Value validation**: Settings are checked before save and after load
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::file_io::{load_settings, save_settings};
//! use calc_core::settings::EngineSettings;
//! use std::path::Path;
//!
//! let path = Path::new("tally.json");
//! save_settings(&EngineSettings::default(), path)?;
//! let settings = load_settings(path)?;
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::settings::{EngineSettings, SettingsFile, SCHEMA_VERSION};

/// Save settings to a file with atomic write semantics.
///
/// The save process:
/// 1. Validate and serialize settings to JSON
/// 2. Write to a temporary file (`<name>.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over the target
pub fn save_settings(settings: &EngineSettings, path: &Path) -> CalcResult<()> {
    settings.validate()?;

    let json = serde_json::to_string_pretty(&SettingsFile::new(settings.clone())).map_err(|e| {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load settings from a file.
///
/// # Returns
///
/// * `Ok(EngineSettings)` - Successfully loaded and validated settings
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::InvalidSetting)` - A value is out of range
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> CalcResult<EngineSettings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings_file: SettingsFile =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&settings_file.version)?;
    settings_file.settings.validate()?;

    debug!(path = %path.display(), version = %settings_file.version, "settings loaded");
    Ok(settings_file.settings)
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("tally_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");

        let settings = EngineSettings {
            precision: Some(6),
            pending_marker: "...".to_string(),
            ..EngineSettings::default()
        };
        save_settings(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_settings_path("atomic");

        save_settings(&EngineSettings::default(), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let path = temp_settings_path("invalid_save");
        let settings = EngineSettings {
            precision: Some(40),
            ..EngineSettings::default()
        };
        let err = save_settings(&settings, &path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTING");
        assert!(!path.exists());
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let path = temp_settings_path("bad_json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        fs::write(&path, r#"{"version": "1.0.0", "settings": {}}"#).unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "VERSION_MISMATCH");

        fs::write(&path, r#"{"version": "0.1.0", "settings": {"precision": 99}}"#).unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "INVALID_SETTING");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_settings_path("missing");
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_tmp_path() {
        let path = Path::new("/path/to/tally.json");
        assert_eq!(tmp_path_for(path), Path::new("/path/to/tally.json.tmp"));
    }
}
