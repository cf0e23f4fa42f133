//! Capturing and restoring parameter values.
//!
//! A [`Snapshot`] maps parameter labels to formatted value strings and
//! serializes to TOML. Labels are the stable identity key: applying a
//! snapshot matches parameters by label and skips everything else.
//!
//! # TOML format
//!
//! ```toml
//! name = "sunset"
//!
//! [values]
//! Speed = "0.750"
//! Mode = "B"
//! Tint = "(0.900, 0.400, 0.100, 1.000)"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{coerce, format_value};
use crate::param::Parameter;
use crate::value::Value;

/// Errors from snapshot I/O and serialization.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Failed to read a snapshot file.
    #[error("failed to read snapshot '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a snapshot file.
    #[error("failed to write snapshot '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML.
    #[error("failed to parse snapshot TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML.
    #[error("failed to serialize snapshot TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Captured values of a parameter set, keyed by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Name of the snapshot.
    pub name: String,

    /// Label → formatted value.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Capture the current values of a parameter set.
    pub fn capture<'a>(
        name: impl Into<String>,
        params: impl IntoIterator<Item = &'a Parameter>,
    ) -> Self {
        let mut snapshot = Self::new(name);
        for param in params {
            snapshot
                .values
                .insert(param.label().to_string(), format_value(&param.value()));
        }
        snapshot
    }

    /// Write captured values back into matching parameters.
    ///
    /// Parameters are matched by label; entries with no matching parameter
    /// and values that fail to coerce into the parameter's kind are skipped.
    /// Returns how many parameters were written.
    pub fn apply<'a>(&self, params: impl IntoIterator<Item = &'a Parameter>) -> usize {
        let mut applied = 0;
        for param in params {
            let Some(raw) = self.values.get(param.label()) else {
                continue;
            };
            if coerce(&Value::Text(raw.clone()), param.kind()).is_ok() {
                param.set_value(Value::Text(raw.clone()));
                applied += 1;
            }
        }
        applied
    }

    /// Load a snapshot from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load a snapshot from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the snapshot to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| SnapshotError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Vector;

    fn demo_params() -> Vec<Parameter> {
        vec![
            Parameter::float("Speed", 0.75).with_range(0.0, 1.0),
            Parameter::choice("Mode", "B", ["A", "B", "C"]),
            Parameter::toggle("Active", true),
            Parameter::vector("Offset", Vector::vec2(0.1, 0.2)),
        ]
    }

    #[test]
    fn capture_formats_values() {
        let params = demo_params();
        let snap = Snapshot::capture("demo", &params);
        assert_eq!(snap.values["Speed"], "0.750");
        assert_eq!(snap.values["Mode"], "B");
        assert_eq!(snap.values["Active"], "true");
        assert_eq!(snap.values["Offset"], "(0.100, 0.200)");
    }

    #[test]
    fn apply_restores_matching_labels() {
        let params = demo_params();
        let snap = Snapshot::capture("demo", &params);

        params[0].set_float(0.1);
        params[1].set_choice("C");
        params[2].set_bool(false);
        params[3].set_component(0, 0.9);

        let applied = snap.apply(&params);
        assert_eq!(applied, 4);
        assert_eq!(params[0].value(), Value::Float(0.75));
        assert_eq!(params[1].value(), Value::Choice("B".into()));
        assert_eq!(params[2].value(), Value::Bool(true));
        assert_eq!(params[3].component(0), Some(0.1));
    }

    #[test]
    fn apply_skips_unknown_labels_and_bad_values() {
        let mut snap = Snapshot::new("partial");
        snap.values.insert("Nonexistent".into(), "1.0".into());
        snap.values.insert("Speed".into(), "not a number".into());

        let params = demo_params();
        assert_eq!(snap.apply(&params), 0);
        assert_eq!(params[0].value(), Value::Float(0.75));
    }

    #[test]
    fn toml_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.toml");

        let params = demo_params();
        let snap = Snapshot::capture("demo", &params);
        snap.save(&path).unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded, snap);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = Snapshot::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SnapshotError::ReadFile { .. }));
    }

    #[test]
    fn from_toml_with_defaults() {
        let snap = Snapshot::from_toml("name = \"bare\"").unwrap();
        assert_eq!(snap.name, "bare");
        assert!(snap.values.is_empty());
    }
}
