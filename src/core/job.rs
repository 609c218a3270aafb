//! Job descriptor (`config.json`) model.
//!
//! The platform writes one descriptor per run with three top-level keys:
//! `config` (scalar options), `inputs` (role to file record) and `destination`.
//! Unknown keys are ignored at every level so descriptors produced by newer
//! platform versions keep loading.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDescriptor {
    #[serde(default)]
    pub config: GearConfig,
    #[serde(default)]
    pub inputs: BTreeMap<String, InputRecord>,
    #[serde(default)]
    pub destination: Option<Destination>,
}

impl JobDescriptor {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        serde_json::from_str(&text).map_err(|e| Error::json(path, e))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::json("<inline>", e))
    }

    /// Path of the input supplied under `role`, if any.
    pub fn input_path(&self, role: &str) -> Option<&Path> {
        self.inputs.get(role).map(InputRecord::path)
    }
}

/// An input is either a bare path or a platform file record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputRecord {
    Path(PathBuf),
    File {
        location: FileLocation,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base: Option<String>,
    },
}

impl InputRecord {
    pub fn path(&self) -> &Path {
        match self {
            InputRecord::Path(path) => path,
            InputRecord::File { location, .. } => &location.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLocation {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Scalar options understood by the resolver.
///
/// Numbers are kept as `serde_json::Number` so they are passed to the
/// executable with the spelling they had in the descriptor (`2.0` stays `2.0`).
/// Defaults mean "do not pass the flag".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GearConfig {
    /// Repetition time in seconds; required and positive
    pub tr: Option<Number>,
    /// Filter cutoff frequency; passed through unchecked
    pub cf: Option<Number>,
    pub hpf: bool,
    pub lpf: bool,
    /// Reference time; passed when >= 0
    pub reftime: Number,
    /// Reference slice; passed when > 0
    pub refslice: Number,
    /// First acquired slice; passed when > 0 and no slice file is given
    pub start: Number,
    /// Acquisition direction code; passed when != 0 and no slice file is given
    pub dir: Number,
    pub axis: String,
    pub hires: bool,
}

pub const DEFAULT_AXIS: &str = "z";

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            tr: None,
            cf: None,
            hpf: false,
            lpf: false,
            reftime: Number::from(-1),
            refslice: Number::from(0),
            start: Number::from(0),
            dir: Number::from(0),
            axis: DEFAULT_AXIS.to_string(),
            hires: false,
        }
    }
}

/// Numeric value of a descriptor number. Without `arbitrary_precision` every
/// `Number` converts, so `NAN` is never observed in practice.
pub fn number_value(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}
