//! Shared enums used across the gear: output directory handling (`OutputDirPolicy`),
//! output file naming (`SuffixRule`), and the two mutually exclusive option pairs
//! (`PassFilter`, `SliceFile`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do when the output directory is absent at relocation time.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputDirPolicy {
    /// Create the directory (and parents) before copying.
    #[default]
    Create,
    /// Fail with `Error::OutputDirMissing`.
    Require,
}

impl std::fmt::Display for OutputDirPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputDirPolicy::Create => write!(f, "create"),
            OutputDirPolicy::Require => write!(f, "require"),
        }
    }
}

/// Which dot-separated segments of the input file name count as its extension.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SuffixRule {
    /// Last segment, or last two when the last one is `gz`.
    #[default]
    Nifti,
    /// Everything after the first dot.
    Chain,
}

impl std::fmt::Display for SuffixRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuffixRule::Nifti => write!(f, "nifti"),
            SuffixRule::Chain => write!(f, "chain"),
        }
    }
}

/// Temporal filter selection; `hpf` and `lpf` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PassFilter {
    High,
    Low,
}

impl PassFilter {
    pub fn flag(self) -> &'static str {
        match self {
            PassFilter::High => "hpf",
            PassFilter::Low => "lpf",
        }
    }
}

/// Slice acquisition metadata file; `timing` and `order` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SliceFile {
    Timing,
    Order,
}

impl SliceFile {
    /// Input role key in the job descriptor, which is also the emitted flag name.
    pub fn role(self) -> &'static str {
        match self {
            SliceFile::Timing => "timing",
            SliceFile::Order => "order",
        }
    }
}
