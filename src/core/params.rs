use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{OutputDirPolicy, SuffixRule};

pub const DEFAULT_INSTALL_ROOT: &str = "/flywheel/v0";
pub const DEFAULT_ENVIRON_PATH: &str = "/tmp/gear_environ.json";
pub const DEFAULT_PRIMARY_ROLE: &str = "NIFTI";
/// Accepted when the primary role key is absent.
pub const FALLBACK_PRIMARY_ROLE: &str = "input";
pub const EXECUTABLE_NAME: &str = "filtershift";

/// Run settings: every well-known path and variant choice the gear depends on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearSettings {
    pub install_root: PathBuf,
    /// Job descriptor (`config.json`)
    pub config_path: PathBuf,
    /// JSON environment handed to the subprocess
    pub environ_path: PathBuf,
    pub output_dir: PathBuf,
    pub executable: PathBuf,
    pub output_dir_policy: OutputDirPolicy,
    /// Also copy the environment file into `output_dir`
    pub copy_environment: bool,
    pub suffix_rule: SuffixRule,
    pub primary_role: String,
}

impl GearSettings {
    /// Settings with every path derived from `install_root`.
    pub fn with_root(install_root: impl Into<PathBuf>) -> Self {
        let install_root = install_root.into();
        Self {
            config_path: install_root.join("config.json"),
            environ_path: PathBuf::from(DEFAULT_ENVIRON_PATH),
            output_dir: install_root.join("output"),
            executable: install_root.join(EXECUTABLE_NAME),
            output_dir_policy: OutputDirPolicy::default(),
            copy_environment: false,
            suffix_rule: SuffixRule::default(),
            primary_role: DEFAULT_PRIMARY_ROLE.to_string(),
            install_root,
        }
    }

    pub fn install_root(&self) -> &Path {
        &self.install_root
    }
}

impl Default for GearSettings {
    fn default() -> Self {
        Self::with_root(DEFAULT_INSTALL_ROOT)
    }
}
