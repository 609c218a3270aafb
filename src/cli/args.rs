use clap::Parser;
use std::path::PathBuf;

use fs_stc::core::params::{DEFAULT_ENVIRON_PATH, DEFAULT_INSTALL_ROOT, DEFAULT_PRIMARY_ROLE};
use fs_stc::{GearSettings, OutputDirPolicy, SuffixRule};

#[derive(Parser)]
#[command(name = "fs-stc", version, about = "filtershift slice-timing correction gear")]
pub struct CliArgs {
    /// Gear install root; config, output and executable paths default below it
    #[arg(long, default_value = DEFAULT_INSTALL_ROOT)]
    pub root: PathBuf,

    /// Job descriptor (default: <root>/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON file with the environment passed to filtershift
    #[arg(long, default_value = DEFAULT_ENVIRON_PATH)]
    pub environ: PathBuf,

    /// Output directory (default: <root>/output)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// filtershift executable (default: <root>/filtershift)
    #[arg(long)]
    pub executable: Option<PathBuf>,

    /// Create a missing output directory, or fail
    #[arg(long, value_enum, default_value_t = OutputDirPolicy::Create)]
    pub output_dir_policy: OutputDirPolicy,

    /// Also copy the environment file into the output directory
    #[arg(long, default_value_t = false)]
    pub copy_environ: bool,

    /// How the input extension is found when naming the output (nifti or chain)
    #[arg(long, value_enum, default_value_t = SuffixRule::Nifti)]
    pub suffix_rule: SuffixRule,

    /// Input role holding the image to correct
    #[arg(long, default_value = DEFAULT_PRIMARY_ROLE)]
    pub primary_role: String,

    /// Print the resolved command and exit without running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn settings(&self) -> GearSettings {
        let mut settings = GearSettings::with_root(&self.root);
        if let Some(config) = &self.config {
            settings.config_path = config.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            settings.output_dir = output_dir.clone();
        }
        if let Some(executable) = &self.executable {
            settings.executable = executable.clone();
        }
        settings.environ_path = self.environ.clone();
        settings.output_dir_policy = self.output_dir_policy;
        settings.copy_environment = self.copy_environ;
        settings.suffix_rule = self.suffix_rule;
        settings.primary_role = self.primary_role.clone();
        settings
    }
}
