//! High-level library API: load a job descriptor, resolve it into a command,
//! run filtershift and relocate its output. Prefer these entrypoints over the
//! lower-level `core` and `io` modules when embedding the gear.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::job::JobDescriptor;
use crate::core::naming::derive_output_path;
use crate::core::params::GearSettings;
use crate::core::plan::CommandPlan;
use crate::core::resolver::{primary_input, resolve};
use crate::error::Result;
use crate::io::{execute, load_environment, relocate};

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Command line as it was executed
    pub command: String,
    /// File filtershift wrote next to the input
    pub produced: PathBuf,
    /// Copy of `produced` in the output directory
    pub relocated: PathBuf,
    /// Copy of the environment file, when requested
    pub environment_copy: Option<PathBuf>,
}

/// Load the descriptor named by `settings.config_path`.
pub fn load_job(settings: &GearSettings) -> Result<JobDescriptor> {
    JobDescriptor::from_path(&settings.config_path)
}

/// Resolve a descriptor into a command without running anything.
pub fn plan_job(job: &JobDescriptor, settings: &GearSettings) -> Result<CommandPlan> {
    resolve(job, settings)
}

/// Resolve, execute and relocate. Nothing is launched unless resolution succeeds.
pub fn run_job(job: &JobDescriptor, settings: &GearSettings) -> Result<RunReport> {
    let plan = resolve(job, settings)?;
    let environ = load_environment(&settings.environ_path)?;

    let run = execute(&plan, &environ)?.check()?;
    if !run.stderr.is_empty() {
        info!("{}", run.stderr.trim_end());
    }

    let input = primary_input(job, &settings.primary_role)?;
    let produced = derive_output_path(input, settings.suffix_rule)?;
    let environment_file = settings
        .copy_environment
        .then_some(settings.environ_path.as_path());
    let moved = relocate(
        &produced,
        &settings.output_dir,
        settings.output_dir_policy,
        environment_file,
    )?;

    Ok(RunReport {
        command: plan.to_string(),
        produced,
        relocated: moved.result,
        environment_copy: moved.environment,
    })
}

/// Full gear run driven only by `settings`.
pub fn run_gear(settings: &GearSettings) -> Result<RunReport> {
    let job = load_job(settings)?;
    if let Some(dest) = &job.destination {
        info!(
            "Destination: {} ({})",
            dest.id.as_deref().unwrap_or("-"),
            dest.kind.as_deref().unwrap_or("-")
        );
    }
    run_job(&job, settings)
}

/// Sorted entries of the install root, logged at startup.
pub fn install_root_entries(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(root)? {
        entries.push(entry?.path());
    }
    entries.sort();
    Ok(entries)
}

/// Log the install root listing; unreadable roots only produce a warning.
pub fn log_install_root(root: &Path) {
    match install_root_entries(root) {
        Ok(entries) => info!("{:?}", entries),
        Err(e) => warn!("Cannot list {}: {}", root.display(), e),
    }
}
