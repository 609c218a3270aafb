use std::collections::BTreeMap;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use crate::core::plan::CommandPlan;
use crate::error::{Error, Result};

/// Captured outcome of one filtershift run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Turn a non-zero exit into `Error::ProcessFailed` carrying stderr.
    pub fn check(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            info!("{}", self.stderr);
            Err(Error::ProcessFailed {
                status: self.status,
                stderr: self.stderr,
            })
        }
    }
}

/// Run `plan` with exactly `environ` as its environment and wait for it to exit.
/// No shell is involved; arguments are passed as-is.
pub fn execute(plan: &CommandPlan, environ: &BTreeMap<String, String>) -> Result<RunResult> {
    info!("{}", plan);

    let output = Command::new(plan.executable())
        .args(plan.args())
        .env_clear()
        .envs(environ)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| Error::Spawn {
            program: plan.executable().to_path_buf(),
            source,
        })?;

    let result = RunResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    debug!("{}", result.stdout);
    Ok(result)
}
