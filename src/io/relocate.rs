use std::fs::{self, FileTimes};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::OutputDirPolicy;

/// Make sure `dir` is usable as the output directory under `policy`.
pub fn prepare_output_dir(dir: &Path, policy: OutputDirPolicy) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    match policy {
        OutputDirPolicy::Create => {
            info!("Creating output directory {}", dir.display());
            fs::create_dir_all(dir)?;
            Ok(())
        }
        OutputDirPolicy::Require => Err(Error::OutputDirMissing {
            path: dir.to_path_buf(),
        }),
    }
}

/// Copy `src` into `dest_dir` keeping its file name, permissions and
/// access/modification times. Returns the destination path.
pub fn copy_preserving(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = src.file_name().ok_or_else(|| Error::InvalidFilename {
        path: src.to_path_buf(),
    })?;
    let dest = dest_dir.join(file_name);

    // Copying a file onto itself truncates it before reading.
    if dest.exists() && fs::canonicalize(src)? == fs::canonicalize(&dest)? {
        debug!("{} is already in {}", src.display(), dest_dir.display());
        return Ok(dest);
    }

    let metadata = fs::metadata(src)?;
    fs::copy(src, &dest)?;

    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    // The owner may set times through a read-only handle, so read-only sources work too.
    fs::File::open(&dest)?.set_times(times)?;

    debug!("Copied {} -> {}", src.display(), dest.display());
    Ok(dest)
}

/// Files placed in the output directory by `relocate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub result: PathBuf,
    pub environment: Option<PathBuf>,
}

/// Check that filtershift produced `produced`, then copy it (and optionally the
/// environment file) into `output_dir`.
pub fn relocate(
    produced: &Path,
    output_dir: &Path,
    policy: OutputDirPolicy,
    environment_file: Option<&Path>,
) -> Result<Relocation> {
    if !produced.is_file() {
        return Err(Error::OutputMissing {
            path: produced.to_path_buf(),
        });
    }

    prepare_output_dir(output_dir, policy)?;
    let result = copy_preserving(produced, output_dir)?;
    let environment = environment_file
        .map(|env| copy_preserving(env, output_dir))
        .transpose()?;

    info!("Copied {} to {}", produced.display(), output_dir.display());
    Ok(Relocation {
        result,
        environment,
    })
}
