use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::SuffixRule;

/// Inserted by filtershift between the base name and the extension.
pub const OUTPUT_MARKER: &str = "_st";

/// Split a file name into `(base, suffixes)` according to `rule`.
/// A leading dot belongs to the base name (`.scan.nii` has suffix `.nii`).
pub fn split_suffixes(file_name: &str, rule: SuffixRule) -> (&str, &str) {
    let skip = usize::from(file_name.starts_with('.'));
    let searchable = &file_name[skip..];

    let split = match rule {
        SuffixRule::Chain => searchable.find('.'),
        SuffixRule::Nifti => searchable.rfind('.').map(|last| {
            if searchable[last + 1..].eq_ignore_ascii_case("gz") {
                searchable[..last].rfind('.').unwrap_or(last)
            } else {
                last
            }
        }),
    };

    match split {
        Some(idx) => file_name.split_at(idx + skip),
        None => (file_name, ""),
    }
}

/// Path filtershift writes its result to, next to `input`.
pub fn derive_output_path(input: &Path, rule: SuffixRule) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidFilename {
            path: input.to_path_buf(),
        })?;

    let (base, suffixes) = split_suffixes(file_name, rule);
    Ok(input.with_file_name(format!("{base}{OUTPUT_MARKER}{suffixes}")))
}
