#![doc = r##"
fs-stc: a gear adapter for the `filtershift` slice-timing corrector.

The gear reads a JSON job descriptor (`config`, `inputs`, `destination`), validates the
options, turns them into a `filtershift --flag=value ...` command line, runs it with a
prepared environment, and copies the corrected image (`<name>_st<ext>`) into the output
directory. The signal processing itself happens entirely inside `filtershift`.

Quick start: run a gear from its settings
-----------------------------------------
```rust,no_run
use fs_stc::{GearSettings, OutputDirPolicy, run_gear};

fn main() -> fs_stc::Result<()> {
    let mut settings = GearSettings::with_root("/flywheel/v0");
    settings.output_dir_policy = OutputDirPolicy::Require;

    let report = run_gear(&settings)?;
    println!("{} -> {}", report.produced.display(), report.relocated.display());
    Ok(())
}
```

Resolve a descriptor without running anything
----------------------------------------------
```rust,no_run
use fs_stc::{GearSettings, JobDescriptor, plan_job};

fn main() -> fs_stc::Result<()> {
    let job = JobDescriptor::from_json(r#"{
        "config": {"tr": 2.0, "cf": 0.01, "hpf": true},
        "inputs": {"NIFTI": {"location": {"path": "/data/scan.nii.gz"}}}
    }"#)?;

    let plan = plan_job(&job, &GearSettings::default())?;
    // /flywheel/v0/filtershift --in=/data/scan.nii.gz --TR=2.0 --cf=0.01 --hpf=
    println!("{plan}");
    Ok(())
}
```

Error handling
--------------
All public functions return `fs_stc::Result<T>`. Every `fs_stc::Error` is fatal for a run;
the `fs-stc` binary logs it and exits with status 1.

```rust,no_run
use fs_stc::{Error, GearSettings, run_gear};

fn main() {
    match run_gear(&GearSettings::default()) {
        Ok(_) => {}
        Err(Error::ProcessFailed { stderr, .. }) => eprintln!("filtershift failed:\n{stderr}"),
        Err(Error::ConflictingOptions { first, second }) => eprintln!("{first} vs {second}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: descriptor model, settings, command plan, resolver rules, output naming.
- [`io`]: environment loading, subprocess execution, output relocation.
- [`types`]: shared enums (`OutputDirPolicy`, `SuffixRule`, ...).
- [`error`]: crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::job::{GearConfig, InputRecord, JobDescriptor};
pub use crate::core::params::GearSettings;
pub use crate::core::plan::{CommandPlan, Flag};
pub use error::{Error, Result};
pub use types::{OutputDirPolicy, PassFilter, SliceFile, SuffixRule};

// Building blocks
pub use crate::core::naming::derive_output_path;
pub use crate::core::resolver::resolve;
pub use io::{Relocation, RunResult};

// High-level API re-exports
pub use api::{
    RunReport, install_root_entries, load_job, log_install_root, plan_job, run_gear, run_job,
};
