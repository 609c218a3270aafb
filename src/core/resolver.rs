//! Maps a `JobDescriptor` onto a filtershift `CommandPlan`.
//!
//! Rules run in a fixed order and the first failure aborts resolution, so an
//! invalid descriptor never reaches the executable. Part of the option
//! checking (for example reftime versus a timing file) is left to filtershift.
use std::path::Path;

use serde_json::Number;
use tracing::{debug, info, warn};

use crate::core::job::{DEFAULT_AXIS, GearConfig, JobDescriptor, number_value};
use crate::core::params::{FALLBACK_PRIMARY_ROLE, GearSettings};
use crate::core::plan::CommandPlan;
use crate::error::{Error, Result};
use crate::types::{PassFilter, SliceFile};

pub fn resolve(job: &JobDescriptor, settings: &GearSettings) -> Result<CommandPlan> {
    let config = &job.config;
    let mut plan = CommandPlan::new(&settings.executable);

    let input = primary_input(job, &settings.primary_role)?;
    plan.push("in", input.display())?;

    let tr = required_positive(config.tr.as_ref(), "tr")?;
    plan.push("TR", tr)?;

    let cf = config.cf.as_ref().ok_or_else(|| Error::InvalidParameter {
        name: "cf",
        value: "<missing>".to_string(),
        reason: "cutoff frequency is required",
    })?;
    if number_value(cf) <= 0.0 {
        warn!("Cutoff frequency {} is not positive; passing it through", cf);
    }
    plan.push("cf", cf)?;

    if let Some(filter) = pass_filter(config)? {
        plan.push_switch(filter.flag())?;
    }

    let slice_file = slice_file(job)?;
    if let Some((kind, path)) = slice_file {
        plan.push(kind.role(), path.display())?;
    }
    let has_file = slice_file.is_some();

    if number_value(&config.reftime) >= 0.0 {
        plan.push("reftime", &config.reftime)?;
    }

    if number_value(&config.refslice) > 0.0 {
        plan.push("refslice", &config.refslice)?;
    }

    // Slice order is fully described by a timing/order file when one is given.
    if has_file {
        debug!("Slice file supplied; ignoring start and dir options");
    } else {
        if number_value(&config.start) > 0.0 {
            plan.push("start", &config.start)?;
        }
        if number_value(&config.dir) != 0.0 {
            plan.push("direction", &config.dir)?;
        }
    }

    if config.axis != DEFAULT_AXIS {
        plan.push("axis", &config.axis)?;
    }

    if config.hires {
        plan.push_switch("hires")?;
    }

    Ok(plan)
}

/// Primary input path, looked up under `role` and then the generic `input` role.
pub fn primary_input<'a>(job: &'a JobDescriptor, role: &str) -> Result<&'a Path> {
    let path = job
        .input_path(role)
        .or_else(|| job.input_path(FALLBACK_PRIMARY_ROLE))
        .ok_or_else(|| Error::MissingInput {
            role: role.to_string(),
        })?;

    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    info!("File {} exists", path.display());
    Ok(path)
}

fn required_positive<'a>(value: Option<&'a Number>, name: &'static str) -> Result<&'a Number> {
    match value {
        Some(n) if number_value(n) > 0.0 => Ok(n),
        Some(n) => Err(Error::InvalidParameter {
            name,
            value: n.to_string(),
            reason: "must be greater than zero",
        }),
        None => Err(Error::InvalidParameter {
            name,
            value: "<missing>".to_string(),
            reason: "required and must be greater than zero",
        }),
    }
}

fn pass_filter(config: &GearConfig) -> Result<Option<PassFilter>> {
    match (config.hpf, config.lpf) {
        (true, true) => Err(Error::ConflictingOptions {
            first: PassFilter::High.flag(),
            second: PassFilter::Low.flag(),
        }),
        (true, false) => Ok(Some(PassFilter::High)),
        (false, true) => Ok(Some(PassFilter::Low)),
        (false, false) => Ok(None),
    }
}

fn slice_file(job: &JobDescriptor) -> Result<Option<(SliceFile, &Path)>> {
    let timing = job.input_path(SliceFile::Timing.role());
    let order = job.input_path(SliceFile::Order.role());
    match (timing, order) {
        (Some(_), Some(_)) => Err(Error::ConflictingInputs {
            first: SliceFile::Timing.role(),
            second: SliceFile::Order.role(),
        }),
        (Some(path), None) => Ok(Some((SliceFile::Timing, path))),
        (None, Some(path)) => Ok(Some((SliceFile::Order, path))),
        (None, None) => Ok(None),
    }
}
