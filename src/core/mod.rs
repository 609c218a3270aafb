//! Configuration resolution building blocks: the job descriptor model, run
//! settings, the command plan and the rules that fill it, and output naming.
//! These are consumed by the high-level `api` module.
pub mod job;
pub mod naming;
pub mod params;
pub mod plan;
pub mod resolver;
