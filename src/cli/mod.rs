//! Command Line Interface (CLI) layer for the gear.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) that wires command-line options into `fs_stc::api`.
//!
//! If you are embedding the gear into another application, prefer using
//! the high-level `fs_stc::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
