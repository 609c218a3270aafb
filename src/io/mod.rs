//! I/O layer around the external executable: loading the subprocess
//! environment (`environ`), running filtershift (`invoke`), and copying its
//! result into the output directory (`relocate`).
pub mod environ;
pub use environ::load_environment;

pub mod invoke;
pub use invoke::{RunResult, execute};

pub mod relocate;
pub use relocate::{Relocation, copy_preserving, prepare_output_dir, relocate};
