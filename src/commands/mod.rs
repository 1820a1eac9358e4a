//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod compile;
pub mod models;
pub mod process_logs;

// Re-export main command functions
pub use compile::{execute_compile, validate_compile_args};
pub use models::{CompileArgs, ProcessLogsArgs};
pub use process_logs::{execute_process_logs, validate_process_logs_args};
