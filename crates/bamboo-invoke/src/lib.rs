//! Bamboo Invoke
//!
//! Runs a serialized acli command as a single blocking child process.
//!
//! The final command line depends on the platform:
//!
//! ```text
//! posix:  PATH="{install_dir}:$PATH" && "{install_dir}/acli" {server} {command}
//! other:  cd "{install_dir}" && acli {server} {command}
//! ```
//!
//! and is handed to a shell (`sh -c` or `cmd /C`), so quoting produced by
//! `bamboo-command` is interpreted by that shell. No retries and no timeout
//! are applied here.

mod context;
mod error;
mod invoker;
mod shell;

pub use context::{DEFAULT_EXECUTABLE, ExecutionContext};
pub use error::{ExecutionFailure, InvokeError};
pub use invoker::{InvokeOutput, Invoker};
pub use shell::{Platform, ShellRunner, SystemShell, build_shell_command};
