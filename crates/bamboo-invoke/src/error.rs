//! Invocation errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::Invoker::invoke`].
#[derive(Debug, Error)]
pub enum InvokeError {
  /// The install directory is missing. Raised before anything is spawned.
  #[error("acli directory does not exist: {}", .path.display())]
  Configuration { path: PathBuf },

  /// Spawning or running the process failed. The cause says how.
  #[error("acli invocation failed: {source}")]
  Execution {
    #[source]
    source: ExecutionFailure,
  },
}

impl InvokeError {
  pub fn configuration(path: impl Into<PathBuf>) -> Self {
    Self::Configuration { path: path.into() }
  }

  /// The wrapped cause, if this is an execution failure.
  pub fn failure(&self) -> Option<&ExecutionFailure> {
    match self {
      Self::Execution { source } => Some(source),
      Self::Configuration { .. } => None,
    }
  }
}

impl From<ExecutionFailure> for InvokeError {
  fn from(source: ExecutionFailure) -> Self {
    Self::Execution { source }
  }
}

/// Underlying cause of an execution failure.
#[derive(Debug, Error)]
pub enum ExecutionFailure {
  /// The shell could not be spawned or its output could not be read.
  #[error("failed to run shell: {0}")]
  Spawn(#[from] std::io::Error),

  /// The process ran and exited unsuccessfully.
  #[error("process exited with {}", exit_label(.code))]
  NonZeroExit { code: Option<i32>, stderr: String },
}

impl ExecutionFailure {
  /// Exit code for a non-zero exit, `None` when killed by a signal or not run.
  pub fn exit_code(&self) -> Option<i32> {
    match self {
      Self::NonZeroExit { code, .. } => *code,
      Self::Spawn(_) => None,
    }
  }
}

fn exit_label(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("status {code}"),
    None => "no status (terminated by signal)".to_string(),
  }
}
