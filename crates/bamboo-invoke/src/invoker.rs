use std::borrow::Cow;

use tracing::{debug, error, info, instrument};

use crate::context::ExecutionContext;
use crate::error::InvokeError;
use crate::shell::{Platform, ShellRunner, SystemShell, build_shell_command};

/// Captured standard output of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeOutput {
  pub stdout: Vec<u8>,
}

impl InvokeOutput {
  /// Stdout as text, replacing invalid UTF-8.
  pub fn text(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(&self.stdout)
  }

  pub fn into_bytes(self) -> Vec<u8> {
    self.stdout
  }
}

/// Invokes acli, one blocking process per call.
///
/// Holds no state between calls. Overlapping calls from different threads
/// each spawn their own process.
#[derive(Debug, Clone)]
pub struct Invoker<R = SystemShell> {
  runner: R,
  platform: Platform,
}

impl Invoker<SystemShell> {
  /// Create an invoker that uses the system shell on the current platform.
  pub fn new() -> Self {
    Self::with_runner(SystemShell)
  }
}

impl Default for Invoker<SystemShell> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R: ShellRunner> Invoker<R> {
  pub fn with_runner(runner: R) -> Self {
    Self {
      runner,
      platform: Platform::current(),
    }
  }

  /// Override platform detection.
  pub fn with_platform(mut self, platform: Platform) -> Self {
    self.platform = platform;
    self
  }

  pub fn platform(&self) -> Platform {
    self.platform
  }

  pub fn runner(&self) -> &R {
    &self.runner
  }

  /// Run a serialized command and return its stdout.
  ///
  /// Fails with [`InvokeError::Configuration`] if the install directory does
  /// not exist, without spawning anything. Every other failure is reported
  /// as [`InvokeError::Execution`] wrapping the cause.
  #[instrument(
    name = "acli_invoke",
    skip(self, ctx, command),
    fields(server = %ctx.server, install_dir = %ctx.install_dir.display())
  )]
  pub fn invoke(
    &self,
    ctx: &ExecutionContext,
    command: &str,
  ) -> Result<InvokeOutput, InvokeError> {
    if !ctx.install_dir.is_dir() {
      error!("acli directory does not exist");
      return Err(InvokeError::configuration(&ctx.install_dir));
    }

    let shell_command = build_shell_command(self.platform, ctx, command);
    debug!(command = %shell_command, "built shell command");
    info!("process started");

    match self.runner.run(&shell_command) {
      Ok(stdout) => {
        info!(bytes = stdout.len(), "process completed");
        Ok(InvokeOutput { stdout })
      }
      Err(failure) => {
        error!(error = %failure, "process failed");
        Err(InvokeError::from(failure))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_output_text_is_lossy() {
    let output = InvokeOutput {
      stdout: vec![b'o', b'k', 0xff],
    };
    assert_eq!(output.text(), "ok\u{fffd}");
    assert_eq!(output.into_bytes(), vec![b'o', b'k', 0xff]);
  }

  #[test]
  fn test_default_platform_matches_host() {
    assert_eq!(Invoker::new().platform(), Platform::current());
  }
}
