use std::process::Command;

use crate::context::ExecutionContext;
use crate::error::ExecutionFailure;

/// How the acli executable is located on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  /// Prepend the install directory to `PATH` and call the executable by path.
  Posix,
  /// Change into the install directory and call the executable by name.
  Other,
}

impl Platform {
  pub fn current() -> Self {
    if cfg!(unix) {
      Platform::Posix
    } else {
      Platform::Other
    }
  }
}

/// Build the full shell command line for one invocation.
///
/// Only the way the executable is found differs between platforms. The
/// install directory is double-quoted so paths with spaces survive the
/// shell; the server name and serialized command are appended unchanged.
pub fn build_shell_command(platform: Platform, ctx: &ExecutionContext, command: &str) -> String {
  let dir = ctx.install_dir.display();
  match platform {
    Platform::Posix => format!(
      "PATH=\"{dir}:$PATH\" && \"{dir}/{exe}\" {server} {command}",
      exe = ctx.executable,
      server = ctx.server,
    ),
    Platform::Other => format!(
      "cd \"{dir}\" && {exe} {server} {command}",
      exe = ctx.executable,
      server = ctx.server,
    ),
  }
}

/// Runs a shell command line to completion and returns its stdout.
///
/// Implementations must report a non-zero exit as
/// [`ExecutionFailure::NonZeroExit`].
pub trait ShellRunner {
  fn run(&self, shell_command: &str) -> Result<Vec<u8>, ExecutionFailure>;
}

/// Runs commands through the system shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl ShellRunner for SystemShell {
  fn run(&self, shell_command: &str) -> Result<Vec<u8>, ExecutionFailure> {
    let output = shell(shell_command).output()?;

    if !output.status.success() {
      return Err(ExecutionFailure::NonZeroExit {
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
      });
    }

    Ok(output.stdout)
  }
}

#[cfg(windows)]
fn shell(shell_command: &str) -> Command {
  use std::os::windows::process::CommandExt;

  let mut cmd = Command::new("cmd");
  cmd.arg("/C").raw_arg(shell_command);
  cmd
}

#[cfg(not(windows))]
fn shell(shell_command: &str) -> Command {
  let mut cmd = Command::new("sh");
  cmd.arg("-c").arg(shell_command);
  cmd
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx() -> ExecutionContext {
    ExecutionContext::new("/opt/acli", "bamboo")
  }

  #[test]
  fn test_posix_command() {
    let cmd = build_shell_command(Platform::Posix, &ctx(), r#"--action getPlan --plan "A-B""#);
    assert_eq!(
      cmd,
      r#"PATH="/opt/acli:$PATH" && "/opt/acli/acli" bamboo --action getPlan --plan "A-B""#
    );
  }

  #[test]
  fn test_other_command() {
    let cmd = build_shell_command(Platform::Other, &ctx(), "--action run");
    assert_eq!(cmd, r#"cd "/opt/acli" && acli bamboo --action run"#);
  }

  #[test]
  fn test_custom_executable() {
    let ctx = ctx().with_executable("acli.sh");
    let cmd = build_shell_command(Platform::Posix, &ctx, "--action run");
    assert_eq!(
      cmd,
      r#"PATH="/opt/acli:$PATH" && "/opt/acli/acli.sh" bamboo --action run"#
    );
  }

  #[test]
  fn test_install_dir_with_spaces_is_quoted() {
    let ctx = ExecutionContext::new("/opt/acli 11.0", "bamboo");
    assert_eq!(
      build_shell_command(Platform::Posix, &ctx, "--action run"),
      r#"PATH="/opt/acli 11.0:$PATH" && "/opt/acli 11.0/acli" bamboo --action run"#
    );
    assert_eq!(
      build_shell_command(Platform::Other, &ctx, "--action run"),
      r#"cd "/opt/acli 11.0" && acli bamboo --action run"#
    );
  }

  #[cfg(unix)]
  #[test]
  fn test_system_shell_captures_stdout() {
    let out = SystemShell.run("printf '%s' hello").unwrap();
    assert_eq!(out, b"hello");
  }

  #[cfg(unix)]
  #[test]
  fn test_system_shell_non_zero_exit() {
    let err = SystemShell.run("echo nope >&2; exit 4").unwrap_err();
    match err {
      ExecutionFailure::NonZeroExit { code, stderr } => {
        assert_eq!(code, Some(4));
        assert_eq!(stderr.trim(), "nope");
      }
      other => panic!("unexpected failure: {other:?}"),
    }
  }
}
