use std::path::{Path, PathBuf};

/// File name of the acli executable inside the install directory.
pub const DEFAULT_EXECUTABLE: &str = "acli";

/// Where the acli executable lives and which server profile to address.
///
/// Supplied per invocation; the install directory is re-checked on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
  /// Directory containing the acli executable.
  pub install_dir: PathBuf,
  /// Server name as configured in `acli.properties`.
  pub server: String,
  /// Executable file name, normally `acli`.
  pub executable: String,
}

impl ExecutionContext {
  pub fn new(install_dir: impl Into<PathBuf>, server: impl Into<String>) -> Self {
    Self {
      install_dir: install_dir.into(),
      server: server.into(),
      executable: DEFAULT_EXECUTABLE.to_string(),
    }
  }

  pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
    self.executable = executable.into();
    self
  }

  pub fn install_dir(&self) -> &Path {
    &self.install_dir
  }
}
