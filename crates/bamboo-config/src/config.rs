use std::fs;
use std::path::{Path, PathBuf};

use bamboo_invoke::{DEFAULT_EXECUTABLE, ExecutionContext};
use serde::Deserialize;

use crate::error::ConfigError;

/// One source of settings, any of which may be missing.
///
/// The config file is one layer, command-line flags and environment
/// variables are another. Later layers win.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
  #[serde(default)]
  pub install_dir: Option<PathBuf>,
  #[serde(default)]
  pub server: Option<String>,
  #[serde(default)]
  pub project: Option<String>,
  #[serde(default)]
  pub executable: Option<String>,
}

impl ConfigLayer {
  /// Read a layer from a JSON file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Apply `other` on top of `self`.
  pub fn overlay(self, other: ConfigLayer) -> Self {
    Self {
      install_dir: other.install_dir.or(self.install_dir),
      server: other.server.or(self.server),
      project: other.project.or(self.project),
      executable: other.executable.or(self.executable),
    }
  }
}

/// Complete bamboo-acli configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AcliConfig {
  /// Directory containing the acli executable.
  pub install_dir: PathBuf,
  /// Server name as configured in `acli.properties`.
  pub server: String,
  /// Default project for project-scoped actions.
  #[serde(default)]
  pub project: Option<String>,
  #[serde(default = "default_executable")]
  pub executable: String,
}

fn default_executable() -> String {
  DEFAULT_EXECUTABLE.to_string()
}

impl AcliConfig {
  /// Load a complete configuration from a JSON file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::try_from(ConfigLayer::load(path)?)
  }

  /// The execution context for invoking acli.
  pub fn context(&self) -> ExecutionContext {
    ExecutionContext::new(&self.install_dir, &self.server).with_executable(&self.executable)
  }
}

impl TryFrom<ConfigLayer> for AcliConfig {
  type Error = ConfigError;

  fn try_from(layer: ConfigLayer) -> Result<Self, Self::Error> {
    Ok(Self {
      install_dir: layer.install_dir.ok_or(ConfigError::Missing {
        field: "install_dir",
      })?,
      server: layer.server.ok_or(ConfigError::Missing { field: "server" })?,
      project: layer.project,
      executable: layer.executable.unwrap_or_else(default_executable),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, content).unwrap();
    path
  }

  #[test]
  fn test_load_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
      dir.path(),
      r#"{"install_dir": "/opt/acli", "server": "bamboo", "project": "ZCLI"}"#,
    );

    let config = AcliConfig::load(&path).unwrap();
    assert_eq!(config.install_dir, PathBuf::from("/opt/acli"));
    assert_eq!(config.server, "bamboo");
    assert_eq!(config.project.as_deref(), Some("ZCLI"));
    assert_eq!(config.executable, "acli");
  }

  #[test]
  fn test_load_missing_server() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"install_dir": "/opt/acli"}"#);

    let err = AcliConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { field: "server" }));
  }

  #[test]
  fn test_load_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLayer::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
  }

  #[test]
  fn test_load_rejects_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), r#"{"install_dir": "/opt/acli", "sever": "typo"}"#);

    let err = ConfigLayer::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.json"));
  }

  #[test]
  fn test_overlay_prefers_later_layer() {
    let file = ConfigLayer {
      install_dir: Some("/opt/acli".into()),
      server: Some("bamboo".into()),
      project: Some("FILE".into()),
      executable: None,
    };
    let flags = ConfigLayer {
      server: Some("staging".into()),
      ..Default::default()
    };

    let config = AcliConfig::try_from(file.overlay(flags)).unwrap();
    assert_eq!(config.install_dir, PathBuf::from("/opt/acli"));
    assert_eq!(config.server, "staging");
    assert_eq!(config.project.as_deref(), Some("FILE"));
  }

  #[test]
  fn test_context() {
    let config = AcliConfig {
      install_dir: "/opt/acli".into(),
      server: "bamboo".into(),
      project: None,
      executable: "acli.sh".into(),
    };

    let ctx = config.context();
    assert_eq!(ctx.install_dir, PathBuf::from("/opt/acli"));
    assert_eq!(ctx.server, "bamboo");
    assert_eq!(ctx.executable, "acli.sh");
  }
}
