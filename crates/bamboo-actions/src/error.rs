//! Action errors.

use bamboo_invoke::InvokeError;
use bamboo_task_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
  /// A mandatory value was neither given nor available as a default.
  #[error("{action}: missing required field '{field}'")]
  MissingField {
    action: &'static str,
    field: &'static str,
  },

  /// A task key did not match the task catalog.
  #[error(transparent)]
  Registry(#[from] RegistryError),

  /// Running acli failed.
  #[error(transparent)]
  Invoke(#[from] InvokeError),
}

impl ActionError {
  pub fn missing(action: &'static str, field: &'static str) -> Self {
    Self::MissingField { action, field }
  }
}
