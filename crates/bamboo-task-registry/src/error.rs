use thiserror::Error;

/// Errors that can occur while looking up a task key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
  /// No catalog entry matches the identifier, ignoring case.
  #[error("{identifier} task key not found")]
  NotFound { identifier: String },
}

impl RegistryError {
  pub fn not_found(identifier: impl Into<String>) -> Self {
    Self::NotFound {
      identifier: identifier.into(),
    }
  }
}
