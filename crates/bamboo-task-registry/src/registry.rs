use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::catalog::BUILTIN_TASKS;
use crate::error::RegistryError;

static GLOBAL: LazyLock<TaskRegistry> = LazyLock::new(|| {
  TaskRegistry::from_entries(
    BUILTIN_TASKS
      .iter()
      .map(|(key, fields)| (*key, fields.iter().copied())),
  )
});

/// Parameter shape of a task, used only as a schema hint.
///
/// Values are never validated against it; it lists the field names a task
/// of this kind is usually configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskShape {
  pub fields: Vec<String>,
}

impl TaskShape {
  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }
}

/// Immutable catalog of task keys.
///
/// Entries keep their definition order. A second index keyed by the
/// uppercased key is built alongside them at construction and never
/// touched afterwards.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
  entries: Vec<(String, TaskShape)>,
  index: HashMap<String, usize>,
}

impl TaskRegistry {
  /// The built-in Bamboo task catalog, built on first use.
  pub fn global() -> &'static TaskRegistry {
    &GLOBAL
  }

  /// Build a registry from `(key, fields)` pairs.
  ///
  /// If two keys differ only by case, the first one wins lookups.
  pub fn from_entries<K, F, I>(entries: I) -> Self
  where
    K: Into<String>,
    F: IntoIterator,
    F::Item: Into<String>,
    I: IntoIterator<Item = (K, F)>,
  {
    let mut registry = Self {
      entries: Vec::new(),
      index: HashMap::new(),
    };

    for (key, fields) in entries {
      let key = key.into();
      let shape = TaskShape {
        fields: fields.into_iter().map(Into::into).collect(),
      };
      let position = registry.entries.len();
      registry
        .index
        .entry(key.to_uppercase())
        .or_insert(position);
      registry.entries.push((key, shape));
    }

    registry
  }

  /// Resolve an identifier to its canonical key.
  pub fn resolve(&self, identifier: &str) -> Result<&str, RegistryError> {
    self
      .position(identifier)
      .map(|i| self.entries[i].0.as_str())
  }

  /// Get the parameter shape for an identifier.
  pub fn shape(&self, identifier: &str) -> Result<&TaskShape, RegistryError> {
    self.position(identifier).map(|i| &self.entries[i].1)
  }

  /// Canonical keys in catalog order.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(key, _)| key.as_str())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn position(&self, identifier: &str) -> Result<usize, RegistryError> {
    self
      .index
      .get(&identifier.to_uppercase())
      .copied()
      .ok_or_else(|| RegistryError::not_found(identifier))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_is_case_insensitive() {
    let registry = TaskRegistry::global();
    assert_eq!(registry.resolve("script"), Ok("SCRIPT"));
    assert_eq!(registry.resolve("SCRIPT"), Ok("SCRIPT"));
    assert_eq!(registry.resolve("Inject_Variables"), Ok("INJECT_VARIABLES"));
  }

  #[test]
  fn test_resolve_keeps_canonical_lowercase_key() {
    let registry = TaskRegistry::global();
    assert_eq!(
      registry.resolve("COM.ATLASSIAN.BAMBOO.PLUGIN.DOTNET:MSBUILD"),
      Ok("com.atlassian.bamboo.plugin.dotnet:msbuild")
    );
  }

  #[test]
  fn test_resolve_unknown_identifier() {
    let err = TaskRegistry::global().resolve("not_a_task").unwrap_err();
    assert_eq!(err, RegistryError::not_found("not_a_task"));
    assert_eq!(err.to_string(), "not_a_task task key not found");
  }

  #[test]
  fn test_resolve_rejects_partial_match() {
    let registry = TaskRegistry::global();
    assert!(registry.resolve("SCRIP").is_err());
    assert!(registry.resolve("MAVEN").is_err());
    assert!(registry.resolve(" script").is_err());
  }

  #[test]
  fn test_shape_lists_fields() {
    let shape = TaskRegistry::global().shape("checkout").unwrap();
    assert_eq!(shape.fields, vec!["repository", "force_clean_build"]);
    assert!(TaskRegistry::global().shape("clean").unwrap().is_empty());
  }

  #[test]
  fn test_shape_serializes_as_field_list() {
    let shape = TaskRegistry::global().shape("SCRIPT").unwrap();
    let value = serde_json::to_value(shape).unwrap();
    assert_eq!(value["fields"][0], "interpreter");
    assert_eq!(
      serde_json::to_value(TaskRegistry::global().shape("clean").unwrap()).unwrap(),
      serde_json::json!({ "fields": [] })
    );
  }

  #[test]
  fn test_keys_keep_catalog_order() {
    let registry = TaskRegistry::global();
    let keys: Vec<&str> = registry.keys().take(3).collect();
    assert_eq!(keys, vec!["SCRIPT", "CHECKOUT", "INJECT_VARIABLES"]);
    assert_eq!(registry.len(), 30);
  }

  #[test]
  fn test_case_variant_keys_first_wins() {
    let registry = TaskRegistry::from_entries([
      ("Deploy", vec!["target"]),
      ("DEPLOY", vec![]),
    ]);
    assert_eq!(registry.resolve("deploy"), Ok("Deploy"));
    assert_eq!(registry.shape("deploy").unwrap().fields, vec!["target"]);
    assert_eq!(registry.len(), 2);
  }

  #[test]
  fn test_empty_registry() {
    let registry = TaskRegistry::from_entries(Vec::<(&str, Vec<&str>)>::new());
    assert!(registry.is_empty());
    assert!(registry.resolve("SCRIPT").is_err());
  }
}
