use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::value::OptionValue;

/// Ordered set of optional named arguments.
///
/// Emission order is insertion order. Setting a name that is already present
/// replaces its value in place, so each name maps to exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionalArgs {
  entries: Vec<(String, OptionValue)>,
}

impl OptionalArgs {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder form of [`OptionalArgs::set`].
  pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
    self.set(name, value);
    self
  }

  /// Set a value, keeping the original position if the name already exists.
  pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
    let name = name.into();
    let value = value.into();
    match self.entries.iter_mut().find(|(n, _)| *n == name) {
      Some((_, existing)) => *existing = value,
      None => self.entries.push((name, value)),
    }
  }

  pub fn get(&self, name: &str) -> Option<&OptionValue> {
    self
      .entries
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, v)| v)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
    self.entries.iter().map(|(n, v)| (n.as_str(), v))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionalArgs {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut args = OptionalArgs::new();
    for (name, value) in iter {
      args.set(name, value);
    }
    args
  }
}

/// Deserializes from a map, keeping the order keys appear in the document.
impl<'de> Deserialize<'de> for OptionalArgs {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(OptionalArgsVisitor)
  }
}

struct OptionalArgsVisitor;

impl<'de> Visitor<'de> for OptionalArgsVisitor {
  type Value = OptionalArgs;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a map of argument names to values")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
    let mut args = OptionalArgs::new();
    while let Some((name, value)) = map.next_entry::<String, OptionValue>()? {
      args.set(name, value);
    }
    Ok(args)
  }
}
