//! Argument groups shared by several actions.

use bamboo_command::OptionalArgs;
use serde::Deserialize;

use crate::action::ActionDefaults;
use crate::error::ActionError;

/// Builds the command for one action.
pub(crate) trait CommandSpec {
  /// The fixed prefix, including mandatory flags.
  fn base(&self, defaults: &ActionDefaults) -> Result<String, ActionError>;

  /// Optional flags, in emission order.
  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
  }
}

/// Generic field setters: `--field key=value` or `--field1 key --value1 value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldArgs {
  pub field: Option<String>,
  /// Comma separated `key:value` pairs.
  pub fields: Option<String>,
  pub field1: Option<String>,
  pub value1: Option<String>,
  pub field2: Option<String>,
  pub value2: Option<String>,
}

impl FieldArgs {
  pub(crate) fn apply(&self, args: &mut OptionalArgs) {
    args.set("field", self.field.as_deref());
    args.set("fields", self.fields.as_deref());
    args.set("field1", self.field1.as_deref());
    args.set("value1", self.value1.as_deref());
    args.set("field2", self.field2.as_deref());
    args.set("value2", self.value2.as_deref());
  }
}

/// Output file handling for actions that can write their result to a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileArgs {
  pub file: Option<String>,
  pub append: bool,
  pub encoding: Option<String>,
}

impl FileArgs {
  pub(crate) fn apply(&self, args: &mut OptionalArgs) {
    args.set("file", self.file.as_deref());
    args.set("append", self.append);
    args.set("encoding", self.encoding.as_deref());
  }
}

pub(crate) fn default_true() -> bool {
  true
}
