//! Agent and capability actions.

use bamboo_command::OptionalArgs;
use serde::Deserialize;

use crate::action::ActionDefaults;
use crate::base::Base;
use crate::common::{CommandSpec, FileArgs};
use crate::error::ActionError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnableAgent {
  pub agent: String,
}

impl CommandSpec for EnableAgent {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("enableAgent").quoted("agent", &self.agent).finish())
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisableAgent {
  pub agent: String,
}

impl CommandSpec for DisableAgent {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("disableAgent").quoted("agent", &self.agent).finish())
  }
}

/// List agents.
///
/// `select` picks rows by column value: `column:regex`, adjusted by
/// `options` such as `literal`, `exact` or `negative`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GetAgentList {
  pub exclude_disabled: bool,
  pub exclude_enabled: bool,
  pub options: Option<String>,
  pub columns: Option<String>,
  pub limit: Option<u32>,
  pub regex: Option<String>,
  #[serde(flatten)]
  pub file: FileArgs,
  pub select: Option<String>,
}

impl CommandSpec for GetAgentList {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getAgentList").finish())
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("excludeDisabled", self.exclude_disabled)
      .with("columns", self.columns.as_deref())
      .with("excludeEnabled", self.exclude_enabled)
      .with("options", self.options.as_deref())
      .with("limit", self.limit)
      .with("regex", self.regex.as_deref());
    self.file.apply(&mut args);
    args.set("select", self.select.as_deref());
    args
  }
}

/// Agent assignments, filterable by capability type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GetAgentAssignmentList {
  pub agent: Option<String>,
  #[serde(rename = "type")]
  pub capability_type: Option<String>,
  pub options: Option<String>,
  pub limit: Option<u32>,
  pub regex: Option<String>,
  #[serde(flatten)]
  pub file: FileArgs,
  pub select: Option<String>,
}

impl CommandSpec for GetAgentAssignmentList {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getAgentAssignmentList").finish())
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("agent", self.agent.as_deref())
      .with("type", self.capability_type.as_deref())
      .with("options", self.options.as_deref())
      .with("limit", self.limit)
      .with("regex", self.regex.as_deref());
    self.file.apply(&mut args);
    args.set("select", self.select.as_deref());
    args
  }
}

/// Shared or agent specific capabilities. Use `@all` as agent for both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GetCapabilityList {
  pub agent: Option<String>,
  /// e.g. `includeUnreferenced`.
  pub options: Option<String>,
  pub limit: Option<u32>,
  pub regex: Option<String>,
  pub columns: Option<String>,
  #[serde(flatten)]
  pub file: FileArgs,
  pub select: Option<String>,
}

impl CommandSpec for GetCapabilityList {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getCapabilityList").finish())
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("agent", self.agent.as_deref())
      .with("options", self.options.as_deref())
      .with("limit", self.limit)
      .with("regex", self.regex.as_deref())
      .with("columns", self.columns.as_deref());
    self.file.apply(&mut args);
    args.set("select", self.select.as_deref());
    args
  }
}
