//! Build and run actions.

use bamboo_command::OptionalArgs;
use serde::Deserialize;

use crate::action::ActionDefaults;
use crate::base::Base;
use crate::common::{CommandSpec, FieldArgs, FileArgs};
use crate::error::ActionError;

/// Queue a build of a plan, or restart an existing build by build key.
///
/// `wait` blocks on the server side until the build completes or `timeout`
/// elapses; it is only forwarded here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueueBuild {
  pub plan: Option<String>,
  /// Build key; takes precedence over `plan`.
  pub build: Option<String>,
  pub branch: Option<String>,
  pub revision: Option<String>,
  pub number: Option<u32>,
  #[serde(default)]
  pub wait: bool,
  /// Continue manual stages up to this stage, or `@all`.
  pub stage: Option<String>,
  #[serde(default)]
  pub continues: bool,
  pub timeout: Option<u32>,
  pub date_format: Option<String>,
  #[serde(flatten)]
  pub fields: FieldArgs,
}

impl CommandSpec for QueueBuild {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    let base = Base::action("queueBuild");
    match (&self.build, &self.plan) {
      (Some(build), _) => Ok(base.quoted("build", build).finish()),
      (None, Some(plan)) => Ok(base.quoted("plan", plan).finish()),
      (None, None) => Err(ActionError::missing("queueBuild", "plan")),
    }
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("branch", self.branch.as_deref())
      .with("revision", self.revision.as_deref())
      .with("number", self.number)
      .with("wait", self.wait)
      .with("stage", self.stage.as_deref())
      .with("continues", self.continues)
      .with("timeout", self.timeout)
      .with("dateFormat", self.date_format.as_deref());
    self.fields.apply(&mut args);
    args
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RestartBuild {
  pub plan: String,
  #[serde(default)]
  pub wait: bool,
  pub stage: Option<String>,
  pub timeout: Option<u32>,
  #[serde(default)]
  pub continues: bool,
}

impl CommandSpec for RestartBuild {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("restartBuild").quoted("plan", &self.plan).finish())
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("wait", self.wait)
      .with("stage", self.stage.as_deref())
      .with("timeout", self.timeout)
      .with("continues", self.continues)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopBuild {
  pub plan: String,
  #[serde(default)]
  pub wait: bool,
  pub timeout: Option<u32>,
  #[serde(default)]
  pub continues: bool,
}

impl CommandSpec for StopBuild {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("stopBuild").quoted("plan", &self.plan).finish())
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("wait", self.wait)
      .with("timeout", self.timeout)
      .with("continues", self.continues)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetBuild {
  pub build: String,
  pub number: Option<u32>,
  pub file: Option<String>,
  pub encoding: Option<String>,
  pub date_format: Option<String>,
}

impl CommandSpec for GetBuild {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getBuild").quoted("build", &self.build).finish())
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("number", self.number)
      .with("file", self.file.as_deref())
      .with("encoding", self.encoding.as_deref())
      .with("dateFormat", self.date_format.as_deref())
  }
}

/// Build log lines, optionally filtered by regex and rewritten with
/// `find:replace` pairs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetBuildLog {
  pub build: String,
  pub job: Option<String>,
  pub number: Option<u32>,
  pub limit: Option<u32>,
  pub regex: Option<String>,
  pub find_replace: Option<String>,
  pub find_replace_regex: Option<String>,
  pub file: Option<String>,
  pub encoding: Option<String>,
}

impl CommandSpec for GetBuildLog {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getBuildLog").quoted("build", &self.build).finish())
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("job", self.job.as_deref())
      .with("number", self.number)
      .with("file", self.file.as_deref())
      .with("encoding", self.encoding.as_deref())
      .with("limit", self.limit)
      .with("regex", self.regex.as_deref())
      .with("findReplace", self.find_replace.as_deref())
      .with("findReplaceRegex", self.find_replace_regex.as_deref())
  }
}

/// Build results, filterable by labels, issues and `state`/`started` fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetBuildList {
  pub plan: String,
  pub labels: Option<String>,
  pub issues: Option<String>,
  pub limit: Option<u32>,
  pub columns: Option<String>,
  #[serde(flatten)]
  pub file: FileArgs,
  #[serde(flatten)]
  pub fields: FieldArgs,
  pub date_format: Option<String>,
  pub output_format: Option<u32>,
}

impl CommandSpec for GetBuildList {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getBuildList").quoted("plan", &self.plan).finish())
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("labels", self.labels.as_deref())
      .with("issues", self.issues.as_deref())
      .with("limit", self.limit)
      .with("columns", self.columns.as_deref());
    self.file.apply(&mut args);
    self.fields.apply(&mut args);
    args.set("dateFormat", self.date_format.as_deref());
    args.set("outputFormat", self.output_format);
    args
  }
}

/// Run actions from a file, from a list of inputs, or from standard input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Run {
  pub file: Option<String>,
  /// Each entry becomes one `--input "<entry>"` token.
  pub inputs: Vec<String>,
  /// Command applied to every entry of the file or input list.
  pub common: Option<String>,
  pub continues: bool,
  /// Log the actions that would be taken without running them.
  pub simulate: bool,
  pub field: Option<String>,
  pub encoding: Option<String>,
  pub clear_file_before_append: bool,
  pub find_replace: Option<String>,
  pub find_replace_regex: Option<String>,
  pub date_format: Option<String>,
}

impl CommandSpec for Run {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    let base = self
      .inputs
      .iter()
      .fold(Base::action("run"), |base, input| base.quoted("input", input));
    Ok(base.finish())
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("file", self.file.as_deref())
      .with("common", self.common.as_deref())
      .with("continues", self.continues)
      .with("simulate", self.simulate)
      .with("field", self.field.as_deref())
      .with("encoding", self.encoding.as_deref())
      .with("clearFileBeforeAppend", self.clear_file_before_append)
      .with("findReplace", self.find_replace.as_deref())
      .with("findReplaceRegex", self.find_replace_regex.as_deref())
      .with("dateFormat", self.date_format.as_deref())
  }
}
