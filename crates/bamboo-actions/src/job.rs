//! Stage, job, task and requirement actions.

use bamboo_command::OptionalArgs;
use bamboo_task_registry::TaskRegistry;
use serde::Deserialize;

use crate::action::ActionDefaults;
use crate::base::Base;
use crate::common::{CommandSpec, FieldArgs, FileArgs};
use crate::error::ActionError;

/// Add a stage to a plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddStage {
  /// Plan key, `@plan@` when omitted.
  pub plan: Option<String>,
  pub stage: String,
  pub name: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub manual: bool,
  #[serde(default)]
  pub r#final: bool,
  #[serde(default)]
  pub continues: bool,
}

impl CommandSpec for AddStage {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("addStage")
        .reference("plan", self.plan.as_deref(), "@plan@")
        .quoted("stage", &self.stage)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("name", self.name.as_deref())
      .with("description", self.description.as_deref())
      .with("manual", self.manual)
      .with("final", self.r#final)
      .with("continues", self.continues)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetStage {
  pub plan: String,
  pub stage: String,
}

impl CommandSpec for GetStage {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("getStage")
        .quoted("plan", &self.plan)
        .quoted("stage", &self.stage)
        .finish(),
    )
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetStageList {
  pub plan: String,
  pub regex: Option<String>,
  pub columns: Option<String>,
  #[serde(flatten)]
  pub file: FileArgs,
}

impl CommandSpec for GetStageList {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getStageList").quoted("plan", &self.plan).finish())
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("regex", self.regex.as_deref())
      .with("columns", self.columns.as_deref());
    self.file.apply(&mut args);
    args
  }
}

/// Remove a stage. With `wait`, waits for running builds to finish first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoveStage {
  pub plan: String,
  pub stage: String,
  #[serde(default)]
  pub wait: bool,
  pub timeout: Option<u32>,
  #[serde(default)]
  pub continues: bool,
}

impl CommandSpec for RemoveStage {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("removeStage")
        .quoted("plan", &self.plan)
        .quoted("stage", &self.stage)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("wait", self.wait)
      .with("timeout", self.timeout)
      .with("continues", self.continues)
  }
}

/// Add a job to a stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddJob {
  pub plan: Option<String>,
  /// Stage name, `@stage@` when omitted.
  pub stage: Option<String>,
  pub job: String,
  pub name: Option<String>,
  pub description: Option<String>,
  /// Job type, e.g. `Docker`.
  #[serde(rename = "type")]
  pub job_type: Option<String>,
  pub docker: Option<String>,
  #[serde(default)]
  pub disable: bool,
}

impl CommandSpec for AddJob {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("addJob")
        .reference("plan", self.plan.as_deref(), "@plan@")
        .reference("stage", self.stage.as_deref(), "@stage@")
        .quoted("job", &self.job)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("name", self.name.as_deref())
      .with("description", self.description.as_deref())
      .with("type", self.job_type.as_deref())
      .with("docker", self.docker.as_deref())
      .with("disable", self.disable)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetJob {
  pub plan: String,
  pub job: String,
}

impl CommandSpec for GetJob {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("getJob")
        .quoted("plan", &self.plan)
        .quoted("job", &self.job)
        .finish(),
    )
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetJobList {
  pub plan: String,
  pub stage: Option<String>,
  pub limit: Option<u32>,
  pub regex: Option<String>,
  pub columns: Option<String>,
  #[serde(flatten)]
  pub file: FileArgs,
}

impl CommandSpec for GetJobList {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getJobList").quoted("plan", &self.plan).finish())
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("stage", self.stage.as_deref())
      .with("limit", self.limit)
      .with("regex", self.regex.as_deref())
      .with("columns", self.columns.as_deref());
    self.file.apply(&mut args);
    args
  }
}

/// Enable or disable a job, optionally scoped to a stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobToggle {
  pub plan: String,
  pub job: String,
  pub stage: Option<String>,
}

impl JobToggle {
  fn command(&self, action: &str) -> String {
    Base::action(action)
      .quoted("plan", &self.plan)
      .quoted("job", &self.job)
      .finish()
  }

  fn stage_args(&self) -> OptionalArgs {
    OptionalArgs::new().with("stage", self.stage.as_deref())
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EnableJob(pub JobToggle);

impl CommandSpec for EnableJob {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(self.0.command("enableJob"))
  }

  fn options(&self) -> OptionalArgs {
    self.0.stage_args()
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DisableJob(pub JobToggle);

impl CommandSpec for DisableJob {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(self.0.command("disableJob"))
  }

  fn options(&self) -> OptionalArgs {
    self.0.stage_args()
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoveJob {
  pub plan: String,
  pub job: String,
  #[serde(default)]
  pub continues: bool,
}

impl CommandSpec for RemoveJob {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("removeJob")
        .quoted("plan", &self.plan)
        .quoted("job", &self.job)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new().with("continues", self.continues)
  }
}

/// Add a task to a job. The task key is canonicalized against the task
/// catalog, so `script` becomes `SCRIPT`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddTask {
  pub plan: Option<String>,
  /// Job key, `@job@` when omitted.
  pub job: Option<String>,
  pub task_key: String,
  pub description: Option<String>,
  #[serde(default)]
  pub disable: bool,
  #[serde(default)]
  pub r#final: bool,
  #[serde(flatten)]
  pub fields: FieldArgs,
}

impl CommandSpec for AddTask {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    let task_key = TaskRegistry::global().resolve(&self.task_key)?;
    Ok(
      Base::action("addTask")
        .reference("plan", self.plan.as_deref(), "@plan@")
        .reference("job", self.job.as_deref(), "@job@")
        .quoted("taskKey", task_key)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("description", self.description.as_deref())
      .with("disable", self.disable)
      .with("final", self.r#final);
    self.fields.apply(&mut args);
    args
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetTask {
  pub plan: String,
  pub job: String,
  pub task: String,
}

impl CommandSpec for GetTask {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("getTask")
        .quoted("plan", &self.plan)
        .quoted("job", &self.job)
        .quoted("task", &self.task)
        .finish(),
    )
  }
}

/// Remove a task by name or id. `@all` removes every task.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoveTask {
  pub plan: String,
  pub job: String,
  pub task: Option<String>,
  pub id: Option<i64>,
}

impl CommandSpec for RemoveTask {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    let base = Base::action("removeTask")
      .quoted("plan", &self.plan)
      .quoted("job", &self.job);
    match (&self.task, self.id) {
      (Some(task), _) => Ok(base.quoted("task", task).finish()),
      (None, Some(id)) => Ok(base.quoted("id", &id.to_string()).finish()),
      (None, None) => Err(ActionError::missing("removeTask", "task")),
    }
  }
}

/// Add a requirement to a job. Type defaults to EXISTS on the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddRequirement {
  pub plan: Option<String>,
  pub job: Option<String>,
  pub requirement: String,
  /// e.g. `equal`.
  #[serde(rename = "type")]
  pub requirement_type: Option<String>,
  pub value: Option<String>,
}

impl CommandSpec for AddRequirement {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("addRequirement")
        .reference("plan", self.plan.as_deref(), "@plan@")
        .reference("job", self.job.as_deref(), "@job@")
        .quoted("requirement", &self.requirement)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("type", self.requirement_type.as_deref())
      .with("value", self.value.as_deref())
  }
}

/// Remove a requirement. An id of -1 removes every removable requirement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoveRequirement {
  pub plan: String,
  pub job: String,
  pub requirement: String,
  pub id: Option<i64>,
}

impl CommandSpec for RemoveRequirement {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    let base = Base::action("removeRequirement")
      .quoted("plan", &self.plan)
      .quoted("job", &self.job)
      .quoted("requirement", &self.requirement);
    Ok(match self.id {
      Some(id) => base.raw("id", &id.to_string()).finish(),
      None => base.finish(),
    })
  }
}
