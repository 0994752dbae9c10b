//! Plan, project, branch and repository actions.

use bamboo_command::OptionalArgs;
use serde::Deserialize;

use crate::action::ActionDefaults;
use crate::base::Base;
use crate::common::{CommandSpec, FieldArgs, FileArgs, default_true};
use crate::error::ActionError;

/// Create a plan. The first part of the 2-part plan key is the project key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatePlan {
  pub plan: String,
  /// Project name used if the project has to be created. Falls back to
  /// the session's default project; one of the two is required.
  pub project_name: Option<String>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub repository: Option<String>,
  #[serde(default)]
  pub disable: bool,
  #[serde(default)]
  pub replace: bool,
  /// Ignore the request if the plan already exists.
  #[serde(default)]
  pub continues: bool,
  /// `clear`, `addDefaultJob` or `removeTrigger`.
  pub options: Option<String>,
}

impl CommandSpec for CreatePlan {
  fn base(&self, defaults: &ActionDefaults) -> Result<String, ActionError> {
    let project = defaults.project_or(self.project_name.as_deref(), "createPlan")?;
    Ok(
      Base::action("createPlan")
        .quoted("plan", &self.plan)
        .quoted("projectName", project)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("name", self.name.as_deref())
      .with("description", self.description.as_deref())
      .with("repository", self.repository.as_deref())
      .with("disable", self.disable)
      .with("replace", self.replace)
      .with("continues", self.continues)
      .with("options", self.options.as_deref())
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetPlan {
  pub plan: String,
}

impl CommandSpec for GetPlan {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getPlan").quoted("plan", &self.plan).finish())
  }
}

/// List plans of a project. Use `@all` for every project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetPlanList {
  pub project: Option<String>,
  #[serde(default)]
  pub favorite: bool,
  #[serde(default)]
  pub exclude_disabled: bool,
  #[serde(default)]
  pub exclude_enabled: bool,
  pub labels: Option<String>,
  /// e.g. `includeBranchPlans` or `usingRepository=xxx`.
  pub options: Option<String>,
  pub limit: Option<u32>,
  pub regex: Option<String>,
  pub output_format: Option<u32>,
  pub date_format: Option<String>,
  pub columns: Option<String>,
  #[serde(flatten)]
  pub file: FileArgs,
  #[serde(flatten)]
  pub fields: FieldArgs,
}

impl CommandSpec for GetPlanList {
  fn base(&self, defaults: &ActionDefaults) -> Result<String, ActionError> {
    let project = defaults.project_or(self.project.as_deref(), "getPlanList")?;
    Ok(Base::action("getPlanList").quoted("project", project).finish())
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("favorite", self.favorite)
      .with("excludeDisabled", self.exclude_disabled)
      .with("excludeEnabled", self.exclude_enabled)
      .with("labels", self.labels.as_deref())
      .with("options", self.options.as_deref())
      .with("limit", self.limit)
      .with("regex", self.regex.as_deref())
      .with("outputFormat", self.output_format)
      .with("dateFormat", self.date_format.as_deref())
      .with("columns", self.columns.as_deref());
    self.file.apply(&mut args);
    self.fields.apply(&mut args);
    args
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetProject {
  pub project: Option<String>,
}

impl CommandSpec for GetProject {
  fn base(&self, defaults: &ActionDefaults) -> Result<String, ActionError> {
    let project = defaults.project_or(self.project.as_deref(), "getProject")?;
    Ok(Base::action("getProject").quoted("project", project).finish())
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeletePlan {
  pub plan: String,
}

impl CommandSpec for DeletePlan {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("deletePlan").quoted("plan", &self.plan).finish())
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnablePlan {
  pub plan: String,
}

impl CommandSpec for EnablePlan {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("enablePlan").quoted("plan", &self.plan).finish())
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisablePlan {
  pub plan: String,
}

impl CommandSpec for DisablePlan {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("disablePlan").quoted("plan", &self.plan).finish())
  }
}

/// Add a global or plan repository.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddRepository {
  /// Plan key, `@plan@` when omitted.
  pub plan: Option<String>,
  pub name: String,
  /// Repository key or alias such as `GIT` or `BITBUCKET_SERVER`.
  pub repository_key: Option<String>,
  pub credentials: Option<String>,
  pub branch: Option<String>,
  #[serde(default)]
  pub continues: bool,
  #[serde(default)]
  pub replace: bool,
  #[serde(flatten)]
  pub fields: FieldArgs,
}

impl CommandSpec for AddRepository {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("addRepository")
        .reference("plan", self.plan.as_deref(), "@plan@")
        .quoted("name", &self.name)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("branch", self.branch.as_deref())
      .with("repositoryKey", self.repository_key.as_deref())
      .with("credentials", self.credentials.as_deref())
      .with("replace", self.replace)
      .with("continues", self.continues);
    self.fields.apply(&mut args);
    args
  }
}

/// Add a plan branch for a repository branch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddBranch {
  pub plan: Option<String>,
  pub branch: String,
  pub name: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub continues: bool,
  #[serde(default = "default_true")]
  pub enable: bool,
}

impl CommandSpec for AddBranch {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("addBranch")
        .reference("plan", self.plan.as_deref(), "@plan@")
        .quoted("branch", &self.branch)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    OptionalArgs::new()
      .with("name", self.name.as_deref())
      .with("description", self.description.as_deref())
      .with("continues", self.continues)
      .with("enable", self.enable)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetBranchList {
  pub plan: String,
  pub limit: Option<u32>,
  pub regex: Option<String>,
  pub columns: Option<String>,
  #[serde(flatten)]
  pub file: FileArgs,
}

impl CommandSpec for GetBranchList {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(Base::action("getBranchList").quoted("plan", &self.plan).finish())
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new()
      .with("limit", self.limit)
      .with("regex", self.regex.as_deref())
      .with("columns", self.columns.as_deref());
    self.file.apply(&mut args);
    args
  }
}

/// Update branching options. See `getBranchingOptions` for the fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateBranchingOptions {
  pub plan: String,
  #[serde(flatten)]
  pub fields: FieldArgs,
  pub file: Option<String>,
  pub encoding: Option<String>,
}

impl CommandSpec for UpdateBranchingOptions {
  fn base(&self, _: &ActionDefaults) -> Result<String, ActionError> {
    Ok(
      Base::action("updateBranchingOptions")
        .quoted("plan", &self.plan)
        .finish(),
    )
  }

  fn options(&self) -> OptionalArgs {
    let mut args = OptionalArgs::new();
    self.fields.apply(&mut args);
    args.set("file", self.file.as_deref());
    args.set("encoding", self.encoding.as_deref());
    args
  }
}
