use bamboo_command::serialize;
use serde::Deserialize;

use crate::agent::*;
use crate::build::*;
use crate::common::CommandSpec;
use crate::error::ActionError;
use crate::job::*;
use crate::plan::*;

/// Session-wide values that actions fall back to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionDefaults {
  /// Default project key for project-scoped actions.
  pub project: Option<String>,
}

impl ActionDefaults {
  pub fn with_project(project: impl Into<String>) -> Self {
    Self {
      project: Some(project.into()),
    }
  }

  /// The given project, or the default one.
  pub(crate) fn project_or<'a>(
    &'a self,
    given: Option<&'a str>,
    action: &'static str,
  ) -> Result<&'a str, ActionError> {
    given
      .or(self.project.as_deref())
      .ok_or_else(|| ActionError::missing(action, "project"))
  }
}

/// An acli action and its arguments.
///
/// Deserializes from JSON tagged by the acli action name:
///
/// ```json
/// { "action": "createPlan", "plan": "ZCLI-TASKS", "replace": true }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
  CreatePlan(CreatePlan),
  GetPlan(GetPlan),
  GetPlanList(GetPlanList),
  GetProject(GetProject),
  DeletePlan(DeletePlan),
  EnablePlan(EnablePlan),
  DisablePlan(DisablePlan),
  AddRepository(AddRepository),
  AddBranch(AddBranch),
  GetBranchList(GetBranchList),
  UpdateBranchingOptions(UpdateBranchingOptions),
  AddStage(AddStage),
  GetStage(GetStage),
  GetStageList(GetStageList),
  RemoveStage(RemoveStage),
  AddJob(AddJob),
  GetJob(GetJob),
  GetJobList(GetJobList),
  EnableJob(EnableJob),
  DisableJob(DisableJob),
  RemoveJob(RemoveJob),
  AddTask(AddTask),
  GetTask(GetTask),
  RemoveTask(RemoveTask),
  AddRequirement(AddRequirement),
  RemoveRequirement(RemoveRequirement),
  QueueBuild(QueueBuild),
  RestartBuild(RestartBuild),
  StopBuild(StopBuild),
  GetBuild(GetBuild),
  GetBuildLog(GetBuildLog),
  GetBuildList(GetBuildList),
  Run(Run),
  EnableAgent(EnableAgent),
  DisableAgent(DisableAgent),
  GetAgentList(GetAgentList),
  GetAgentAssignmentList(GetAgentAssignmentList),
  GetCapabilityList(GetCapabilityList),
}

impl Action {
  /// The acli action name, e.g. `createPlan`.
  pub fn name(&self) -> &'static str {
    match self {
      Action::CreatePlan(_) => "createPlan",
      Action::GetPlan(_) => "getPlan",
      Action::GetPlanList(_) => "getPlanList",
      Action::GetProject(_) => "getProject",
      Action::DeletePlan(_) => "deletePlan",
      Action::EnablePlan(_) => "enablePlan",
      Action::DisablePlan(_) => "disablePlan",
      Action::AddRepository(_) => "addRepository",
      Action::AddBranch(_) => "addBranch",
      Action::GetBranchList(_) => "getBranchList",
      Action::UpdateBranchingOptions(_) => "updateBranchingOptions",
      Action::AddStage(_) => "addStage",
      Action::GetStage(_) => "getStage",
      Action::GetStageList(_) => "getStageList",
      Action::RemoveStage(_) => "removeStage",
      Action::AddJob(_) => "addJob",
      Action::GetJob(_) => "getJob",
      Action::GetJobList(_) => "getJobList",
      Action::EnableJob(_) => "enableJob",
      Action::DisableJob(_) => "disableJob",
      Action::RemoveJob(_) => "removeJob",
      Action::AddTask(_) => "addTask",
      Action::GetTask(_) => "getTask",
      Action::RemoveTask(_) => "removeTask",
      Action::AddRequirement(_) => "addRequirement",
      Action::RemoveRequirement(_) => "removeRequirement",
      Action::QueueBuild(_) => "queueBuild",
      Action::RestartBuild(_) => "restartBuild",
      Action::StopBuild(_) => "stopBuild",
      Action::GetBuild(_) => "getBuild",
      Action::GetBuildLog(_) => "getBuildLog",
      Action::GetBuildList(_) => "getBuildList",
      Action::Run(_) => "run",
      Action::EnableAgent(_) => "enableAgent",
      Action::DisableAgent(_) => "disableAgent",
      Action::GetAgentList(_) => "getAgentList",
      Action::GetAgentAssignmentList(_) => "getAgentAssignmentList",
      Action::GetCapabilityList(_) => "getCapabilityList",
    }
  }

  /// Build the serialized acli command for this action.
  pub fn to_command(&self, defaults: &ActionDefaults) -> Result<String, ActionError> {
    let spec: &dyn CommandSpec = match self {
      Action::CreatePlan(a) => a,
      Action::GetPlan(a) => a,
      Action::GetPlanList(a) => a,
      Action::GetProject(a) => a,
      Action::DeletePlan(a) => a,
      Action::EnablePlan(a) => a,
      Action::DisablePlan(a) => a,
      Action::AddRepository(a) => a,
      Action::AddBranch(a) => a,
      Action::GetBranchList(a) => a,
      Action::UpdateBranchingOptions(a) => a,
      Action::AddStage(a) => a,
      Action::GetStage(a) => a,
      Action::GetStageList(a) => a,
      Action::RemoveStage(a) => a,
      Action::AddJob(a) => a,
      Action::GetJob(a) => a,
      Action::GetJobList(a) => a,
      Action::EnableJob(a) => a,
      Action::DisableJob(a) => a,
      Action::RemoveJob(a) => a,
      Action::AddTask(a) => a,
      Action::GetTask(a) => a,
      Action::RemoveTask(a) => a,
      Action::AddRequirement(a) => a,
      Action::RemoveRequirement(a) => a,
      Action::QueueBuild(a) => a,
      Action::RestartBuild(a) => a,
      Action::StopBuild(a) => a,
      Action::GetBuild(a) => a,
      Action::GetBuildLog(a) => a,
      Action::GetBuildList(a) => a,
      Action::Run(a) => a,
      Action::EnableAgent(a) => a,
      Action::DisableAgent(a) => a,
      Action::GetAgentList(a) => a,
      Action::GetAgentAssignmentList(a) => a,
      Action::GetCapabilityList(a) => a,
    };

    let base = spec.base(defaults)?;
    Ok(serialize(&base, &spec.options()))
  }
}
