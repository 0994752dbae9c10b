//! Bamboo Actions
//!
//! Typed Bamboo acli actions. Each action knows its fixed command prefix
//! and its optional flags; [`Action::to_command`] joins them through
//! [`bamboo_command::serialize`] and [`BambooSession`] hands the result to
//! [`bamboo_invoke::Invoker`].
//!
//! Actions deserialize from JSON tagged by name:
//!
//! ```
//! use bamboo_actions::{Action, ActionDefaults};
//!
//! let action: Action = serde_json::from_str(
//!   r#"{"action": "addTask", "plan": "ZCLI-TASKS", "job": "JOB1", "task_key": "script"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!   action.to_command(&ActionDefaults::default()).unwrap(),
//!   r#"--action addTask --plan "ZCLI-TASKS" --job "JOB1" --taskKey "SCRIPT""#,
//! );
//! ```

mod action;
mod agent;
mod base;
mod build;
mod common;
mod error;
mod job;
mod plan;
mod session;

pub use action::{Action, ActionDefaults};
pub use agent::{
  DisableAgent, EnableAgent, GetAgentAssignmentList, GetAgentList, GetCapabilityList,
};
pub use build::{GetBuild, GetBuildList, GetBuildLog, QueueBuild, RestartBuild, Run, StopBuild};
pub use common::{FieldArgs, FileArgs};
pub use error::ActionError;
pub use job::{
  AddJob, AddRequirement, AddStage, AddTask, DisableJob, EnableJob, GetJob, GetJobList, GetStage,
  GetStageList, GetTask, JobToggle, RemoveJob, RemoveRequirement, RemoveStage, RemoveTask,
};
pub use plan::{
  AddBranch, AddRepository, CreatePlan, DeletePlan, DisablePlan, EnablePlan, GetBranchList,
  GetPlan, GetPlanList, GetProject, UpdateBranchingOptions,
};
pub use session::BambooSession;
