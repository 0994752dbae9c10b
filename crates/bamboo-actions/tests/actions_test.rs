//! Rendering and sending actions.

use std::cell::RefCell;

use bamboo_actions::{Action, ActionDefaults, ActionError, BambooSession};
use bamboo_config::AcliConfig;
use bamboo_invoke::{ExecutionContext, ExecutionFailure, InvokeError, Invoker, Platform, ShellRunner};
use bamboo_task_registry::RegistryError;

fn action(json: &str) -> Action {
  serde_json::from_str(json).unwrap()
}

fn render(json: &str) -> String {
  action(json).to_command(&ActionDefaults::default()).unwrap()
}

#[derive(Default)]
struct RecordingRunner {
  calls: RefCell<Vec<String>>,
}

impl ShellRunner for RecordingRunner {
  fn run(&self, shell_command: &str) -> Result<Vec<u8>, ExecutionFailure> {
    self.calls.borrow_mut().push(shell_command.to_string());
    Ok(b"Plan created".to_vec())
  }
}

#[test]
fn test_add_task_canonicalizes_key() {
  assert_eq!(
    render(
      r#"{"action": "addTask", "task_key": "inject_variables", "field1": "namespace", "value1": "inject"}"#
    ),
    r#"--action addTask --plan @plan@ --job @job@ --taskKey "INJECT_VARIABLES" --field1 "namespace" --value1 "inject""#
  );
}

#[test]
fn test_add_task_unknown_key() {
  let err = action(r#"{"action": "addTask", "plan": "P-K", "job": "J", "task_key": "NOPE"}"#)
    .to_command(&ActionDefaults::default())
    .unwrap_err();

  match err {
    ActionError::Registry(RegistryError::NotFound { identifier }) => assert_eq!(identifier, "NOPE"),
    other => panic!("expected registry error, got {other:?}"),
  }
}

#[test]
fn test_add_job_chains_on_previous_objects() {
  assert_eq!(
    render(r#"{"action": "addJob", "job": "JOB1", "type": "Docker", "disable": false}"#),
    r#"--action addJob --plan @plan@ --stage @stage@ --job "JOB1" --type "Docker""#
  );
}

#[test]
fn test_queue_build_prefers_build_key() {
  assert_eq!(
    render(
      r#"{"action": "queueBuild", "plan": "ZCLI-TASKS", "build": "ZCLI-TASKS-12", "wait": true, "continues": true}"#
    ),
    r#"--action queueBuild --build "ZCLI-TASKS-12" --wait --continue"#
  );
}

#[test]
fn test_queue_build_needs_plan_or_build() {
  let err = action(r#"{"action": "queueBuild"}"#)
    .to_command(&ActionDefaults::default())
    .unwrap_err();
  assert!(matches!(
    err,
    ActionError::MissingField {
      action: "queueBuild",
      field: "plan"
    }
  ));
}

#[test]
fn test_remove_task_by_id() {
  assert_eq!(
    render(r#"{"action": "removeTask", "plan": "P-K", "job": "JOB1", "id": 4}"#),
    r#"--action removeTask --plan "P-K" --job "JOB1" --id "4""#
  );
}

#[test]
fn test_remove_requirement_id_is_unquoted() {
  assert_eq!(
    render(
      r#"{"action": "removeRequirement", "plan": "P-K", "job": "JOB1", "requirement": "system.docker.executable", "id": -1}"#
    ),
    r#"--action removeRequirement --plan "P-K" --job "JOB1" --requirement "system.docker.executable" --id -1"#
  );
  assert_eq!(
    render(r#"{"action": "removeRequirement", "plan": "P-K", "job": "JOB1", "requirement": "os"}"#),
    r#"--action removeRequirement --plan "P-K" --job "JOB1" --requirement "os""#
  );
}

#[test]
fn test_plan_list_renamed_flags() {
  let cmd = action(
    r#"{"action": "getPlanList", "favorite": true, "exclude_disabled": true, "limit": 5}"#,
  )
  .to_command(&ActionDefaults::with_project("ZCLI"))
  .unwrap();

  assert_eq!(
    cmd,
    r#"--action getPlanList --project "ZCLI" --favorite --excludeDisabled --limit "5""#
  );
}

#[test]
fn test_run_inputs_become_tokens() {
  assert_eq!(
    render(
      r#"{"action": "run", "inputs": ["--action getPlan --plan X", "--action getPlan --plan Y"], "continues": true}"#
    ),
    r#"--action run --input "--action getPlan --plan X" --input "--action getPlan --plan Y" --continue"#
  );
}

#[test]
fn test_enable_and_disable_plan() {
  assert_eq!(
    render(r#"{"action": "disablePlan", "plan": "ZCLI-TASKS"}"#),
    r#"--action disablePlan --plan "ZCLI-TASKS""#
  );
  assert_eq!(
    render(r#"{"action": "enablePlan", "plan": "ZCLI-TASKS"}"#),
    r#"--action enablePlan --plan "ZCLI-TASKS""#
  );
}

#[test]
fn test_enable_job_with_stage() {
  assert_eq!(
    render(r#"{"action": "enableJob", "plan": "P-K", "job": "JOB1", "stage": "Build"}"#),
    r#"--action enableJob --plan "P-K" --job "JOB1" --stage "Build""#
  );
}

#[test]
fn test_agent_actions() {
  assert_eq!(
    render(r#"{"action": "enableAgent", "agent": "build-01"}"#),
    r#"--action enableAgent --agent "build-01""#
  );
  assert_eq!(
    render(r#"{"action": "getAgentList", "exclude_enabled": true, "file": "agents.csv", "append": true}"#),
    r#"--action getAgentList --excludeEnabled --file "agents.csv" --append"#
  );
}

#[test]
fn test_session_render_uses_config_project() {
  let config = AcliConfig {
    install_dir: "/opt/acli".into(),
    server: "bamboo".into(),
    project: Some("ZCLI".into()),
    executable: "acli".into(),
  };
  let session = BambooSession::from_config(&config);

  assert_eq!(
    session.render(&action(r#"{"action": "getProject"}"#)).unwrap(),
    r#"--action getProject --project "ZCLI""#
  );
  assert_eq!(session.context().server, "bamboo");
}

#[test]
fn test_session_send_runs_rendered_command() {
  let dir = tempfile::tempdir().unwrap();
  let session = BambooSession::new(
    ExecutionContext::new(dir.path(), "bamboo"),
    ActionDefaults::with_project("Tasks"),
  )
  .with_invoker(Invoker::with_runner(RecordingRunner::default()).with_platform(Platform::Other));

  let output = session
    .send(&action(r#"{"action": "createPlan", "plan": "ZCLI-TASKS"}"#))
    .unwrap();

  assert_eq!(output.text(), "Plan created");
  assert_eq!(
    session.invoker().runner().calls.borrow().as_slice(),
    [format!(
      r#"cd "{}" && acli bamboo --action createPlan --plan "ZCLI-TASKS" --projectName "Tasks""#,
      dir.path().display()
    )]
  );
}

#[test]
fn test_session_send_without_project_spawns_nothing() {
  let dir = tempfile::tempdir().unwrap();
  let session = BambooSession::new(ExecutionContext::new(dir.path(), "bamboo"), ActionDefaults::default())
    .with_invoker(Invoker::with_runner(RecordingRunner::default()));

  let err = session.send(&action(r#"{"action": "getPlanList"}"#)).unwrap_err();

  assert!(matches!(err, ActionError::MissingField { field: "project", .. }));
  assert!(session.invoker().runner().calls.borrow().is_empty());
}

#[test]
fn test_session_send_raw_missing_dir() {
  let session = BambooSession::new(
    ExecutionContext::new("/no/such/acli/install", "bamboo"),
    ActionDefaults::default(),
  )
  .with_invoker(Invoker::with_runner(RecordingRunner::default()));

  let err = session.send_raw("--action getServerInfo").unwrap_err();

  assert!(matches!(
    err,
    ActionError::Invoke(InvokeError::Configuration { .. })
  ));
  assert!(session.invoker().runner().calls.borrow().is_empty());
}
