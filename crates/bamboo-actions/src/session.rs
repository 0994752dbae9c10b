use bamboo_config::AcliConfig;
use bamboo_invoke::{ExecutionContext, InvokeOutput, Invoker, ShellRunner, SystemShell};
use tracing::{debug, instrument};

use crate::action::{Action, ActionDefaults};
use crate::error::ActionError;

/// A configured connection to one acli server profile.
#[derive(Debug, Clone)]
pub struct BambooSession<R = SystemShell> {
  defaults: ActionDefaults,
  context: ExecutionContext,
  invoker: Invoker<R>,
}

impl BambooSession<SystemShell> {
  pub fn new(context: ExecutionContext, defaults: ActionDefaults) -> Self {
    Self {
      defaults,
      context,
      invoker: Invoker::new(),
    }
  }

  pub fn from_config(config: &AcliConfig) -> Self {
    Self::new(
      config.context(),
      ActionDefaults {
        project: config.project.clone(),
      },
    )
  }
}

impl<R: ShellRunner> BambooSession<R> {
  /// Replace the invoker, e.g. with one backed by a test runner.
  pub fn with_invoker<T: ShellRunner>(self, invoker: Invoker<T>) -> BambooSession<T> {
    BambooSession {
      defaults: self.defaults,
      context: self.context,
      invoker,
    }
  }

  pub fn defaults(&self) -> &ActionDefaults {
    &self.defaults
  }

  pub fn context(&self) -> &ExecutionContext {
    &self.context
  }

  pub fn invoker(&self) -> &Invoker<R> {
    &self.invoker
  }

  /// The serialized command for `action`, without running it.
  pub fn render(&self, action: &Action) -> Result<String, ActionError> {
    action.to_command(&self.defaults)
  }

  /// Render `action` and run it.
  #[instrument(skip(self, action), fields(action = action.name()))]
  pub fn send(&self, action: &Action) -> Result<InvokeOutput, ActionError> {
    let command = self.render(action)?;
    debug!(command = %command, "rendered action");
    self.send_raw(&command)
  }

  /// Run a command that was serialized elsewhere.
  pub fn send_raw(&self, command: &str) -> Result<InvokeOutput, ActionError> {
    Ok(self.invoker.invoke(&self.context, command)?)
  }
}
