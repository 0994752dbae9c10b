/// Builds the fixed part of a command: the action name and its
/// positional/mandatory flags.
pub(crate) struct Base {
  command: String,
}

impl Base {
  pub(crate) fn action(name: &str) -> Self {
    Self {
      command: format!("--action {name}"),
    }
  }

  /// `--flag "value"`
  pub(crate) fn quoted(mut self, flag: &str, value: &str) -> Self {
    self.command.push_str(&format!(" --{flag} \"{value}\""));
    self
  }

  /// `--flag value`, unquoted.
  pub(crate) fn raw(mut self, flag: &str, value: &str) -> Self {
    self.command.push_str(&format!(" --{flag} {value}"));
    self
  }

  /// Quoted value when given, otherwise an acli replacement variable such
  /// as `@plan@` referring to the object created earlier in a run script.
  pub(crate) fn reference(self, flag: &str, value: Option<&str>, variable: &str) -> Self {
    match value {
      Some(v) => self.quoted(flag, v),
      None => self.raw(flag, variable),
    }
  }

  pub(crate) fn finish(self) -> String {
    self.command
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_tokens() {
    let base = Base::action("addJob")
      .reference("plan", None, "@plan@")
      .reference("stage", Some("Stage 1"), "@stage@")
      .quoted("job", "JOB1")
      .raw("id", "2")
      .finish();

    assert_eq!(
      base,
      r#"--action addJob --plan @plan@ --stage "Stage 1" --job "JOB1" --id 2"#
    );
  }
}
