use crate::args::OptionalArgs;
use crate::value::OptionValue;

/// Argument names rendered as a fixed literal flag instead of `--name`.
///
/// Names are matched case-insensitively.
pub const RENAMED_FLAGS: &[(&str, &str)] = &[
  ("continues", "--continue"),
  ("favorite", "--favorite"),
  ("exclude_disabled", "--exclude_disabled"),
  ("exclude_enabled", "--exclude_enabled"),
];

/// Look up the literal flag for a renamed argument.
pub fn renamed_flag(name: &str) -> Option<&'static str> {
  RENAMED_FLAGS
    .iter()
    .find(|(renamed, _)| renamed.eq_ignore_ascii_case(name))
    .map(|(_, flag)| *flag)
}

/// Serialize a base command and its optional arguments into one string.
///
/// Tokens are emitted in insertion order and joined with single spaces.
/// Absent and `false` values are skipped entirely.
pub fn serialize(base: &str, options: &OptionalArgs) -> String {
  let mut tokens = vec![base.to_string()];
  tokens.extend(options.iter().filter_map(|(name, value)| render(name, value)));
  tokens.join(" ")
}

fn render(name: &str, value: &OptionValue) -> Option<String> {
  if !value.is_present() {
    return None;
  }
  if let Some(flag) = renamed_flag(name) {
    return Some(flag.to_string());
  }
  match value {
    OptionValue::Flag(_) => Some(format!("--{name}")),
    OptionValue::Scalar(v) => Some(format!("--{name} \"{v}\"")),
    OptionValue::Absent => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_create_plan_example() {
    let args = OptionalArgs::new()
      .with("projectName", "P")
      .with("replace", true)
      .with("disable", None::<String>);

    assert_eq!(
      serialize(r#"--action createPlan --plan "X""#, &args),
      r#"--action createPlan --plan "X" --projectName "P" --replace"#
    );
  }

  #[test]
  fn test_absent_and_false_elided() {
    let args = OptionalArgs::new()
      .with("a", OptionValue::Absent)
      .with("b", false)
      .with("continues", false)
      .with("favorite", None::<bool>);

    assert_eq!(serialize("--action getPlan", &args), "--action getPlan");
    assert_eq!(serialize("--action getPlan", &OptionalArgs::new()), "--action getPlan");
  }

  #[test]
  fn test_renamed_flags_with_true() {
    let args = OptionalArgs::new()
      .with("continues", true)
      .with("favorite", true)
      .with("exclude_disabled", true)
      .with("exclude_enabled", true);

    assert_eq!(
      serialize("base", &args),
      "base --continue --favorite --exclude_disabled --exclude_enabled"
    );
  }

  #[test]
  fn test_renamed_flags_ignore_scalar_content() {
    let args = OptionalArgs::new().with("continues", "yes please");
    assert_eq!(serialize("base", &args), "base --continue");
  }

  #[test]
  fn test_renamed_flags_match_case_insensitively() {
    assert_eq!(renamed_flag("CONTINUES"), Some("--continue"));
    assert_eq!(renamed_flag("Exclude_Enabled"), Some("--exclude_enabled"));
    assert_eq!(renamed_flag("continue"), None);
  }

  #[test]
  fn test_bare_flag_for_true() {
    let args = OptionalArgs::new().with("wait", true).with("simulate", true);
    assert_eq!(serialize("base", &args), "base --wait --simulate");
  }

  #[test]
  fn test_scalar_is_quoted_verbatim() {
    let args = OptionalArgs::new()
      .with("regex", "TEST2.*")
      .with("limit", 25u32)
      .with("fields", "a:'b',c:d");

    let out = serialize("base", &args);
    assert_eq!(out, r#"base --regex "TEST2.*" --limit "25" --fields "a:'b',c:d""#);
  }

  #[test]
  fn test_scalar_token_splits_back() {
    let args = OptionalArgs::new().with("dateFormat", "yyyy-MM-dd HH:mm:ss");
    let out = serialize("", &args);
    let token = out.trim_start();

    let (flag, quoted) = token.split_once(" \"").unwrap();
    assert_eq!(flag.trim_start_matches("--"), "dateFormat");
    assert_eq!(quoted.strip_suffix('"').unwrap(), "yyyy-MM-dd HH:mm:ss");
  }

  #[test]
  fn test_embedded_quotes_not_escaped() {
    let args = OptionalArgs::new().with("comment", r#"say "hi""#);
    assert_eq!(serialize("base", &args), r#"base --comment "say "hi"""#);
  }

  #[test]
  fn test_order_follows_insertion() {
    let args = OptionalArgs::new()
      .with("z", "1")
      .with("a", true)
      .with("m", "2");
    assert_eq!(serialize("b", &args), r#"b --z "1" --a --m "2""#);
  }
}
