//! The built-in Bamboo task catalog.

/// `(canonical key, parameter names)` in catalog order.
pub(crate) const BUILTIN_TASKS: &[(&str, &[&str])] = &[
  (
    "SCRIPT",
    &[
      "interpreter",
      "script_location",
      "script_body",
      "argument",
      "environment_variables",
      "working_sub_directory",
    ],
  ),
  ("CHECKOUT", &["repository", "force_clean_build"]),
  (
    "INJECT_VARIABLES",
    &["path_to_properties", "namespace", "scope_of_variables"],
  ),
  ("CLEAN", &[]),
  ("ANT", &[]),
  ("ARTIFACT_DOWNLOAD", &[]),
  ("CLI_BAMBOO", &[]),
  ("CLI_BITBUCKET", &[]),
  ("CLI_CONFLUENCE", &[]),
  ("CLI_CRUCIBLE", &[]),
  ("CLI_FISHEYE", &[]),
  ("CLI_JIRA", &[]),
  ("CLI_SERVICE_DESK", &[]),
  ("CLI_SLACK", &[]),
  ("CLI_UPM", &[]),
  ("GANT", &[]),
  ("GINT", &[]),
  ("GRADLE", &[]),
  ("GRADLEW", &[]),
  ("GRADLEWRAPPER", &[]),
  ("GROOVY", &[]),
  ("JUNIT_PARSER", &[]),
  ("MAVEN2", &[]),
  ("MAVEN3", &[]),
  ("MAVEN_POM_EXTRACTOR", &[]),
  ("SCP", &[]),
  ("SQL", &[]),
  ("SSH", &[]),
  ("VARIABLE_REPLACE", &[]),
  ("com.atlassian.bamboo.plugin.dotnet:msbuild", &[]),
];
