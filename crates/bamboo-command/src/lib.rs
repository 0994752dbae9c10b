//! Bamboo Command
//!
//! Turns a base command prefix plus an ordered set of optional named values
//! into the single flag string handed to `acli`.
//!
//! # Rendering rules
//!
//! | Value | Rendered as |
//! |-------|-------------|
//! | absent or `false` | nothing |
//! | any value for `continues`, `favorite`, `exclude_disabled`, `exclude_enabled` | the fixed literal flag (`--continue`, ...) |
//! | `true` | `--name` |
//! | scalar | `--name "value"` |
//!
//! Values are not escaped. Embedding quotes inside a scalar is the caller's
//! responsibility, since the resulting string is interpreted by a shell.
//!
//! ```
//! use bamboo_command::{OptionalArgs, serialize};
//!
//! let args = OptionalArgs::new()
//!   .with("projectName", "P")
//!   .with("replace", true)
//!   .with("disable", None::<String>);
//!
//! assert_eq!(
//!   serialize(r#"--action createPlan --plan "X""#, &args),
//!   r#"--action createPlan --plan "X" --projectName "P" --replace"#
//! );
//! ```

mod args;
mod serialize;
mod value;

pub use args::OptionalArgs;
pub use serialize::{RENAMED_FLAGS, renamed_flag, serialize};
pub use value::OptionValue;
