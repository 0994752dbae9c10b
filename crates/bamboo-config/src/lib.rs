//! Bamboo Config
//!
//! Serializable configuration for bamboo-acli: where acli is installed,
//! which server profile to address and the default project.
//!
//! Configuration is a JSON file, by default `~/.bamboo-acli/config.json`:
//!
//! ```json
//! {
//!   "install_dir": "/opt/acli",
//!   "server": "bamboo",
//!   "project": "ZCREATE"
//! }
//! ```
//!
//! Values given on the command line or in the environment override the file.

mod config;
mod error;

pub use config::{AcliConfig, ConfigLayer};
pub use error::ConfigError;
