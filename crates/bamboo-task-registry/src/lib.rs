//! Bamboo Task Registry
//!
//! The fixed catalog of task keys accepted by `acli --action addTask`.
//! Lookups are case-insensitive and return the catalog's canonical spelling,
//! so `script` and `SCRIPT` both resolve to `SCRIPT`.

mod catalog;
mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{TaskRegistry, TaskShape};
