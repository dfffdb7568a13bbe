//! Validation of configuration types.
//!
//! Each validator checks one aspect of a type and records what it finds into a shared
//! per-call context; [`MetadataAssembler`] runs them in order and builds the resulting
//! metadata.

mod annotation;
mod classifier;
mod config;
mod context;
mod inspector;
mod orchestrator;
mod setter;
mod structural;

pub use config::{ValidationConfig, DEFAULT_MAX_HIERARCHY_DEPTH};
pub use inspector::TypeInspector;
pub use orchestrator::MetadataAssembler;

