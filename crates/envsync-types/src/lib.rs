//! Foundation types for envsync.
//!
//! This crate provides the data model shared by every other envsync crate:
//! the name/value pairs applied to a container, the containers themselves, and
//! the remote workload object that owns them.
//!
//! # Key Types
//!
//! - [`EnvEntry`] -- A single environment variable; `name` is the merge key
//! - [`Container`] -- A named container with its ordered environment list
//! - [`WorkloadDescriptor`] -- The remote per-node agent workload
//! - [`ObjectKey`] -- Namespace + name identity of a remote workload

pub mod env;
pub mod error;
pub mod workload;

pub use env::EnvEntry;
pub use error::TypeError;
pub use workload::{
    Container, ObjectKey, WorkloadDescriptor, DEFAULT_CONTAINER, DEFAULT_NAMESPACE,
    DEFAULT_WORKLOAD,
};
