//! Merge engine for container environment lists.
//!
//! Combines the environment currently stored on a container with a list of
//! caller-supplied overrides. The result holds exactly one entry per name:
//! the override value when the name is overridden, the existing value
//! otherwise.
//!
//! # Rules
//!
//! 1. Later overrides win over earlier overrides with the same name.
//! 2. Overrides win over existing entries.
//! 3. Existing entries that are not overridden are preserved unchanged.
//! 4. Merging is idempotent: re-applying the same overrides changes nothing.
//!
//! Only the *set* of (name, value) pairs is part of the contract. Callers
//! must not depend on the order of the returned list.

pub mod changes;
pub mod merge;

pub use changes::{same_entries, EnvChange, EnvChangeSet};
pub use merge::merge_env;
