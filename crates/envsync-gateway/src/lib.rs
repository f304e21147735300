//! Read/write boundary to the remote workload store.
//!
//! The reconciler never talks to a cluster directly. It is handed a
//! [`WorkloadGateway`] that can fetch a [`WorkloadDescriptor`] by its
//! [`ObjectKey`] and persist a whole descriptor back.
//!
//! # Backends
//!
//! - [`InMemoryGateway`] -- `HashMap`-based store for tests and embedding, with
//!   optimistic-concurrency checks on `resource_version`
//!
//! # Rules
//!
//! 1. `read` returns an owned copy; mutating it never affects the store.
//! 2. `write` sends the whole descriptor; there are no partial updates.
//! 3. Retry, backoff, and timeouts are the backend's concern.
//! 4. All errors are propagated, never silently ignored.
//!
//! [`WorkloadDescriptor`]: envsync_types::WorkloadDescriptor
//! [`ObjectKey`]: envsync_types::ObjectKey

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{GatewayError, GatewayResult};
pub use memory::InMemoryGateway;
pub use traits::WorkloadGateway;
