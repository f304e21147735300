use std::sync::Arc;

use envsync_types::{ObjectKey, WorkloadDescriptor};

use crate::error::GatewayResult;

/// Capability set `{read, write}` over remote workload objects.
///
/// Implementations must satisfy these invariants:
/// - `read` returns a fresh, owned copy of the stored descriptor.
/// - `write` persists the whole descriptor under `descriptor.key`.
/// - Failures are returned as [`GatewayError`](crate::GatewayError), never
///   swallowed.
pub trait WorkloadGateway: Send + Sync {
    /// Fetch the workload identified by `key`.
    fn read(&self, key: &ObjectKey) -> GatewayResult<WorkloadDescriptor>;

    /// Persist `descriptor`, replacing the stored object.
    fn write(&self, descriptor: &WorkloadDescriptor) -> GatewayResult<()>;
}

impl<G: WorkloadGateway + ?Sized> WorkloadGateway for &G {
    fn read(&self, key: &ObjectKey) -> GatewayResult<WorkloadDescriptor> {
        (**self).read(key)
    }

    fn write(&self, descriptor: &WorkloadDescriptor) -> GatewayResult<()> {
        (**self).write(descriptor)
    }
}

impl<G: WorkloadGateway + ?Sized> WorkloadGateway for Arc<G> {
    fn read(&self, key: &ObjectKey) -> GatewayResult<WorkloadDescriptor> {
        (**self).read(key)
    }

    fn write(&self, descriptor: &WorkloadDescriptor) -> GatewayResult<()> {
        (**self).write(descriptor)
    }
}

impl<G: WorkloadGateway + ?Sized> WorkloadGateway for Box<G> {
    fn read(&self, key: &ObjectKey) -> GatewayResult<WorkloadDescriptor> {
        (**self).read(key)
    }

    fn write(&self, descriptor: &WorkloadDescriptor) -> GatewayResult<()> {
        (**self).write(descriptor)
    }
}
