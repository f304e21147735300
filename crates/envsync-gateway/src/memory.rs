//! In-memory workload gateway for testing and embedding.
//!
//! [`InMemoryGateway`] keeps descriptors in a `HashMap` behind a `RwLock` and
//! records every successful write so tests can assert on what was persisted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use tracing::debug;

use envsync_types::{ObjectKey, WorkloadDescriptor};

use crate::error::{GatewayError, GatewayResult};
use crate::traits::WorkloadGateway;

/// An in-memory implementation of [`WorkloadGateway`].
///
/// Poisoned locks are recovered, never reported as errors.
///
/// Writes are checked against the stored `resource_version`: a descriptor
/// read at version `n` can only be written while the store is still at `n`.
/// A successful write bumps the stored version to `n + 1`.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    objects: RwLock<HashMap<ObjectKey, WorkloadDescriptor>>,
    write_log: RwLock<Vec<WorkloadDescriptor>>,
    reads: AtomicUsize,
}

impl InMemoryGateway {
    /// Create a new empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway seeded with a single descriptor.
    pub fn with_object(descriptor: WorkloadDescriptor) -> Self {
        let gateway = Self::new();
        gateway.insert(descriptor);
        gateway
    }

    /// Seed or replace a descriptor without a version check.
    ///
    /// Seeding is not recorded in the write log.
    pub fn insert(&self, descriptor: WorkloadDescriptor) {
        let mut objects = self.objects.write().unwrap_or_else(|e| e.into_inner());
        objects.insert(descriptor.key.clone(), descriptor);
    }

    /// The currently stored descriptor for `key`, if any.
    pub fn get(&self, key: &ObjectKey) -> Option<WorkloadDescriptor> {
        let objects = self.objects.read().unwrap_or_else(|e| e.into_inner());
        objects.get(key).cloned()
    }

    /// Number of `read` calls served, including failed ones.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.write_log.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Every successfully written descriptor, oldest first.
    pub fn write_log(&self) -> Vec<WorkloadDescriptor> {
        self.write_log
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl WorkloadGateway for InMemoryGateway {
    fn read(&self, key: &ObjectKey) -> GatewayResult<WorkloadDescriptor> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let objects = self.objects.read().unwrap_or_else(|e| e.into_inner());
        objects
            .get(key)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(key.clone()))
    }

    fn write(&self, descriptor: &WorkloadDescriptor) -> GatewayResult<()> {
        // Lock order: write_log, then objects. Both are held until the
        // object and its log entry are in place.
        let mut log = self.write_log.write().unwrap_or_else(|e| e.into_inner());
        let mut objects = self.objects.write().unwrap_or_else(|e| e.into_inner());
        let stored = objects
            .get_mut(&descriptor.key)
            .ok_or_else(|| GatewayError::NotFound(descriptor.key.clone()))?;

        if stored.resource_version != descriptor.resource_version {
            return Err(GatewayError::Conflict {
                key: descriptor.key.clone(),
                expected: descriptor.resource_version,
                actual: stored.resource_version,
            });
        }

        let mut updated = descriptor.clone();
        updated.resource_version += 1;
        debug!(
            key = %updated.key,
            resource_version = updated.resource_version,
            "workload written"
        );
        *stored = updated.clone();
        log.push(updated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use envsync_types::{Container, EnvEntry};

    fn aws_node() -> WorkloadDescriptor {
        WorkloadDescriptor::new(
            ObjectKey::default(),
            vec![Container::new("aws-node", vec![])],
        )
    }

    #[test]
    fn read_returns_owned_copy() {
        let gateway = InMemoryGateway::with_object(aws_node());
        let mut ds = gateway.read(&ObjectKey::default()).unwrap();
        ds.containers[0].env.push(EnvEntry::new("A", "1"));

        let stored = gateway.get(&ObjectKey::default()).unwrap();
        assert!(stored.containers[0].env.is_empty());
        assert_eq!(gateway.reads(), 1);
    }

    #[test]
    fn read_missing_is_not_found() {
        let gateway = InMemoryGateway::new();
        let key = ObjectKey::new("mock-namespace", "mock-name");
        assert_eq!(gateway.read(&key), Err(GatewayError::NotFound(key)));
        assert_eq!(gateway.reads(), 1);
    }

    #[test]
    fn write_bumps_resource_version_and_logs() {
        let gateway = InMemoryGateway::with_object(aws_node());
        let mut ds = gateway.read(&ObjectKey::default()).unwrap();
        ds.containers[0].env.push(EnvEntry::new("A", "1"));
        gateway.write(&ds).unwrap();

        let stored = gateway.get(&ObjectKey::default()).unwrap();
        assert_eq!(stored.resource_version, 1);
        assert_eq!(stored.containers[0].env, vec![EnvEntry::new("A", "1")]);
        assert_eq!(gateway.writes(), 1);
        assert_eq!(gateway.write_log()[0], stored);
    }

    #[test]
    fn stale_write_conflicts() {
        let gateway = InMemoryGateway::with_object(aws_node());
        let first = gateway.read(&ObjectKey::default()).unwrap();
        let second = gateway.read(&ObjectKey::default()).unwrap();

        gateway.write(&first).unwrap();
        let err = gateway.write(&second).unwrap_err();
        assert_eq!(
            err,
            GatewayError::Conflict {
                key: ObjectKey::default(),
                expected: 0,
                actual: 1,
            }
        );
        assert_eq!(gateway.writes(), 1);
    }

    #[test]
    fn write_to_missing_key_is_not_found() {
        let gateway = InMemoryGateway::new();
        let err = gateway.write(&aws_node()).unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
        assert_eq!(gateway.writes(), 0);
    }

    #[test]
    fn insert_is_not_logged() {
        let gateway = InMemoryGateway::new();
        gateway.insert(aws_node());
        assert_eq!(gateway.writes(), 0);
        assert!(gateway.get(&ObjectKey::default()).is_some());
    }

    #[test]
    fn write_survives_poisoned_write_log() {
        let gateway = Arc::new(InMemoryGateway::with_object(aws_node()));
        let poisoner = Arc::clone(&gateway);
        let _ = thread::spawn(move || {
            let _guard = poisoner.write_log.write().unwrap();
            panic!("poison the write log");
        })
        .join();
        assert!(gateway.write_log.is_poisoned());

        let ds = gateway.read(&ObjectKey::default()).unwrap();
        gateway.write(&ds).unwrap();
        assert_eq!(gateway.writes(), 1);
        assert_eq!(gateway.get(&ObjectKey::default()).unwrap().resource_version, 1);
    }

    #[test]
    fn shared_through_arc() {
        let gateway = Arc::new(InMemoryGateway::with_object(aws_node()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gateway = Arc::clone(&gateway);
                thread::spawn(move || gateway.read(&ObjectKey::default()).is_ok())
            })
            .collect();
        for h in handles {
            assert!(h.join().expect("thread should not panic"));
        }
        assert_eq!(gateway.reads(), 4);
    }

    #[test]
    fn error_messages() {
        let key = ObjectKey::default();
        assert_eq!(
            GatewayError::NotFound(key.clone()).to_string(),
            "workload not found: kube-system/aws-node"
        );
        assert!(GatewayError::Conflict { key, expected: 0, actual: 2 }
            .to_string()
            .contains("expected resource version 0, found 2"));
    }
}
