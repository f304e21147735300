use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env::EnvEntry;
use crate::error::TypeError;

/// Namespace the node agent workload lives in unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "kube-system";

/// Name of the node agent workload unless configured otherwise.
pub const DEFAULT_WORKLOAD: &str = "aws-node";

/// Name of the container whose environment is reconciled by default.
pub const DEFAULT_CONTAINER: &str = "aws-node";

// ---------------------------------------------------------------------------
// ObjectKey
// ---------------------------------------------------------------------------

/// Namespace + name identity of a remote workload object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectKey {
    pub namespace: String,
    pub name: String,
}

impl ObjectKey {
    /// Create a key from its two components.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl Default for ObjectKey {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE, DEFAULT_WORKLOAD)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for ObjectKey {
    type Err = TypeError;

    /// Parse the `namespace/name` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TypeError::InvalidObjectKey {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let (namespace, name) = s
            .split_once('/')
            .ok_or_else(|| invalid("expected 'namespace/name'"))?;
        if namespace.is_empty() {
            return Err(invalid("empty namespace"));
        }
        if name.is_empty() {
            return Err(invalid("empty name"));
        }
        if name.contains('/') {
            return Err(invalid("name must not contain '/'"));
        }
        Ok(Self::new(namespace, name))
    }
}

// ---------------------------------------------------------------------------
// Container / WorkloadDescriptor
// ---------------------------------------------------------------------------

/// A named container and its ordered environment list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    #[serde(default)]
    pub env: Vec<EnvEntry>,
}

impl Container {
    pub fn new(name: impl Into<String>, env: Vec<EnvEntry>) -> Self {
        Self {
            name: name.into(),
            env,
        }
    }
}

/// The remote object describing a node-level agent deployment.
///
/// A descriptor obtained from a gateway is an owned, request-scoped copy; the
/// remote store owns the object's lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadDescriptor {
    pub key: ObjectKey,
    /// Opaque version stamp. Only gateways that detect write conflicts
    /// interpret it.
    #[serde(default)]
    pub resource_version: u64,
    #[serde(default)]
    pub containers: Vec<Container>,
}

impl WorkloadDescriptor {
    /// Create a descriptor at resource version 0.
    pub fn new(key: ObjectKey, containers: Vec<Container>) -> Self {
        Self {
            key,
            resource_version: 0,
            containers,
        }
    }

    /// The first container with the given name.
    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.name == name)
    }

    /// Mutable access to the first container with the given name.
    pub fn container_mut(&mut self, name: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.name == name)
    }

    /// Names of all containers, in declaration order.
    pub fn container_names(&self) -> Vec<&str> {
        self.containers.iter().map(|c| c.name.as_str()).collect()
    }
}
