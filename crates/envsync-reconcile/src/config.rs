use std::path::Path;

use serde::{Deserialize, Serialize};

use envsync_types::{EnvEntry, ObjectKey, DEFAULT_CONTAINER, DEFAULT_NAMESPACE, DEFAULT_WORKLOAD};

use crate::error::ConfigError;

/// When a reconciliation pass writes the merged workload back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Write on every successful pass, even if nothing changed.
    #[default]
    Always,
    /// Write only when the override list is non-empty.
    WhenOverridden,
    /// Write only when the merged environment differs from the stored one,
    /// ignoring order.
    WhenChanged,
}

/// Configuration for a [`ReconcileStep`](crate::ReconcileStep).
///
/// Every field has a default, so a config file only needs to list what it
/// changes:
///
/// ```toml
/// write_policy = "when_changed"
///
/// [[env]]
/// name = "WARM_IP_TARGET"
/// value = "5"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Namespace of the target workload.
    pub namespace: String,
    /// Name of the target workload.
    pub name: String,
    /// Container whose environment is reconciled by
    /// [`ReconcileStep::run`](crate::ReconcileStep::run).
    pub container: String,
    pub write_policy: WritePolicy,
    /// Ordered override list. Later entries win over earlier ones.
    pub env: Vec<EnvEntry>,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            name: DEFAULT_WORKLOAD.to_string(),
            container: DEFAULT_CONTAINER.to_string(),
            write_policy: WritePolicy::Always,
            env: Vec::new(),
        }
    }
}

impl ReconcileConfig {
    /// Default identity with the given overrides.
    pub fn with_env(env: Vec<EnvEntry>) -> Self {
        Self {
            env,
            ..Default::default()
        }
    }

    /// Identity of the target workload.
    pub fn key(&self) -> ObjectKey {
        ObjectKey::new(self.namespace.as_str(), self.name.as_str())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject empty identity fields and unnamed overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("namespace", &self.namespace),
            ("name", &self.name),
            ("container", &self.container),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        if let Some(pos) = self.env.iter().position(|e| e.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "env entry {pos} has an empty name"
            )));
        }
        Ok(())
    }
}
