use serde::Serialize;

use envsync_merge::EnvChangeSet;
use envsync_types::{EnvEntry, ObjectKey};

/// Whether a pass persisted the workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileOutcome {
    /// The merged workload was written through the gateway.
    Updated,
    /// The write policy skipped the gateway write.
    Unchanged,
}

/// Summary of a successful reconciliation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub key: ObjectKey,
    pub container: String,
    pub outcome: ReconcileOutcome,
    /// Difference between the stored and merged environment.
    pub changes: EnvChangeSet,
    /// The merged environment of the target container.
    pub env: Vec<EnvEntry>,
}

impl ReconcileReport {
    pub fn is_updated(&self) -> bool {
        self.outcome == ReconcileOutcome::Updated
    }
}
