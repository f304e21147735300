use tracing::{debug, info, warn};

use envsync_gateway::WorkloadGateway;
use envsync_merge::{merge_env, same_entries, EnvChangeSet};
use envsync_types::EnvEntry;

use crate::config::{ReconcileConfig, WritePolicy};
use crate::error::{ReconcileError, ReconcileResult};
use crate::report::{ReconcileOutcome, ReconcileReport};

// ---------------------------------------------------------------------------
// ReconcileStep
// ---------------------------------------------------------------------------

/// One fetch-merge-write pass over a workload's container environment.
///
/// The step holds no mutable state: each call to [`Self::reconcile`] reads a
/// fresh copy of the workload, so a single step can serve concurrent passes.
/// Passes against the same workload may race; conflict detection, if any,
/// belongs to the gateway.
pub struct ReconcileStep<G> {
    gateway: G,
    config: ReconcileConfig,
}

impl<G: WorkloadGateway> ReconcileStep<G> {
    /// Create a step over `gateway` targeting the workload named by `config`.
    pub fn new(gateway: G, config: ReconcileConfig) -> Self {
        Self { gateway, config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Reconcile the configured container with the configured overrides.
    pub fn run(&self) -> ReconcileResult<ReconcileReport> {
        self.reconcile(&self.config.container, &self.config.env)
    }

    /// Merge `overrides` into the environment of `target_container` and
    /// persist the workload.
    ///
    /// Performs exactly one gateway read and, unless the pass fails before
    /// it or the write policy skips it, exactly one gateway write.
    pub fn reconcile(
        &self,
        target_container: &str,
        overrides: &[EnvEntry],
    ) -> ReconcileResult<ReconcileReport> {
        let result = self.pass(target_container, overrides);
        if let Err(e) = &result {
            warn!(
                key = %self.config.key(),
                container = target_container,
                error = %e,
                "reconcile pass failed"
            );
        }
        result
    }

    fn pass(
        &self,
        target_container: &str,
        overrides: &[EnvEntry],
    ) -> ReconcileResult<ReconcileReport> {
        let key = self.config.key();
        info!(
            %key,
            container = target_container,
            overrides = overrides.len(),
            "reconciling workload environment"
        );

        let mut descriptor = self.gateway.read(&key).map_err(ReconcileError::Fetch)?;

        let container = descriptor.container_mut(target_container).ok_or_else(|| {
            ReconcileError::ContainerNotFound {
                key: key.clone(),
                container: target_container.to_string(),
            }
        })?;

        let merged = merge_env(&container.env, overrides);
        let changes = EnvChangeSet::between(&container.env, &merged);
        let unchanged = same_entries(&container.env, &merged);
        debug!(
            added = changes.additions(),
            modified = changes.modifications(),
            unchanged = changes.unchanged,
            "computed merged environment"
        );
        container.env = merged.clone();

        let should_write = match self.config.write_policy {
            WritePolicy::Always => true,
            WritePolicy::WhenOverridden => !overrides.is_empty(),
            WritePolicy::WhenChanged => !unchanged,
        };

        let outcome = if should_write {
            self.gateway
                .write(&descriptor)
                .map_err(ReconcileError::Write)?;
            info!(%key, container = target_container, "workload environment written");
            ReconcileOutcome::Updated
        } else {
            info!(
                %key,
                container = target_container,
                policy = ?self.config.write_policy,
                "write skipped"
            );
            ReconcileOutcome::Unchanged
        };

        Ok(ReconcileReport {
            key,
            container: target_container.to_string(),
            outcome,
            changes,
            env: merged,
        })
    }
}

impl<G> std::fmt::Debug for ReconcileStep<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReconcileStep")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
