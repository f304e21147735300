use std::io;

use envsync_gateway::GatewayError;
use envsync_types::ObjectKey;

/// Errors that abort a reconciliation pass.
///
/// Gateway failures are carried unmodified as the error source.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// Reading the workload through the gateway failed.
    #[error("failed to fetch workload: {0}")]
    Fetch(#[source] GatewayError),

    /// The workload was fetched but has no container with the target name.
    #[error("container '{container}' not found in workload {key}")]
    ContainerNotFound { key: ObjectKey, container: String },

    /// Writing the merged workload through the gateway failed.
    #[error("failed to write workload: {0}")]
    Write(#[source] GatewayError),
}

impl ReconcileError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    pub fn is_container_not_found(&self) -> bool {
        matches!(self, Self::ContainerNotFound { .. })
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }

    /// The underlying gateway error, for fetch and write failures.
    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            Self::Fetch(e) | Self::Write(e) => Some(e),
            Self::ContainerNotFound { .. } => None,
        }
    }
}

/// Result alias for reconciliation passes.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Errors from loading or validating a [`ReconcileConfig`](crate::ReconcileConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
