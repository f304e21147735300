use envsync_types::ObjectKey;

/// Errors from gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The requested workload does not exist.
    #[error("workload not found: {0}")]
    NotFound(ObjectKey),

    /// The stored object changed since it was read.
    #[error("conflict writing {key}: expected resource version {expected}, found {actual}")]
    Conflict {
        key: ObjectKey,
        expected: u64,
        actual: u64,
    },

    /// The caller is not allowed to perform the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The backend could not be reached.
    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    /// The object could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
