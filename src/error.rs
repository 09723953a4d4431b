//! Error types for the big-integer core and the Bernoulli checkpoint format.
//!
//! The error kinds here mirror spec's abstract taxonomy: most are fatal in
//! the sense that the core never attempts to recover from them, but in
//! idiomatic Rust "fatal" means "returns `Err`", not "aborts the process" —
//! only the CLI binary turns an `Err` into a printed diagnostic and a
//! non-zero exit code. `load_missing` is deliberately not a variant here:
//! per spec it is the one recoverable signal, represented as `Ok(false)`
//! from `load_file` rather than an error at all.

use thiserror::Error;

/// Primary error type for the big-integer core and checkpoint protocol.
#[derive(Debug, Error)]
pub enum BigIntError {
    /// Division or modulo by zero (caller precondition violation).
    #[error("division by zero")]
    DivisionByZero,

    /// A temporary-pool or internal-invariant check failed. Indicates a bug.
    #[error("internal invariant violated: {message}")]
    InternalInvariant { message: String },

    /// An allocation request was nonsensical (e.g. negative/overflowing size).
    #[error("allocation request denied: {message}")]
    Allocation { message: String },

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A read or write returned fewer bytes than requested.
    #[error("short {operation}: expected {expected} bytes, got {actual}")]
    IoShort {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The atomic checkpoint-publish rename failed.
    #[error("checkpoint publish rename failed: {0}")]
    IoRename(std::io::Error),

    /// The checkpoint file failed a structural or integrity check.
    #[error("checkpoint format error: {reason}")]
    CheckpointFormat { reason: String },
}

/// Result type alias for big-integer and checkpoint operations.
pub type Result<T> = std::result::Result<T, BigIntError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_message() {
        let err = BigIntError::DivisionByZero;
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn checkpoint_format_message_carries_reason() {
        let err = BigIntError::CheckpointFormat {
            reason: "bad magic".to_string(),
        };
        assert!(err.to_string().contains("bad magic"));
    }

    #[test]
    fn io_short_message_carries_counts() {
        let err = BigIntError::IoShort {
            operation: "bigint load",
            expected: 16,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains('4'));
    }
}
