//! Error types for the WARDEN simulator.
//!
//! Policy violations and approval requirements are NOT errors — they are
//! first-class outcomes recorded on the run. Errors here cover the things
//! that genuinely stop work: unusable configuration, unbound behaviors, and
//! artifact export failures.

use thiserror::Error;

/// The unified error type for the WARDEN crates.
#[derive(Debug, Error)]
pub enum WardenError {
    /// A required configuration value is missing or unusable.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A registry tool has no mock behavior bound in the behavior table.
    ///
    /// Behaviors are resolved once at run start; an unbound tool is a caller
    /// programming error, not a tolerated configuration warning.
    #[error("no behavior bound for tool '{tool_name}' (expected mock function '{mock_function_name}')")]
    BehaviorMissing {
        tool_name: String,
        mock_function_name: String,
    },

    /// An evidence artifact could not be written.
    ///
    /// Fatal to the export step only — the in-memory trace and violations
    /// remain valid and inspectable.
    #[error("artifact write failed for '{artifact}': {reason}")]
    ArtifactWriteFailed { artifact: String, reason: String },

    /// A run artifact could not be serialized to JSON.
    #[error("serialization failed for '{artifact}': {reason}")]
    SerializationFailed { artifact: String, reason: String },
}

/// Convenience alias used throughout the WARDEN crates.
pub type WardenResult<T> = Result<T, WardenError>;
