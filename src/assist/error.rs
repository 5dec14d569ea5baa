//! Error types for assistant reply composition.

use thiserror::Error;

/// Errors returned while composing or pacing assistant replies.
#[derive(Debug, Error)]
pub enum AssistError {
    /// Template registration or rendering failed.
    #[error(transparent)]
    Template(#[from] minijinja::Error),

    /// A pacing range is inverted.
    #[error("typing pacing {min_ms}..{max_ms}ms is not a forward range")]
    InvalidPacing {
        /// Smallest per-character delay in milliseconds.
        min_ms: u64,
        /// Largest per-character delay in milliseconds.
        max_ms: u64,
    },
}
