//! Error types for graph generation.

use thiserror::Error;
use vocograph_doc::DocError;

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur during vocoder graph generation.
#[derive(Debug, Error)]
pub enum GenError {
    /// Band count below the supported minimum. Rejected before any node is
    /// created.
    #[error("invalid band count {got}: a vocoder needs at least {min} bands")]
    InvalidBandCount {
        /// The rejected band count.
        got: usize,
        /// The supported minimum.
        min: usize,
    },

    /// A splitter-tree level computed zero splitters. Cannot occur for any
    /// positive band count; surfaced rather than silently tolerated.
    #[error("degenerate splitter topology: level {level} computed zero splitters")]
    DegenerateTopology {
        /// Root-first index of the empty level.
        level: usize,
    },

    /// The document client rejected a create/connect operation. Nodes created
    /// by earlier steps remain in the document, orphaned.
    #[error("document write failed: {0}")]
    Doc(#[from] DocError),
}
