//! Error types for document operations.

use thiserror::Error;

use crate::document::NodeId;
use crate::node::NodeKind;

/// Result type for document operations.
pub type DocResult<T> = Result<T, DocError>;

/// Errors raised by a document client.
///
/// The generator never catches these: a failed create/connect propagates
/// immediately, leaving nodes created by earlier steps intact and orphaned.
/// Atomicity, where needed, is the committing client's responsibility.
#[derive(Debug, Error)]
pub enum DocError {
    /// A socket reference names a node the document does not know.
    #[error("unknown node {id}")]
    UnknownNode {
        /// The unresolved node id.
        id: NodeId,
    },

    /// A socket name is not in the node kind's socket table.
    #[error("node kind '{kind}' has no socket named '{name}'")]
    UnknownSocket {
        /// Kind of the owning node.
        kind: NodeKind,
        /// The unresolved socket name.
        name: String,
    },

    /// A connection source is not an output socket.
    #[error("socket '{name}' on node {node} is not an output")]
    NotAnOutput {
        /// The owning node.
        node: NodeId,
        /// The socket name.
        name: &'static str,
    },

    /// A connection target is not an input socket.
    #[error("socket '{name}' on node {node} is not an input")]
    NotAnInput {
        /// The owning node.
        node: NodeId,
        /// The socket name.
        name: &'static str,
    },

    /// An input socket already has its single allowed incoming connection.
    #[error("input '{name}' on node {node} already has an incoming connection")]
    InputOccupied {
        /// The owning node.
        node: NodeId,
        /// The socket name.
        name: &'static str,
    },
}
