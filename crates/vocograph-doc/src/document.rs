//! Handles and the document client boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DocError, DocResult};
use crate::node::{NodeKind, SocketDirection};
use crate::params::{ParamValue, Params};

/// Opaque stable reference to a created node.
///
/// Usable in later parameter maps (see
/// [`ParamValue::Ref`](crate::ParamValue::Ref)); never reused within one
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transient handle to a created node, valid within one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle {
    pub id: NodeId,
    pub kind: NodeKind,
}

impl NodeHandle {
    /// Resolves a socket by name against this kind's socket table.
    pub fn socket(&self, name: &str) -> DocResult<SocketRef> {
        let spec = self
            .kind
            .socket(name)
            .ok_or_else(|| DocError::UnknownSocket {
                kind: self.kind,
                name: name.to_string(),
            })?;
        Ok(SocketRef {
            node: self.id,
            name: spec.name,
            direction: spec.direction,
        })
    }

    /// The node's stable reference, for use in parameter maps.
    pub fn location(&self) -> NodeId {
        self.id
    }
}

/// Reference to one socket: owning node plus socket name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SocketRef {
    pub node: NodeId,
    pub name: &'static str,
    #[serde(skip_serializing)]
    pub direction: SocketDirection,
}

/// Capability boundary to the external document store.
///
/// Graph builders consume exactly this surface: node creation, connection
/// creation, and a query over previously created nodes (used by the timeline
/// ordering helper). Implementations decide what "committed" means; the
/// builders only propose operations and propagate failures via `?`.
pub trait Document {
    /// Creates a node of the given kind with an immutable parameter map.
    fn create_node(&mut self, kind: NodeKind, params: Params) -> DocResult<NodeHandle>;

    /// Creates a directed connection from an output socket to an input socket.
    fn connect(&mut self, from: SocketRef, to: SocketRef) -> DocResult<()>;

    /// All nodes whose kind is one of `kinds`, in creation order.
    fn nodes_by_kind(&self, kinds: &[NodeKind]) -> Vec<NodeHandle>;

    /// Reads back one parameter of a previously created node.
    fn param(&self, node: NodeId, name: &str) -> Option<ParamValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_resolution() {
        let handle = NodeHandle {
            id: NodeId(7),
            kind: NodeKind::RingModulator,
        };
        let socket = handle.socket("audioInput2").unwrap();
        assert_eq!(socket.node, NodeId(7));
        assert_eq!(socket.direction, SocketDirection::Input);

        let err = handle.socket("audioInputC").unwrap_err();
        assert!(matches!(err, DocError::UnknownSocket { .. }));
    }

    #[test]
    fn test_socket_ref_serializes_without_direction() {
        let handle = NodeHandle {
            id: NodeId(1),
            kind: NodeKind::Splitter,
        };
        let json = serde_json::to_value(handle.socket("audioOutputA").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "node": 1, "name": "audioOutputA" }));
    }
}
