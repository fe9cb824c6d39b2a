//! In-memory recording document.
//!
//! [`MemoryDocument`] validates every operation against the socket tables and
//! keeps an ordered log of accepted operations. It backs the test suite and
//! the CLI's JSON emission; a production client would implement [`Document`]
//! against a synchronized store instead.

use std::collections::HashSet;

use serde::Serialize;

use crate::document::{Document, NodeHandle, NodeId, SocketRef};
use crate::error::{DocError, DocResult};
use crate::node::{NodeKind, SocketDirection};
use crate::params::{ParamValue, Params};

/// One accepted document operation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Op {
    #[serde(rename_all = "camelCase")]
    CreateNode {
        id: NodeId,
        kind: NodeKind,
        params: Params,
    },
    #[serde(rename_all = "camelCase")]
    Connect { from: SocketRef, to: SocketRef },
}

#[derive(Debug, Clone)]
struct NodeRecord {
    kind: NodeKind,
    params: Params,
}

/// Validating, recording implementation of [`Document`].
#[derive(Debug, Default)]
pub struct MemoryDocument {
    records: Vec<NodeRecord>,
    connections: Vec<(SocketRef, SocketRef)>,
    occupied_inputs: HashSet<(NodeId, &'static str)>,
    ops: Vec<Op>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.records.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// All accepted connections, in creation order.
    pub fn connections(&self) -> &[(SocketRef, SocketRef)] {
        &self.connections
    }

    /// The full operation log, in creation order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of nodes of one kind.
    pub fn kind_count(&self, kind: NodeKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Number of connections arriving at the named input of `node`.
    pub fn incoming_count(&self, node: NodeId, socket: &str) -> usize {
        self.connections
            .iter()
            .filter(|(_, to)| to.node == node && to.name == socket)
            .count()
    }

    /// Number of connections leaving the named output of `node`.
    pub fn outgoing_count(&self, node: NodeId, socket: &str) -> usize {
        self.connections
            .iter()
            .filter(|(from, _)| from.node == node && from.name == socket)
            .count()
    }

    /// Serializes the operation log as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.ops)
    }

    /// Serializes the operation log as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.ops)
    }

    fn record(&self, id: NodeId) -> DocResult<&NodeRecord> {
        self.records
            .get(id.0 as usize)
            .ok_or(DocError::UnknownNode { id })
    }

    /// Re-resolves a socket against the document's own records, so a forged
    /// or cross-document reference fails instead of corrupting the log.
    fn check_socket(
        &self,
        socket: SocketRef,
        expected: SocketDirection,
    ) -> DocResult<()> {
        let record = self.record(socket.node)?;
        let spec = record
            .kind
            .socket(socket.name)
            .ok_or_else(|| DocError::UnknownSocket {
                kind: record.kind,
                name: socket.name.to_string(),
            })?;
        if spec.direction != expected {
            return Err(match expected {
                SocketDirection::Output => DocError::NotAnOutput {
                    node: socket.node,
                    name: spec.name,
                },
                SocketDirection::Input => DocError::NotAnInput {
                    node: socket.node,
                    name: spec.name,
                },
            });
        }
        Ok(())
    }
}

impl Document for MemoryDocument {
    fn create_node(&mut self, kind: NodeKind, params: Params) -> DocResult<NodeHandle> {
        let id = NodeId(self.records.len() as u64);
        self.records.push(NodeRecord {
            kind,
            params: params.clone(),
        });
        self.ops.push(Op::CreateNode { id, kind, params });
        Ok(NodeHandle { id, kind })
    }

    fn connect(&mut self, from: SocketRef, to: SocketRef) -> DocResult<()> {
        self.check_socket(from, SocketDirection::Output)?;
        self.check_socket(to, SocketDirection::Input)?;
        if !self.occupied_inputs.insert((to.node, to.name)) {
            return Err(DocError::InputOccupied {
                node: to.node,
                name: to.name,
            });
        }
        self.connections.push((from, to));
        self.ops.push(Op::Connect { from, to });
        Ok(())
    }

    fn nodes_by_kind(&self, kinds: &[NodeKind]) -> Vec<NodeHandle> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| kinds.contains(&r.kind))
            .map(|(i, r)| NodeHandle {
                id: NodeId(i as u64),
                kind: r.kind,
            })
            .collect()
    }

    fn param(&self, node: NodeId, name: &str) -> Option<ParamValue> {
        self.records
            .get(node.0 as usize)
            .and_then(|r| r.params.get(name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn splitter_pair(doc: &mut MemoryDocument) -> (NodeHandle, NodeHandle) {
        let a = doc.create_node(NodeKind::Splitter, Params::new()).unwrap();
        let b = doc.create_node(NodeKind::Splitter, Params::new()).unwrap();
        (a, b)
    }

    #[test]
    fn test_create_and_connect_records_ops() {
        let mut doc = MemoryDocument::new();
        let (a, b) = splitter_pair(&mut doc);
        doc.connect(
            a.socket("audioOutputA").unwrap(),
            b.socket("audioInput").unwrap(),
        )
        .unwrap();

        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.connection_count(), 1);
        assert_eq!(doc.ops().len(), 3);
        assert_eq!(doc.incoming_count(b.id, "audioInput"), 1);
        assert_eq!(doc.outgoing_count(a.id, "audioOutputA"), 1);
    }

    #[test]
    fn test_input_takes_at_most_one_connection() {
        let mut doc = MemoryDocument::new();
        let (a, b) = splitter_pair(&mut doc);
        let input = b.socket("audioInput").unwrap();
        doc.connect(a.socket("audioOutputA").unwrap(), input).unwrap();

        let err = doc
            .connect(a.socket("audioOutputB").unwrap(), input)
            .unwrap_err();
        assert!(matches!(err, DocError::InputOccupied { .. }));
        assert_eq!(doc.connection_count(), 1);
    }

    #[test]
    fn test_direction_is_enforced() {
        let mut doc = MemoryDocument::new();
        let (a, b) = splitter_pair(&mut doc);

        let err = doc
            .connect(a.socket("audioInput").unwrap(), b.socket("audioInput").unwrap())
            .unwrap_err();
        assert!(matches!(err, DocError::NotAnOutput { .. }));

        let err = doc
            .connect(
                a.socket("audioOutputA").unwrap(),
                b.socket("audioOutputB").unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, DocError::NotAnInput { .. }));
    }

    #[test]
    fn test_unknown_node_rejected() {
        let mut doc = MemoryDocument::new();
        let (a, _) = splitter_pair(&mut doc);
        let mut foreign = a.socket("audioInput").unwrap();
        foreign.node = NodeId(99);

        let err = doc
            .connect(a.socket("audioOutputA").unwrap(), foreign)
            .unwrap_err();
        assert!(matches!(err, DocError::UnknownNode { id: NodeId(99) }));
    }

    #[test]
    fn test_nodes_by_kind_and_param_readback() {
        let mut doc = MemoryDocument::new();
        doc.create_node(NodeKind::Splitter, Params::new()).unwrap();
        let seq = doc
            .create_node(NodeKind::NoteSequence, Params::new().with("order", 62.5))
            .unwrap();
        doc.create_node(NodeKind::SamplePlayer, Params::new()).unwrap();

        let tracks = doc.nodes_by_kind(&[NodeKind::NoteSequence, NodeKind::SamplePlayer]);
        assert_eq!(tracks.len(), 2);
        assert_eq!(doc.param(seq.id, "order"), Some(ParamValue::Float(62.5)));
        assert_eq!(doc.param(seq.id, "missing"), None);
    }

    #[test]
    fn test_op_log_serialization() {
        let mut doc = MemoryDocument::new();
        let slope = doc
            .create_node(
                NodeKind::Slope,
                Params::new().with("frequencyHz", 240).with("x", 100.0),
            )
            .unwrap();
        let sink = doc.create_node(NodeKind::MixerSink, Params::new()).unwrap();
        doc.connect(
            slope.socket("audioOutput").unwrap(),
            sink.socket("audioInput").unwrap(),
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["op"], "createNode");
        assert_eq!(json[0]["kind"], "slope");
        assert_eq!(json[0]["params"]["frequencyHz"], 240);
        assert_eq!(json[2]["op"], "connect");
        assert_eq!(json[2]["from"]["node"], 0);
        assert_eq!(json[2]["to"]["name"], "audioInput");
    }
}
