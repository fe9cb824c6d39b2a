//! Vocograph Document Model
//!
//! This crate defines the vocabulary a generated processing network is written
//! in: typed node kinds with fixed socket tables, parameter maps, and the
//! [`Document`] client trait that graph builders emit create/connect
//! operations against.
//!
//! # Overview
//!
//! A generated graph consists of:
//!
//! - **Nodes**: typed processing units ([`NodeKind`]) created once with a
//!   parameter map and never mutated afterwards.
//! - **Sockets**: named, directed ports declared statically per kind. An
//!   input socket accepts at most one incoming connection; fan-out is always
//!   realized with splitter nodes, never by duplicating an output.
//! - **Connections**: directed edges from one output socket to one input
//!   socket.
//!
//! The [`Document`] trait is the boundary to the external document store.
//! [`MemoryDocument`] is the in-crate implementation: it validates socket
//! cardinality and records every operation in creation order, so tests and
//! the CLI can inspect or serialize the full operation log.
//!
//! # Example
//!
//! ```
//! use vocograph_doc::{Document, MemoryDocument, NodeKind, Params};
//!
//! let mut doc = MemoryDocument::new();
//! let source = doc.create_node(NodeKind::AudioInput, Params::new())?;
//! let splitter = doc.create_node(NodeKind::Splitter, Params::new())?;
//! doc.connect(source.socket("audioOutput")?, splitter.socket("audioInput")?)?;
//! assert_eq!(doc.connection_count(), 1);
//! # Ok::<(), vocograph_doc::DocError>(())
//! ```

pub mod document;
pub mod error;
pub mod memory;
pub mod node;
pub mod params;

pub use document::{Document, NodeHandle, NodeId, SocketRef};
pub use error::{DocError, DocResult};
pub use memory::{MemoryDocument, Op};
pub use node::{FilterMode, NodeKind, SocketDirection, SocketSpec};
pub use params::{ParamValue, Params};
