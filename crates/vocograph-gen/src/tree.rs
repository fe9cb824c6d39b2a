//! Splitter-tree construction.

use vocograph_doc::{Document, NodeHandle, NodeKind, Params, SocketRef};

use crate::error::{GenError, GenResult};
use crate::layout::{self, Position};
use crate::shape::TreeShape;

const SPLITTER_OUTPUTS: [&str; 3] = ["audioOutputA", "audioOutputB", "audioOutputC"];

/// A physical ternary fan-out tree.
#[derive(Debug, Clone)]
pub struct SplitterTree {
    /// All splitters in creation order: root first, then level by level.
    pub splitters: Vec<NodeHandle>,
    /// Exactly `band_count` leaf output sockets, in splitter order.
    pub leaves: Vec<SocketRef>,
}

impl SplitterTree {
    /// The root splitter, whose input receives the tree's source signal.
    pub fn root(&self) -> NodeHandle {
        self.splitters[0]
    }
}

/// Builds and wires a splitter tree distributing one signal to `band_count`
/// leaf taps.
///
/// Levels follow [`TreeShape::for_bands`]. Within a level, splitter `i` hangs
/// off output `{A,B,C}` (by `i % 3`) of splitter `i / 3` on the previous
/// level; each connection is created immediately after the child node. The
/// leaf level's outputs are concatenated in splitter order and truncated to
/// `band_count`; surplus sockets stay unconnected when the band count is not
/// a power of three.
pub fn build_splitter_tree(
    doc: &mut dyn Document,
    band_count: usize,
    origin: Position,
    label: &str,
) -> GenResult<SplitterTree> {
    let shape = TreeShape::for_bands(band_count);
    let mut splitters = Vec::with_capacity(shape.total_splitters);
    let mut previous: Vec<NodeHandle> = Vec::new();

    for (level, &count) in shape.levels.iter().enumerate() {
        if count == 0 {
            return Err(GenError::DegenerateTopology { level });
        }
        let mut current = Vec::with_capacity(count);
        for index in 0..count {
            let pos = layout::tree_slot(origin, level, index);
            let splitter = doc.create_node(
                NodeKind::Splitter,
                Params::new()
                    .with("name", format!("{label} split {level}.{index}"))
                    .with("x", pos.x)
                    .with("y", pos.y),
            )?;
            if level > 0 {
                let parent = previous[index / 3];
                doc.connect(
                    parent.socket(SPLITTER_OUTPUTS[index % 3])?,
                    splitter.socket("audioInput")?,
                )?;
            }
            splitters.push(splitter);
            current.push(splitter);
        }
        previous = current;
    }

    let mut leaves = Vec::with_capacity(previous.len() * 3);
    for splitter in &previous {
        for name in SPLITTER_OUTPUTS {
            leaves.push(splitter.socket(name)?);
        }
    }
    leaves.truncate(band_count);

    Ok(SplitterTree { splitters, leaves })
}
