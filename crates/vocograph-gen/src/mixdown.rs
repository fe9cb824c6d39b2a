//! Centroid fan-in and the fixed output tail.

use vocograph_doc::{Document, NodeHandle, NodeKind, Params, SocketRef};

use crate::error::GenResult;
use crate::layout::{self, Position};

/// High-shelf center of the tail equalizer.
const SHELF_FREQUENCY_HZ: u32 = 863;
const SHELF_GAIN_DB: f64 = 6.0;

/// The mix-down stage: one centroid with a channel per band.
#[derive(Debug, Clone)]
pub struct Mixdown {
    pub centroid: NodeHandle,
    /// Channel nodes, band order.
    pub channels: Vec<NodeHandle>,
    /// One input socket per band, consumed by the band builders.
    pub channel_inputs: Vec<SocketRef>,
}

/// Creates the N-channel centroid and the fixed output chain.
///
/// Each channel is tagged with its band index and a readable label and
/// references its centroid. The centroid's summed output runs through an
/// equalizer (high-shelf boost near 863 Hz), a compressor, and the mixer
/// sink; the tail derives nothing from `band_count`.
pub fn build_mixdown(
    doc: &mut dyn Document,
    band_count: usize,
    position: Position,
) -> GenResult<Mixdown> {
    let centroid = doc.create_node(
        NodeKind::Centroid,
        Params::new()
            .with("name", "Vocoder Mix")
            .with("x", position.x)
            .with("y", position.y),
    )?;

    let mut channels = Vec::with_capacity(band_count);
    let mut channel_inputs = Vec::with_capacity(band_count);
    for index in 0..band_count {
        let channel = doc.create_node(
            NodeKind::CentroidChannel,
            Params::new()
                .with("centroid", centroid.location())
                .with("index", index)
                .with("name", format!("Band {}", index + 1)),
        )?;
        channel_inputs.push(channel.socket("audioInput")?);
        channels.push(channel);
    }

    let equalizer = doc.create_node(
        NodeKind::Equalizer,
        Params::new()
            .with("highShelfFrequencyHz", SHELF_FREQUENCY_HZ)
            .with("highShelfGainDb", SHELF_GAIN_DB)
            .with("x", position.x + layout::TAIL_STEP)
            .with("y", position.y),
    )?;
    let compressor = doc.create_node(
        NodeKind::Compressor,
        Params::new()
            .with("x", position.x + 2.0 * layout::TAIL_STEP)
            .with("y", position.y),
    )?;
    let sink = doc.create_node(
        NodeKind::MixerSink,
        Params::new()
            .with("name", "Master")
            .with("x", position.x + 3.0 * layout::TAIL_STEP)
            .with("y", position.y),
    )?;

    doc.connect(centroid.socket("audioOutput")?, equalizer.socket("audioInput")?)?;
    doc.connect(equalizer.socket("audioOutput")?, compressor.socket("audioInput")?)?;
    doc.connect(compressor.socket("audioOutput")?, sink.socket("audioInput")?)?;

    Ok(Mixdown {
        centroid,
        channels,
        channel_inputs,
    })
}
