//! Per-band construction.

use vocograph_doc::{Document, FilterMode, NodeKind, Params, SocketRef};

use crate::envelope::build_envelope_follower;
use crate::error::GenResult;
use crate::layout::{self, Position};

const CARRIER_RESONANCE: f64 = 0.78;

/// +18 dB make-up on the band's combining modulator.
const COMBINER_GAIN: f64 = 7.9433;

/// Builds one vocoder band.
///
/// The carrier leaf feeds a low-pass slope tuned to the band frequency; the
/// vocal leaf feeds an envelope follower. The combining ring modulator
/// multiplies carrier (input 2) by envelope (input 1) and delivers the band
/// into its centroid channel. All of a band's nodes share the row at
/// `origin`.
pub fn build_band(
    doc: &mut dyn Document,
    index: usize,
    frequency_hz: u32,
    vocal_leaf: SocketRef,
    carrier_leaf: SocketRef,
    channel_input: SocketRef,
    origin: Position,
) -> GenResult<()> {
    let carrier_slope = doc.create_node(
        NodeKind::Slope,
        Params::new()
            .with("name", format!("Carrier Slope {frequency_hz} Hz"))
            .with("frequencyHz", frequency_hz)
            .with("resonanceFactor", CARRIER_RESONANCE)
            .with("filterModeIndex", FilterMode::Lowpass.index())
            .with("x", origin.x)
            .with("y", origin.y),
    )?;
    doc.connect(carrier_leaf, carrier_slope.socket("audioInput")?)?;

    let combiner = doc.create_node(
        NodeKind::RingModulator,
        Params::new()
            .with("name", format!("Band {}", index + 1))
            .with("gain", COMBINER_GAIN)
            .with("x", origin.x + layout::COMBINER_X_OFFSET)
            .with("y", origin.y),
    )?;

    build_envelope_follower(
        doc,
        frequency_hz,
        vocal_leaf,
        combiner.socket("audioInput1")?,
        origin.translate(layout::ENVELOPE_X_OFFSET, 0.0),
    )?;

    doc.connect(carrier_slope.socket("audioOutput")?, combiner.socket("audioInput2")?)?;
    doc.connect(combiner.socket("audioOutput")?, channel_input)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vocograph_doc::{MemoryDocument, NodeHandle, ParamValue};

    use super::*;

    fn build_one() -> (MemoryDocument, NodeHandle, NodeHandle) {
        let mut doc = MemoryDocument::new();
        let taps = doc.create_node(NodeKind::Splitter, Params::new()).unwrap();
        let channel = doc
            .create_node(NodeKind::CentroidChannel, Params::new())
            .unwrap();
        build_band(
            &mut doc,
            0,
            440,
            taps.socket("audioOutputA").unwrap(),
            taps.socket("audioOutputB").unwrap(),
            channel.socket("audioInput").unwrap(),
            Position::new(550.0, -300.0),
        )
        .unwrap();
        (doc, taps, channel)
    }

    #[test]
    fn test_band_node_and_connection_counts() {
        let (doc, _, _) = build_one();
        // 2 fixture nodes + carrier slope + combiner + 5 chain nodes + 2 anchors.
        assert_eq!(doc.node_count(), 11);
        // 7 chain connections + carrier in, carrier→combiner, combiner→channel.
        assert_eq!(doc.connection_count(), 10);
        assert_eq!(doc.kind_count(NodeKind::RingModulator), 2);
        assert_eq!(doc.kind_count(NodeKind::Slope), 3);
    }

    #[test]
    fn test_band_feeds_its_channel_once() {
        let (doc, _, channel) = build_one();
        assert_eq!(doc.incoming_count(channel.id, "audioInput"), 1);
    }

    #[test]
    fn test_combiner_receives_carrier_and_envelope() {
        let (doc, _, channel) = build_one();
        let (combiner_out, _) = doc
            .connections()
            .iter()
            .find(|(_, to)| to.node == channel.id)
            .copied()
            .unwrap();
        assert_eq!(doc.incoming_count(combiner_out.node, "audioInput1"), 1);
        assert_eq!(doc.incoming_count(combiner_out.node, "audioInput2"), 1);
        assert_eq!(
            doc.param(combiner_out.node, "gain"),
            Some(ParamValue::Float(COMBINER_GAIN))
        );
    }

    #[test]
    fn test_carrier_slope_is_lowpass_at_band_frequency() {
        let (doc, _, _) = build_one();
        let carrier = doc.nodes_by_kind(&[NodeKind::Slope])[0];
        assert_eq!(
            doc.param(carrier.id, "frequencyHz"),
            Some(ParamValue::Int(440))
        );
        assert_eq!(
            doc.param(carrier.id, "filterModeIndex"),
            Some(ParamValue::Int(FilterMode::Lowpass.index()))
        );
    }
}
