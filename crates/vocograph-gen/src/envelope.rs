//! Envelope-follower chain template.
//!
//! The node vocabulary has no dedicated envelope detector, so the chain is
//! assembled from generic primitives in the classic analog arrangement:
//! band-pass filter → rectify (waveshaper) → multiply (ring modulator) →
//! smooth (low-pass filter). The ring modulator multiplies the raw band
//! signal with its rectified copy, acting as a crude full-wave leveler.

use vocograph_doc::{Document, FilterMode, NodeKind, Params, SocketRef};

use crate::error::GenResult;
use crate::layout::{self, Position};

/// Resonance shared by both slopes of the chain.
const CHAIN_RESONANCE: f64 = 0.78;

/// Cutoff of the smoothing slope; low enough that only the amplitude contour
/// survives.
const SMOOTHER_FREQUENCY_HZ: u32 = 18;

/// +18 dB, compensating the level lost across the rectification path.
const RECTIFIER_GAIN: f64 = 7.943282;

/// Builds the fixed envelope-follower subgraph between two existing sockets.
///
/// `input` is an upstream output socket (a vocal-tree leaf); `output` is a
/// downstream input socket (one side of a band's combining ring modulator).
/// Always creates 5 audio nodes plus 2 waveshaper anchors and exactly 7
/// connections, regardless of `frequency_hz`:
///
/// 1. Band-pass slope at `frequency_hz` isolating the band.
/// 2. Splitter; output A carries the raw filtered signal, output B feeds the
///    rectifying waveshaper. Output C stays unconnected.
/// 3. Waveshaper with anchors at (1,1) and (0,1), slope 0.5 each, folding
///    both polarities upward.
/// 4. Ring modulator multiplying raw × rectified.
/// 5. Low-pass slope at 18 Hz smoothing the product into the envelope, wired
///    to `output`.
pub fn build_envelope_follower(
    doc: &mut dyn Document,
    frequency_hz: u32,
    input: SocketRef,
    output: SocketRef,
    origin: Position,
) -> GenResult<()> {
    let band_slope = doc.create_node(
        NodeKind::Slope,
        Params::new()
            .with("name", format!("Mod Slope {frequency_hz} Hz"))
            .with("frequencyHz", frequency_hz)
            .with("resonanceFactor", CHAIN_RESONANCE)
            .with("filterModeIndex", FilterMode::Bandpass.index())
            .with("x", origin.x)
            .with("y", origin.y),
    )?;

    let splitter = doc.create_node(
        NodeKind::Splitter,
        Params::new()
            .with("x", origin.x + layout::CHAIN_SPLITTER_X)
            .with("y", origin.y),
    )?;

    let waveshaper = doc.create_node(
        NodeKind::Waveshaper,
        Params::new()
            .with("x", origin.x + layout::CHAIN_SPLITTER_X)
            .with("y", origin.y + layout::CHAIN_WAVESHAPER_Y),
    )?;
    for anchor_x in [1.0, 0.0] {
        doc.create_node(
            NodeKind::WaveshaperAnchor,
            Params::new()
                .with("waveshaper", waveshaper.location())
                .with("x", anchor_x)
                .with("y", 1.0)
                .with("slope", 0.5),
        )?;
    }

    let rectifier = doc.create_node(
        NodeKind::RingModulator,
        Params::new()
            .with("gain", RECTIFIER_GAIN)
            .with("x", origin.x + layout::CHAIN_RECTIFIER_X)
            .with("y", origin.y),
    )?;

    let smoother = doc.create_node(
        NodeKind::Slope,
        Params::new()
            .with("name", format!("Envelope Slope {frequency_hz} Hz"))
            .with("frequencyHz", SMOOTHER_FREQUENCY_HZ)
            .with("resonanceFactor", CHAIN_RESONANCE)
            .with("filterModeIndex", FilterMode::Lowpass.index())
            .with("x", origin.x + layout::CHAIN_SMOOTHER_X)
            .with("y", origin.y),
    )?;

    doc.connect(input, band_slope.socket("audioInput")?)?;
    doc.connect(band_slope.socket("audioOutput")?, splitter.socket("audioInput")?)?;
    doc.connect(splitter.socket("audioOutputA")?, rectifier.socket("audioInput1")?)?;
    doc.connect(splitter.socket("audioOutputB")?, waveshaper.socket("audioInput")?)?;
    doc.connect(waveshaper.socket("audioOutput")?, rectifier.socket("audioInput2")?)?;
    doc.connect(rectifier.socket("audioOutput")?, smoother.socket("audioInput")?)?;
    doc.connect(smoother.socket("audioOutput")?, output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vocograph_doc::{MemoryDocument, NodeHandle, ParamValue};

    use super::*;

    fn build(frequency_hz: u32) -> (MemoryDocument, NodeHandle, NodeHandle) {
        let mut doc = MemoryDocument::new();
        let source = doc.create_node(NodeKind::Splitter, Params::new()).unwrap();
        let sink = doc
            .create_node(NodeKind::RingModulator, Params::new())
            .unwrap();
        build_envelope_follower(
            &mut doc,
            frequency_hz,
            source.socket("audioOutputA").unwrap(),
            sink.socket("audioInput1").unwrap(),
            Position::new(1400.0, -300.0),
        )
        .unwrap();
        (doc, source, sink)
    }

    #[test]
    fn test_fixed_node_and_connection_counts() {
        for frequency_hz in [28, 440, 7081] {
            let (doc, _, _) = build(frequency_hz);
            // 2 fixture nodes + 5 chain nodes + 2 anchors.
            assert_eq!(doc.node_count(), 9, "{frequency_hz} Hz");
            assert_eq!(doc.connection_count(), 7, "{frequency_hz} Hz");
            assert_eq!(doc.kind_count(NodeKind::Slope), 2);
            assert_eq!(doc.kind_count(NodeKind::Waveshaper), 1);
            assert_eq!(doc.kind_count(NodeKind::WaveshaperAnchor), 2);
        }
    }

    #[test]
    fn test_chain_spans_input_to_output() {
        let (doc, source, sink) = build(440);
        assert_eq!(doc.outgoing_count(source.id, "audioOutputA"), 1);
        assert_eq!(doc.incoming_count(sink.id, "audioInput1"), 1);
    }

    #[test]
    fn test_splitter_output_c_stays_unconnected() {
        let (doc, _, _) = build(440);
        let chain_splitters: Vec<_> = doc
            .nodes_by_kind(&[NodeKind::Splitter])
            .into_iter()
            .filter(|h| doc.incoming_count(h.id, "audioInput") == 1)
            .collect();
        assert_eq!(chain_splitters.len(), 1);
        let splitter = chain_splitters[0];
        assert_eq!(doc.outgoing_count(splitter.id, "audioOutputA"), 1);
        assert_eq!(doc.outgoing_count(splitter.id, "audioOutputB"), 1);
        assert_eq!(doc.outgoing_count(splitter.id, "audioOutputC"), 0);
    }

    #[test]
    fn test_slope_tuning() {
        let (doc, _, _) = build(963);
        let slopes = doc.nodes_by_kind(&[NodeKind::Slope]);
        assert_eq!(
            doc.param(slopes[0].id, "frequencyHz"),
            Some(ParamValue::Int(963))
        );
        assert_eq!(
            doc.param(slopes[0].id, "filterModeIndex"),
            Some(ParamValue::Int(FilterMode::Bandpass.index()))
        );
        assert_eq!(
            doc.param(slopes[1].id, "frequencyHz"),
            Some(ParamValue::Int(18))
        );
        assert_eq!(
            doc.param(slopes[1].id, "filterModeIndex"),
            Some(ParamValue::Int(FilterMode::Lowpass.index()))
        );
    }
}
