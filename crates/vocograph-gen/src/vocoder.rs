//! Top-level vocoder assembly.

use vocograph_doc::{Document, NodeKind, Params};

use crate::band::build_band;
use crate::error::{GenError, GenResult};
use crate::freq::band_frequencies;
use crate::layout::{self, Position};
use crate::mixdown::build_mixdown;
use crate::rng::stream_rng;
use crate::timeline::build_demo_timeline;
use crate::tree::build_splitter_tree;

/// Fewer bands than this cannot be voiced intelligibly.
pub const MIN_BAND_COUNT: usize = 3;

/// Parameters of one generation pass.
#[derive(Debug, Clone)]
pub struct VocoderParams {
    /// Number of vocoder bands; at least [`MIN_BAND_COUNT`].
    pub band_count: usize,
    /// Anchor of the layout; everything is placed relative to it.
    pub anchor: Position,
    /// Base seed for the timeline ordering jitter.
    pub seed: u32,
    /// Also create demo timeline content exercising the vocoder.
    pub demo_content: bool,
}

impl Default for VocoderParams {
    fn default() -> Self {
        Self {
            band_count: 27,
            anchor: Position::ORIGIN,
            seed: 0,
            demo_content: false,
        }
    }
}

/// Result of one generation pass.
#[derive(Debug, Clone)]
pub struct VocoderReport {
    pub band_count: usize,
    /// Band center frequencies, ascending.
    pub frequencies: Vec<u32>,
    /// Splitters created for each of the two trees.
    pub splitters_per_tree: usize,
    /// Demo timeline tracks created (0 or 3).
    pub demo_tracks: usize,
}

/// Generates the complete vocoder network in one linear pass.
///
/// Creates-only and non-retrying: the band count is validated before the
/// first node exists, and a document failure mid-pass propagates immediately
/// with earlier nodes left in place (the committing client decides whether
/// the unit of work is applied atomically). Two calls with identical
/// parameters against fresh documents produce identical operation logs.
pub fn build_vocoder(
    doc: &mut dyn Document,
    params: &VocoderParams,
) -> GenResult<VocoderReport> {
    let band_count = params.band_count;
    if band_count < MIN_BAND_COUNT {
        return Err(GenError::InvalidBandCount {
            got: band_count,
            min: MIN_BAND_COUNT,
        });
    }

    let vocal_origin = params.anchor;
    let carrier_origin = layout::carrier_tree_origin(params.anchor, band_count);
    let vocal_tree = build_splitter_tree(doc, band_count, vocal_origin, "vocal")?;
    let carrier_tree = build_splitter_tree(doc, band_count, carrier_origin, "carrier")?;

    let vocal_source = doc.create_node(
        NodeKind::AudioInput,
        Params::new()
            .with("name", "Vocal In")
            .with("x", vocal_origin.x + layout::SOURCE_X_OFFSET)
            .with("y", vocal_origin.y),
    )?;
    doc.connect(
        vocal_source.socket("audioOutput")?,
        vocal_tree.root().socket("audioInput")?,
    )?;

    let carrier_source = doc.create_node(
        NodeKind::SynthVoice,
        Params::new()
            .with("name", "Carrier Voice")
            .with("x", carrier_origin.x + layout::SOURCE_X_OFFSET)
            .with("y", carrier_origin.y),
    )?;
    doc.connect(
        carrier_source.socket("audioOutput")?,
        carrier_tree.root().socket("audioInput")?,
    )?;

    let frequencies = band_frequencies(band_count);

    // Channels must exist before the bands that feed them; the centroid is
    // still laid out to the right of the last band column.
    let mix = build_mixdown(
        doc,
        band_count,
        layout::mixdown_position(params.anchor, band_count),
    )?;

    for (index, &frequency_hz) in frequencies.iter().enumerate() {
        build_band(
            doc,
            index,
            frequency_hz,
            vocal_tree.leaves[index],
            carrier_tree.leaves[index],
            mix.channel_inputs[index],
            layout::band_row_origin(params.anchor, index),
        )?;
    }

    let demo_tracks = if params.demo_content {
        let mut rng = stream_rng(params.seed, "timeline");
        build_demo_timeline(doc, &carrier_source, &mut rng)?.len()
    } else {
        0
    };

    Ok(VocoderReport {
        band_count,
        frequencies,
        splitters_per_tree: vocal_tree.splitters.len(),
        demo_tracks,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vocograph_doc::MemoryDocument;

    use super::*;

    #[test]
    fn test_band_count_validated_before_any_write() {
        let mut doc = MemoryDocument::new();
        let params = VocoderParams {
            band_count: 2,
            ..VocoderParams::default()
        };
        let err = build_vocoder(&mut doc, &params).unwrap_err();
        assert!(matches!(
            err,
            GenError::InvalidBandCount { got: 2, min: MIN_BAND_COUNT }
        ));
        assert_eq!(doc.node_count(), 0);
        assert_eq!(doc.connection_count(), 0);
    }

    #[test]
    fn test_report_shape() {
        let mut doc = MemoryDocument::new();
        let params = VocoderParams {
            band_count: 9,
            ..VocoderParams::default()
        };
        let report = build_vocoder(&mut doc, &params).unwrap();
        assert_eq!(report.band_count, 9);
        assert_eq!(report.frequencies.len(), 9);
        assert_eq!(report.splitters_per_tree, 4);
        assert_eq!(report.demo_tracks, 0);
    }
}
