//! Timeline track ordering and demo content.
//!
//! Timeline tracks are ordered by a numeric `order` parameter. New tracks go
//! to the end: the next order value is the maximum over existing tracks plus
//! a random jitter in `[50, 100)`. The jitter leaves room to later drop a
//! track between two neighbors without renumbering; it is the one
//! non-deterministic-looking convention in the system, so it draws from a
//! seeded stream (see [`crate::rng`]).

use rand::Rng;
use rand_pcg::Pcg32;
use vocograph_doc::{Document, NodeHandle, NodeKind, Params};

use crate::error::GenResult;

/// Node kinds that live on the timeline.
pub const TIMELINE_KINDS: [NodeKind; 3] = [
    NodeKind::SamplePlayer,
    NodeKind::AutomationCurve,
    NodeKind::NoteSequence,
];

/// Jitter added past the current maximum order.
pub const ORDER_JITTER: std::ops::Range<f64> = 50.0..100.0;

/// Order value placing a new track after every existing one.
///
/// An empty timeline starts from zero, so the first track lands inside
/// `[50, 100)`.
pub fn next_track_order(doc: &dyn Document, rng: &mut Pcg32) -> f64 {
    let mut max_order = 0.0f64;
    for track in doc.nodes_by_kind(&TIMELINE_KINDS) {
        if let Some(value) = doc.param(track.id, "order").and_then(|v| v.as_f64()) {
            max_order = max_order.max(value);
        }
    }
    max_order + rng.gen_range(ORDER_JITTER)
}

/// Appends demo material exercising a fresh vocoder: a note sequence driving
/// the carrier voice, a sample player holding the vocal take, and an
/// automation curve sweeping the carrier cutoff.
pub fn build_demo_timeline(
    doc: &mut dyn Document,
    carrier: &NodeHandle,
    rng: &mut Pcg32,
) -> GenResult<Vec<NodeHandle>> {
    let mut tracks = Vec::with_capacity(3);

    let order = next_track_order(&*doc, rng);
    tracks.push(doc.create_node(
        NodeKind::NoteSequence,
        Params::new()
            .with("device", carrier)
            .with("name", "Demo Carrier Notes")
            .with("order", order),
    )?);

    let order = next_track_order(&*doc, rng);
    tracks.push(doc.create_node(
        NodeKind::SamplePlayer,
        Params::new()
            .with("name", "Demo Vocal Take")
            .with("order", order),
    )?);

    let order = next_track_order(&*doc, rng);
    tracks.push(doc.create_node(
        NodeKind::AutomationCurve,
        Params::new()
            .with("device", carrier)
            .with("parameter", "frequencyHz")
            .with("name", "Demo Cutoff Sweep")
            .with("order", order),
    )?);

    Ok(tracks)
}
