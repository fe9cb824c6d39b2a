//! Vocograph Generation Core
//!
//! This crate turns one integer parameter (the band count, plus an optional
//! anchor position) into a fully wired multi-band vocoder processing network,
//! emitted as create/connect operations against a
//! [`Document`](vocograph_doc::Document) client.
//!
//! # Overview
//!
//! Generation is a single synchronous pass with data flowing strictly
//! forward:
//!
//! 1. [`band_frequencies`] distributes band centers on an equal-log grid
//!    between 20 Hz and 10 kHz.
//! 2. [`TreeShape`] computes the minimum-depth ternary splitter tree for the
//!    band count, and [`build_splitter_tree`] realizes it twice (vocal and
//!    carrier), returning one leaf socket per band.
//! 3. [`build_band`] wires each band: a carrier filter, an envelope follower
//!    on the vocal signal ([`build_envelope_follower`]), and a ring modulator
//!    combining the two into one centroid channel.
//! 4. [`build_mixdown`] creates the fan-in centroid, its per-band channels,
//!    and the fixed equalizer → compressor → mixer-sink tail.
//! 5. [`build_vocoder`] orchestrates the whole pass and optionally appends
//!    demo timeline content ordered by the [`timeline`] helper.
//!
//! # Determinism
//!
//! Every builder is a pure function of its arguments and the document handle
//! it writes through. The only randomness is the timeline ordering jitter,
//! drawn from a PCG32 stream derived from the base seed via BLAKE3
//! ([`rng`]); identical parameters against a fresh document produce a
//! byte-identical operation log.
//!
//! # Example
//!
//! ```
//! use vocograph_doc::MemoryDocument;
//! use vocograph_gen::{build_vocoder, VocoderParams};
//!
//! let mut doc = MemoryDocument::new();
//! let params = VocoderParams {
//!     band_count: 9,
//!     ..VocoderParams::default()
//! };
//! let report = build_vocoder(&mut doc, &params)?;
//! assert_eq!(report.frequencies.len(), 9);
//! assert_eq!(report.splitters_per_tree, 4);
//! # Ok::<(), vocograph_gen::GenError>(())
//! ```

pub mod band;
pub mod envelope;
pub mod error;
pub mod freq;
pub mod layout;
pub mod mixdown;
pub mod rng;
pub mod shape;
pub mod timeline;
pub mod tree;
pub mod vocoder;

pub use band::build_band;
pub use envelope::build_envelope_follower;
pub use error::{GenError, GenResult};
pub use freq::{band_frequencies, band_frequencies_in};
pub use layout::Position;
pub use mixdown::{build_mixdown, Mixdown};
pub use shape::TreeShape;
pub use tree::{build_splitter_tree, SplitterTree};
pub use vocoder::{build_vocoder, VocoderParams, VocoderReport, MIN_BAND_COUNT};
