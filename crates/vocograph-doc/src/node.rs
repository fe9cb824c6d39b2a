//! Node kinds and their static socket tables.
//!
//! Every node kind declares its sockets up front. Builders resolve socket
//! names through [`NodeHandle::socket`](crate::NodeHandle::socket), so a typo
//! surfaces as [`DocError::UnknownSocket`](crate::DocError::UnknownSocket)
//! instead of a silently dangling connection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a socket relative to its owning node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocketDirection {
    Input,
    Output,
}

/// A named, directed port declared by a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketSpec {
    pub name: &'static str,
    pub direction: SocketDirection,
}

impl SocketSpec {
    const fn input(name: &'static str) -> Self {
        Self {
            name,
            direction: SocketDirection::Input,
        }
    }

    const fn output(name: &'static str) -> Self {
        Self {
            name,
            direction: SocketDirection::Output,
        }
    }
}

const ONE_IN_ONE_OUT: &[SocketSpec] = &[
    SocketSpec::input("audioInput"),
    SocketSpec::output("audioOutput"),
];

const SPLITTER_SOCKETS: &[SocketSpec] = &[
    SocketSpec::input("audioInput"),
    SocketSpec::output("audioOutputA"),
    SocketSpec::output("audioOutputB"),
    SocketSpec::output("audioOutputC"),
];

const RING_MODULATOR_SOCKETS: &[SocketSpec] = &[
    SocketSpec::input("audioInput1"),
    SocketSpec::input("audioInput2"),
    SocketSpec::output("audioOutput"),
];

const SOURCE_SOCKETS: &[SocketSpec] = &[SocketSpec::output("audioOutput")];

const SINK_SOCKETS: &[SocketSpec] = &[SocketSpec::input("audioInput")];

/// Type tag of a processing node.
///
/// Audio kinds carry sockets; the anchor and timeline kinds are parameter-only
/// entities that reference their owner through a
/// [`ParamValue::Ref`](crate::ParamValue::Ref) parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// 3-way fan-out: one input, exactly three named outputs.
    #[serde(rename = "audioSplitter")]
    Splitter,
    /// Resonant filter ("slope") with a selectable response mode.
    #[serde(rename = "slope")]
    Slope,
    /// Two-input multiplier, used for modulation and as a rectifier.
    #[serde(rename = "ringModulator")]
    RingModulator,
    /// Transfer-curve shaper; its curve is defined by anchor entities.
    #[serde(rename = "waveshaper")]
    Waveshaper,
    /// One breakpoint of a waveshaper transfer curve.
    #[serde(rename = "waveshaperAnchor")]
    WaveshaperAnchor,
    /// N-channel fan-in mixer.
    #[serde(rename = "centroid")]
    Centroid,
    /// One input channel of a centroid.
    #[serde(rename = "centroidChannel")]
    CentroidChannel,
    /// Physical audio input device (vocal source).
    #[serde(rename = "audioInputDevice")]
    AudioInput,
    /// Synthesizer voice (carrier source).
    #[serde(rename = "synthVoice")]
    SynthVoice,
    #[serde(rename = "equalizer")]
    Equalizer,
    #[serde(rename = "compressor")]
    Compressor,
    /// Terminal mixer sink of the output chain.
    #[serde(rename = "mixerSink")]
    MixerSink,
    /// Timeline track playing back sampled material.
    #[serde(rename = "samplePlayer")]
    SamplePlayer,
    /// Timeline track automating a device parameter.
    #[serde(rename = "automationCurve")]
    AutomationCurve,
    /// Timeline track of notes driving a synth voice.
    #[serde(rename = "noteSequence")]
    NoteSequence,
}

impl NodeKind {
    /// The wire-format type tag, as serialized into the operation log.
    pub fn type_tag(&self) -> &'static str {
        match self {
            NodeKind::Splitter => "audioSplitter",
            NodeKind::Slope => "slope",
            NodeKind::RingModulator => "ringModulator",
            NodeKind::Waveshaper => "waveshaper",
            NodeKind::WaveshaperAnchor => "waveshaperAnchor",
            NodeKind::Centroid => "centroid",
            NodeKind::CentroidChannel => "centroidChannel",
            NodeKind::AudioInput => "audioInputDevice",
            NodeKind::SynthVoice => "synthVoice",
            NodeKind::Equalizer => "equalizer",
            NodeKind::Compressor => "compressor",
            NodeKind::MixerSink => "mixerSink",
            NodeKind::SamplePlayer => "samplePlayer",
            NodeKind::AutomationCurve => "automationCurve",
            NodeKind::NoteSequence => "noteSequence",
        }
    }

    /// Static socket table for this kind. Empty for parameter-only kinds.
    pub fn sockets(&self) -> &'static [SocketSpec] {
        match self {
            NodeKind::Splitter => SPLITTER_SOCKETS,
            NodeKind::Slope
            | NodeKind::Waveshaper
            | NodeKind::Equalizer
            | NodeKind::Compressor => ONE_IN_ONE_OUT,
            NodeKind::RingModulator => RING_MODULATOR_SOCKETS,
            NodeKind::Centroid | NodeKind::AudioInput | NodeKind::SynthVoice => SOURCE_SOCKETS,
            NodeKind::CentroidChannel | NodeKind::MixerSink => SINK_SOCKETS,
            NodeKind::WaveshaperAnchor
            | NodeKind::SamplePlayer
            | NodeKind::AutomationCurve
            | NodeKind::NoteSequence => &[],
        }
    }

    /// Looks up one socket by name.
    pub fn socket(&self, name: &str) -> Option<&'static SocketSpec> {
        self.sockets().iter().find(|spec| spec.name == name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

/// Filter response selected by a slope's `filterModeIndex` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Lowpass,
    Bandpass,
}

impl FilterMode {
    /// The mode index written into slope parameters.
    pub fn index(&self) -> i64 {
        match self {
            FilterMode::Lowpass => 1,
            FilterMode::Bandpass => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitter_socket_table() {
        let sockets = NodeKind::Splitter.sockets();
        assert_eq!(sockets.len(), 4);
        assert_eq!(
            sockets
                .iter()
                .filter(|s| s.direction == SocketDirection::Output)
                .count(),
            3
        );
        assert!(NodeKind::Splitter.socket("audioOutputB").is_some());
        assert!(NodeKind::Splitter.socket("audioOutputD").is_none());
    }

    #[test]
    fn test_parameter_only_kinds_have_no_sockets() {
        for kind in [
            NodeKind::WaveshaperAnchor,
            NodeKind::SamplePlayer,
            NodeKind::AutomationCurve,
            NodeKind::NoteSequence,
        ] {
            assert!(kind.sockets().is_empty(), "{kind} should be socket-free");
        }
    }

    #[test]
    fn test_ring_modulator_has_two_inputs() {
        let inputs: Vec<_> = NodeKind::RingModulator
            .sockets()
            .iter()
            .filter(|s| s.direction == SocketDirection::Input)
            .map(|s| s.name)
            .collect();
        assert_eq!(inputs, vec!["audioInput1", "audioInput2"]);
    }

    #[test]
    fn test_type_tag_matches_serde_rename() {
        for kind in [NodeKind::Splitter, NodeKind::AudioInput, NodeKind::MixerSink] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.type_tag()));
        }
    }

    #[test]
    fn test_filter_mode_indices() {
        assert_eq!(FilterMode::Lowpass.index(), 1);
        assert_eq!(FilterMode::Bandpass.index(), 4);
    }
}
