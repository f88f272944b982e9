//! Source/sink lifecycle and event contracts.
//!
//! Every audio/video source and sink implements the same four-state
//! lifecycle (idle -> starting -> active <-> paused, any -> closed) and
//! delivers media through push-style events: timing is source-driven, never
//! caller-polled. Runtime faults travel through dedicated error events so a
//! consumer can tell "no data right now" from "this component is broken";
//! a fault never changes lifecycle state by itself.

pub mod audio;
pub mod event;
pub mod lifecycle;
pub mod video;

pub use audio::{AudioSink, AudioSource};
pub use event::{EventStream, Handler, HandlerId};
pub use lifecycle::{Lifecycle, MediaState};
pub use video::{VideoSink, VideoSource};

use bytes::Bytes;

use crate::codec::{AudioSamplingRate, VideoSample};
use crate::format::{AudioFormat, VideoFormat};

/// A raw PCM sample block emitted by an audio source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAudioSample {
    pub sampling_rate: AudioSamplingRate,
    pub duration_ms: u32,
    pub samples: Vec<i16>,
}

/// An encoded audio sample emitted by an audio source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudioSample {
    /// Sample duration in RTP timestamp units of the format's RTP clock.
    pub duration_rtp_units: u32,
    pub payload: Bytes,
    pub format: AudioFormat,
}

/// A raw video frame emitted by a video source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVideoSample {
    pub duration_ms: u32,
    pub sample: VideoSample,
}

/// An encoded video sample emitted by a video source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedVideoSample {
    /// Sample duration in RTP timestamp units (90 kHz clock).
    pub duration_rtp_units: u32,
    pub payload: Bytes,
    pub format: VideoFormat,
}
