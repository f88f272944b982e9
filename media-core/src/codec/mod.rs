//! Encoder/decoder contracts and raw media sample types.
//!
//! Codec implementations are external collaborators; this module only fixes
//! the capability-check plus transform contract they expose to the pipeline.


use bytes::Bytes;
use serde::{Deserialize, Serialize};
use shared::error::Result;

use crate::format::{AudioFormat, VideoFormat};

/// Sampling rates raw audio samples are exchanged at.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioSamplingRate {
    #[default]
    Rate8K,
    Rate16K,
}

impl AudioSamplingRate {
    /// The rate in Hertz.
    pub fn hertz(&self) -> u32 {
        match *self {
            AudioSamplingRate::Rate8K => 8000,
            AudioSamplingRate::Rate16K => 16000,
        }
    }
}

/// Pixel layouts raw video samples are exchanged in.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoPixelFormat {
    /// 24 bits per pixel, packed RGB.
    Rgb,
    /// 24 bits per pixel, packed BGR.
    Bgr,
    /// 32 bits per pixel, packed BGRA.
    Bgra,
    /// Planar YUV 4:2:0.
    #[default]
    I420,
    /// Semi-planar YUV 4:2:0.
    Nv12,
}

/// A raw (unencoded) video frame.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct VideoSample {
    pub width: u32,
    pub height: u32,
    /// Bytes per row, which may exceed the packed width for aligned layouts.
    pub stride: u32,
    pub pixel_format: VideoPixelFormat,
    pub data: Bytes,
}

/// The contract audio codec implementations expose to the pipeline.
///
/// [`is_supported`](AudioEncoder::is_supported) must be checked before every
/// encode/decode call; transforming with an unsupported format is a caller
/// precondition violation and implementations may treat it as fatal.
///
/// Encode and decode are stateless at the interface. Internal codec state,
/// e.g. predictive coding history, is implementation-private, which is why
/// the transforms take `&mut self`.
pub trait AudioEncoder: Send {
    /// Whether encode and decode are supported for `format`.
    fn is_supported(&self, format: &AudioFormat) -> bool;

    /// Encodes 16-bit signed PCM samples into `format`.
    fn encode_audio(&mut self, pcm: &[i16], format: &AudioFormat) -> Result<Bytes>;

    /// Decodes an encoded sample back to 16-bit signed PCM.
    fn decode_audio(&mut self, encoded: &[u8], format: &AudioFormat) -> Result<Vec<i16>>;
}

/// The contract video codec implementations expose to the pipeline.
pub trait VideoEncoder: Send {
    /// Whether encode and decode are supported for `format`.
    fn is_supported(&self, format: &VideoFormat) -> bool;

    /// Encodes a raw frame into `format`.
    ///
    /// When `force_key_frame` is set the encoder must produce a key frame on
    /// the next encoded output, regardless of its rate-control plans.
    fn encode_video(
        &mut self,
        sample: &VideoSample,
        format: &VideoFormat,
        force_key_frame: bool,
    ) -> Result<Bytes>;

    /// Decodes an encoded access unit.
    ///
    /// A single call may legitimately yield zero, one or several frames: one
    /// access unit can decode to multiple frames, and a call can consume
    /// input without producing output yet. The result is always a finite
    /// sequence, never an unbounded stream. Decoded samples should be in
    /// `output_format` where the decoder supports it; callers must check the
    /// pixel format of each returned sample.
    fn decode_video(
        &mut self,
        encoded: &[u8],
        format: &VideoFormat,
        output_format: VideoPixelFormat,
    ) -> Result<Vec<VideoSample>>;
}
