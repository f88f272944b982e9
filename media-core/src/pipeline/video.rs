
use std::net::SocketAddr;

use bytes::Bytes;
use shared::error::Result;

use crate::codec::VideoSample;
use crate::format::{PayloadType, VideoFormat};
use crate::pipeline::event::{Handler, HandlerId};
use crate::pipeline::{EncodedVideoSample, RawVideoSample};

/// Capability-restriction predicate for video formats. Must be pure; it may
/// be invoked from any thread that queries capabilities.
pub type VideoFormatFilter = Box<dyn Fn(&VideoFormat) -> bool + Send + Sync>;

/// A video capture/generation component that feeds the send side of a
/// session. Concurrency rules as for
/// [`AudioSource`](crate::pipeline::AudioSource).
pub trait VideoSource: Send + Sync {
    /// Starts capture. Idempotent from the caller's perspective; never
    /// duplicates resource acquisition.
    fn start_video(&self) -> Result<()>;

    fn pause_video(&self) -> Result<()>;

    fn resume_video(&self) -> Result<()>;

    /// Terminal, exactly-once resource release.
    fn close_video(&self) -> Result<()>;

    /// The formats this source can currently encode to, after any
    /// restriction.
    fn encoder_formats(&self) -> Vec<VideoFormat>;

    /// Pins the negotiated format the source should encode to.
    ///
    /// # Errors
    ///
    /// [`Error::ErrFormatNotSupported`](shared::error::Error::ErrFormatNotSupported)
    /// when the format is not in the advertised set.
    fn set_encoder_format(&self, format: VideoFormat) -> Result<()>;

    /// Narrows the advertised format set. Monotonic.
    fn restrict_formats(&self, filter: VideoFormatFilter);

    /// Requests that the next encoded frame be a key frame.
    ///
    /// The far end calls this (directly or via RTCP signaling) whenever its
    /// decoder has lost the frame-dependency chain, e.g. after a sink
    /// pause/resume.
    fn force_key_frame(&self);

    /// Whether anyone is subscribed to encoded samples; sources should skip
    /// encoding work entirely while this is false.
    fn has_encoded_video_subscribers(&self) -> bool;

    fn is_video_source_paused(&self) -> bool;

    /// Subscribes to encoded samples as they become available.
    fn on_encoded_video_sample(&self, handler: Handler<EncodedVideoSample>) -> HandlerId;

    /// Subscribes to raw frames as they become available.
    fn on_raw_video_sample(&self, handler: Handler<RawVideoSample>) -> HandlerId;

    /// Subscribes to runtime fault reports.
    fn on_video_source_error(&self, handler: Handler<String>) -> HandlerId;
}

/// A video rendering component that consumes the receive side of a session,
/// decoding depacketized frames (or raw RTP) and emitting decoded samples.
pub trait VideoSink: Send + Sync {
    fn start_video_sink(&self) -> Result<()>;

    /// Suspends decoding.
    ///
    /// Pausing invalidates the frame-dependency chain: all but key frames
    /// depend on previously decoded frames, so resuming must be treated as
    /// if decoding restarts on a fresh key frame. Consumers should signal
    /// the far-end encoder, via
    /// [`VideoSource::force_key_frame`] on a paired source or equivalent
    /// out-of-band signaling, rather than assume continuity.
    fn pause_video_sink(&self) -> Result<()>;

    fn resume_video_sink(&self) -> Result<()>;

    /// Terminal, exactly-once resource release.
    fn close_video_sink(&self) -> Result<()>;

    /// The formats this sink can currently decode, after any restriction.
    fn decoder_formats(&self) -> Vec<VideoFormat>;

    /// Narrows the advertised format set. Monotonic.
    fn restrict_formats(&self, filter: VideoFormatFilter);

    /// Ingests a full encoded frame already depacketized by the RTP layer.
    fn got_video_frame(
        &self,
        remote: SocketAddr,
        timestamp: u32,
        frame: Bytes,
        format: &VideoFormat,
    );

    /// Ingests a raw RTP payload when the transport does not know how to
    /// depacketize the stream; the sink reconstructs frames itself.
    #[allow(clippy::too_many_arguments)]
    fn got_video_rtp(
        &self,
        remote: SocketAddr,
        ssrc: u32,
        seqnum: u16,
        timestamp: u32,
        payload_type: PayloadType,
        marker: bool,
        payload: Bytes,
    );

    /// Subscribes to frames the sink has decoded from the RTP stream.
    fn on_decoded_video_sample(&self, handler: Handler<VideoSample>) -> HandlerId;

    /// Subscribes to runtime fault reports.
    fn on_video_sink_error(&self, handler: Handler<String>) -> HandlerId;
}
