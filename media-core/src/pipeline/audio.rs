
use std::net::SocketAddr;

use bytes::Bytes;
use shared::error::Result;

use crate::codec::AudioSamplingRate;
use crate::format::{AudioFormat, PayloadType};
use crate::pipeline::event::{Handler, HandlerId};
use crate::pipeline::{EncodedAudioSample, RawAudioSample};

/// Capability-restriction predicate for audio formats.
///
/// Must be a pure function of its input: it may be invoked from any thread
/// that queries capabilities.
pub type AudioFormatFilter = Box<dyn Fn(&AudioFormat) -> bool + Send + Sync>;

/// An audio capture/generation component that feeds the send side of a
/// session.
///
/// Implementations share themselves with capture threads, so every method
/// takes `&self`; interior mutability comes from the
/// [`Lifecycle`](crate::pipeline::Lifecycle),
/// [`EventStream`](crate::pipeline::EventStream) and
/// [`FormatCapabilities`](crate::format::FormatCapabilities) helpers.
/// Lifecycle calls may block pending device acquisition or release and must
/// be safe to issue while sample events are concurrently firing.
pub trait AudioSource: Send + Sync {
    /// Starts capture. Starting an already-active source is a no-op and
    /// must not duplicate resource acquisition.
    fn start_audio(&self) -> Result<()>;

    /// Suspends sample emission without releasing the capture device.
    fn pause_audio(&self) -> Result<()>;

    /// Resumes sample emission after a pause.
    fn resume_audio(&self) -> Result<()>;

    /// Terminal: releases all held resources exactly once, no matter how
    /// many callers race on it. No further operations are valid after.
    fn close_audio(&self) -> Result<()>;

    /// The formats this source can currently encode to, after any
    /// restriction.
    fn encoder_formats(&self) -> Vec<AudioFormat>;

    /// Pins the negotiated format the source should encode to.
    ///
    /// # Errors
    ///
    /// [`Error::ErrFormatNotSupported`](shared::error::Error::ErrFormatNotSupported)
    /// when the format is not in the advertised set. Callers are expected to
    /// pick from [`encoder_formats`](AudioSource::encoder_formats).
    fn set_encoder_format(&self, format: AudioFormat) -> Result<()>;

    /// Narrows the advertised format set to those satisfying `filter`.
    /// Monotonic: removed formats do not come back.
    fn restrict_formats(&self, filter: AudioFormatFilter);

    /// Feeds raw PCM obtained outside the source's own capture clock, e.g.
    /// from a mixing layer.
    fn external_raw_sample(&self, sampling_rate: AudioSamplingRate, duration_ms: u32, samples: &[i16]);

    /// Whether anyone is subscribed to encoded samples. Sources should skip
    /// encoding work entirely while this is false.
    fn has_encoded_audio_subscribers(&self) -> bool;

    fn is_audio_source_paused(&self) -> bool;

    /// Subscribes to encoded samples as they become available.
    fn on_encoded_audio_sample(&self, handler: Handler<EncodedAudioSample>) -> HandlerId;

    /// Subscribes to raw PCM samples as they become available.
    fn on_raw_audio_sample(&self, handler: Handler<RawAudioSample>) -> HandlerId;

    /// Subscribes to runtime fault reports (device failure, encoder fault).
    /// Faults are delivered here, decoupled from the sample path, and leave
    /// the lifecycle state untouched.
    fn on_audio_source_error(&self, handler: Handler<String>) -> HandlerId;
}

/// An audio playback/recording component that consumes the receive side of
/// a session.
pub trait AudioSink: Send + Sync {
    fn start_audio_sink(&self) -> Result<()>;

    fn pause_audio_sink(&self) -> Result<()>;

    fn resume_audio_sink(&self) -> Result<()>;

    /// Terminal, exactly-once resource release; see
    /// [`AudioSource::close_audio`].
    fn close_audio_sink(&self) -> Result<()>;

    /// The formats this sink can currently decode, after any restriction.
    fn audio_sink_formats(&self) -> Vec<AudioFormat>;

    /// Narrows the advertised format set; see
    /// [`AudioSource::restrict_formats`].
    fn restrict_formats(&self, filter: AudioFormatFilter);

    /// Ingests an RTP payload pushed by the transport layer.
    ///
    /// The payload type is matched against the negotiated formats to pick a
    /// decoder; unknown payload types should be reported through the error
    /// event, not panicked on.
    #[allow(clippy::too_many_arguments)]
    fn got_audio_rtp(
        &self,
        remote: SocketAddr,
        ssrc: u32,
        seqnum: u16,
        timestamp: u32,
        payload_type: PayloadType,
        marker: bool,
        payload: Bytes,
    );

    /// Subscribes to runtime fault reports.
    fn on_audio_sink_error(&self, handler: Handler<String>) -> HandlerId;
}
