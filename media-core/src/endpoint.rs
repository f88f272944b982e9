//! Per-session composition of pipeline endpoints.

use std::sync::Arc;

use crate::pipeline::{AudioSink, AudioSource, VideoSink, VideoSource};

/// The media endpoints wired into a single session.
///
/// All four slots are optional and independently settable: a session may be
/// audio-only, video-only, receive-only, or any other combination. Selected
/// at composition time rather than through inheritance; consumers handle
/// each `Option` exhaustively.
#[derive(Default, Clone)]
pub struct MediaEndpoints {
    pub audio_source: Option<Arc<dyn AudioSource>>,
    pub audio_sink: Option<Arc<dyn AudioSink>>,
    pub video_source: Option<Arc<dyn VideoSource>>,
    pub video_sink: Option<Arc<dyn VideoSink>>,
}

impl MediaEndpoints {
    /// Whether the session sends or receives audio.
    pub fn has_audio(&self) -> bool {
        self.audio_source.is_some() || self.audio_sink.is_some()
    }

    /// Whether the session sends or receives video.
    pub fn has_video(&self) -> bool {
        self.video_source.is_some() || self.video_sink.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_audio() && !self.has_video()
    }
}
