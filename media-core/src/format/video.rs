
use std::fmt;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::format::well_known::{self, WellKnownFormat};
use crate::format::{DYNAMIC_PAYLOAD_TYPE_MAX, PayloadType, format_name_eq};

const VIDEO_CODEC_UNKNOWN_STR: &str = "unknown";

/// Known video codec identities.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoCodec {
    Celb,
    Jpeg,
    Nv,
    H261,
    Mpv,
    Mp2t,
    H263,
    Vp8,
    Vp9,
    H264,
    H265,

    #[default]
    Unknown,
}

const VIDEO_CODEC_NAMES: &[(VideoCodec, &str)] = &[
    (VideoCodec::Celb, "CelB"),
    (VideoCodec::Jpeg, "JPEG"),
    (VideoCodec::Nv, "nv"),
    (VideoCodec::H261, "H261"),
    (VideoCodec::Mpv, "MPV"),
    (VideoCodec::Mp2t, "MP2T"),
    (VideoCodec::H263, "H263"),
    (VideoCodec::Vp8, "VP8"),
    (VideoCodec::Vp9, "VP9"),
    (VideoCodec::H264, "H264"),
    (VideoCodec::H265, "H265"),
];

/// Resolves a codec identity from a format name, case-insensitively.
impl From<&str> for VideoCodec {
    fn from(raw: &str) -> Self {
        VIDEO_CODEC_NAMES
            .iter()
            .find(|(_, name)| format_name_eq(name, raw))
            .map(|(codec, _)| *codec)
            .unwrap_or(VideoCodec::Unknown)
    }
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = VIDEO_CODEC_NAMES
            .iter()
            .find(|(codec, _)| codec == self)
            .map(|(_, name)| *name)
            .unwrap_or(VIDEO_CODEC_UNKNOWN_STR);
        write!(f, "{s}")
    }
}

/// A video format descriptor.
///
/// Same shape as [`AudioFormat`](crate::format::AudioFormat) minus channel
/// count and the RTP/sample clock-rate split: video formats universally use
/// a single 90 kHz RTP clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFormat {
    codec: VideoCodec,
    format_id: PayloadType,
    format_name: String,
    clock_rate: u32,
    parameters: Option<String>,
    non_empty: bool,
}

/// The distinguished empty value; see [`VideoFormat::is_empty`].
impl Default for VideoFormat {
    fn default() -> Self {
        VideoFormat {
            codec: VideoCodec::Unknown,
            format_id: 0,
            format_name: String::new(),
            clock_rate: VideoFormat::DEFAULT_CLOCK_RATE,
            parameters: None,
            non_empty: false,
        }
    }
}

impl VideoFormat {
    /// Default clock rate for video formats.
    pub const DEFAULT_CLOCK_RATE: u32 = 90000;

    /// Creates a fully specified video format.
    ///
    /// # Errors
    ///
    /// Fails when `format_id` exceeds 127, `format_name` is empty or
    /// whitespace, or `clock_rate` is zero.
    pub fn new(
        format_id: PayloadType,
        format_name: impl Into<String>,
        clock_rate: u32,
        parameters: Option<String>,
    ) -> Result<Self> {
        let format_name = format_name.into();
        if format_id > DYNAMIC_PAYLOAD_TYPE_MAX {
            return Err(Error::ErrFormatIdOutOfRange(format_id));
        }
        if format_name.trim().is_empty() {
            return Err(Error::ErrFormatNameEmpty);
        }
        if clock_rate == 0 {
            return Err(Error::ErrClockRateZero);
        }

        let codec = VideoCodec::from(format_name.as_str());
        Ok(VideoFormat {
            codec,
            format_id,
            format_name,
            clock_rate,
            parameters,
            non_empty: true,
        })
    }

    /// Creates a dynamic format with the default 90 kHz clock rate.
    pub fn dynamic(format_id: PayloadType, format_name: impl Into<String>) -> Result<Self> {
        VideoFormat::new(
            format_id,
            format_name,
            VideoFormat::DEFAULT_CLOCK_RATE,
            None,
        )
    }

    /// Creates a format from a known codec, deriving the name from the
    /// codec's canonical string.
    pub fn from_codec(codec: VideoCodec, format_id: PayloadType) -> Result<Self> {
        VideoFormat::new(
            format_id,
            codec.to_string(),
            VideoFormat::DEFAULT_CLOCK_RATE,
            None,
        )
    }

    /// Creates a fully populated format from the RFC 3551 well known table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ErrWellKnownKindMismatch`] if `well_known` names an
    /// audio format.
    pub fn from_well_known(well_known: WellKnownFormat) -> Result<Self> {
        well_known::well_known_video_formats()
            .get(&well_known)
            .cloned()
            .ok_or(Error::ErrWellKnownKindMismatch)
    }

    pub(crate) fn well_known_entry(codec: VideoCodec, format_id: PayloadType) -> Self {
        VideoFormat {
            codec,
            format_id,
            format_name: codec.to_string(),
            clock_rate: VideoFormat::DEFAULT_CLOCK_RATE,
            parameters: None,
            non_empty: true,
        }
    }

    /// Attaches the out-of-band parameter string (the SDP `a=fmtp` value,
    /// without the `a=fmtp:` prefix). Not validated.
    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    /// True only for the distinguished default value.
    pub fn is_empty(&self) -> bool {
        !self.non_empty
    }

    /// The codec identity resolved from the format name.
    pub fn codec(&self) -> VideoCodec {
        self.codec
    }

    /// The payload ID for this format.
    pub fn format_id(&self) -> PayloadType {
        self.format_id
    }

    /// The official name for the format.
    pub fn format_name(&self) -> &str {
        &self.format_name
    }

    /// The RTP clock rate, e.g. 90000 in `a=rtpmap:102 H264/90000`.
    pub fn clock_rate(&self) -> u32 {
        self.clock_rate
    }

    /// The opaque out-of-band negotiation string (SDP `fmtp`), if any.
    pub fn parameters(&self) -> Option<&str> {
        self.parameters.as_deref()
    }

    /// Negotiated-format identity: payload ID plus case-insensitive name.
    pub fn matches(&self, other: &VideoFormat) -> bool {
        self.non_empty
            && other.non_empty
            && self.format_id == other.format_id
            && format_name_eq(&self.format_name, &other.format_name)
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(
                f,
                "{}/{} (id {})",
                self.format_name, self.clock_rate, self.format_id
            )
        }
    }
}
