#[cfg(test)]
mod audio_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use crate::format::well_known::{self, WellKnownFormat};
use crate::format::{DYNAMIC_PAYLOAD_TYPE_MAX, PayloadType, format_name_eq};

const AUDIO_CODEC_UNKNOWN_STR: &str = "unknown";

/// Known audio codec identities.
///
/// The `Unknown` variant is used when a format name cannot be resolved to a
/// known identity; such formats are still perfectly negotiable, they just
/// cannot be dispatched to a built-in codec binding by identity.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCodec {
    Pcmu,
    Gsm,
    G723,
    Dvi4,
    Lpc,
    Pcma,
    G722,
    L16,
    Qcelp,
    Cn,
    Mpa,
    G728,
    G729,
    Opus,

    /// PCM signed 16-bit little-endian. Used by speech service bindings,
    /// not expected on a VoIP/WebRTC wire.
    PcmS16Le,

    #[default]
    Unknown,
}

/// Canonical SDP encoding names, one entry per known codec.
const AUDIO_CODEC_NAMES: &[(AudioCodec, &str)] = &[
    (AudioCodec::Pcmu, "PCMU"),
    (AudioCodec::Gsm, "GSM"),
    (AudioCodec::G723, "G723"),
    (AudioCodec::Dvi4, "DVI4"),
    (AudioCodec::Lpc, "LPC"),
    (AudioCodec::Pcma, "PCMA"),
    (AudioCodec::G722, "G722"),
    (AudioCodec::L16, "L16"),
    (AudioCodec::Qcelp, "QCELP"),
    (AudioCodec::Cn, "CN"),
    (AudioCodec::Mpa, "MPA"),
    (AudioCodec::G728, "G728"),
    (AudioCodec::G729, "G729"),
    (AudioCodec::Opus, "opus"),
    (AudioCodec::PcmS16Le, "PCM_S16LE"),
];

/// Resolves a codec identity from a format name, case-insensitively.
///
/// This is the sole place audio codec identity is inferred from negotiation
/// text; unresolved names map to [`AudioCodec::Unknown`].
impl From<&str> for AudioCodec {
    fn from(raw: &str) -> Self {
        AUDIO_CODEC_NAMES
            .iter()
            .find(|(_, name)| format_name_eq(name, raw))
            .map(|(codec, _)| *codec)
            .unwrap_or(AudioCodec::Unknown)
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = AUDIO_CODEC_NAMES
            .iter()
            .find(|(codec, _)| codec == self)
            .map(|(_, name)| *name)
            .unwrap_or(AUDIO_CODEC_UNKNOWN_STR);
        write!(f, "{s}")
    }
}

/// An audio format descriptor.
///
/// Captures everything negotiation needs to know about one audio format:
/// the payload ID carried in RTP headers, the canonical name used to
/// correlate dynamic formats across an offer/answer exchange, clock rates,
/// channel count and the opaque `fmtp` parameter string.
///
/// Two descriptors denote the *same negotiated format* when their payload ID
/// and name match (see [`AudioFormat::matches`]); clock-rate or parameter
/// differences on an otherwise-matching dynamic ID indicate a negotiation
/// mismatch the caller must detect explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    codec: AudioCodec,
    format_id: PayloadType,
    format_name: String,
    clock_rate: u32,
    rtp_clock_rate: u32,
    channel_count: u16,
    parameters: Option<String>,
    non_empty: bool,
}

/// The distinguished empty value, the only legitimate "no format negotiated
/// yet" sentinel. Must never be used for encode/decode/negotiation.
impl Default for AudioFormat {
    fn default() -> Self {
        AudioFormat {
            codec: AudioCodec::Unknown,
            format_id: 0,
            format_name: String::new(),
            clock_rate: AudioFormat::DEFAULT_CLOCK_RATE,
            rtp_clock_rate: AudioFormat::DEFAULT_CLOCK_RATE,
            channel_count: AudioFormat::DEFAULT_CHANNEL_COUNT,
            parameters: None,
            non_empty: false,
        }
    }
}

impl AudioFormat {
    /// Default sample clock rate for audio formats.
    pub const DEFAULT_CLOCK_RATE: u32 = 8000;

    /// Default channel count for audio formats.
    pub const DEFAULT_CHANNEL_COUNT: u16 = 1;

    /// Creates a fully specified audio format.
    ///
    /// This is the general constructor for negotiated/dynamic formats and
    /// the validation point every other constructor funnels through. The
    /// codec identity is derived by resolving `format_name`, never settable
    /// independently.
    ///
    /// # Errors
    ///
    /// Fails when `format_id` exceeds 127, `format_name` is empty or
    /// whitespace, or any of the rates/counts is zero. Violations are
    /// construction errors, never silently clamped.
    pub fn new(
        format_id: PayloadType,
        format_name: impl Into<String>,
        clock_rate: u32,
        rtp_clock_rate: u32,
        channel_count: u16,
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
        if rtp_clock_rate == 0 {
            return Err(Error::ErrRtpClockRateZero);
        }
        if channel_count == 0 {
            return Err(Error::ErrChannelCountZero);
        }

        let codec = AudioCodec::from(format_name.as_str());
        Ok(AudioFormat {
            codec,
            format_id,
            format_name,
            clock_rate,
            rtp_clock_rate,
            channel_count,
            parameters,
            non_empty: true,
        })
    }

    /// Creates a dynamic format where the RTP clock rate equals the sample
    /// clock rate, which is the case for everything except legacy G722.
    pub fn dynamic(
        format_id: PayloadType,
        format_name: impl Into<String>,
        clock_rate: u32,
        channel_count: u16,
    ) -> Result<Self> {
        AudioFormat::new(
            format_id,
            format_name,
            clock_rate,
            clock_rate,
            channel_count,
            None,
        )
    }

    /// Creates a format from a known codec with default clock rate and
    /// channel count, deriving the name from the codec's canonical string.
    pub fn from_codec(codec: AudioCodec, format_id: PayloadType) -> Result<Self> {
        AudioFormat::from_codec_full(
            codec,
            format_id,
            AudioFormat::DEFAULT_CLOCK_RATE,
            AudioFormat::DEFAULT_CLOCK_RATE,
            AudioFormat::DEFAULT_CHANNEL_COUNT,
        )
    }

    /// Creates a format from a known codec with explicit rates and channels.
    pub fn from_codec_full(
        codec: AudioCodec,
        format_id: PayloadType,
        clock_rate: u32,
        rtp_clock_rate: u32,
        channel_count: u16,
    ) -> Result<Self> {
        AudioFormat::new(
            format_id,
            codec.to_string(),
            clock_rate,
            rtp_clock_rate,
            channel_count,
            None,
        )
    }

    /// Creates a fully populated format from the RFC 3551 well known table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ErrWellKnownKindMismatch`] if `well_known` names a
    /// video format. Passing the wrong kind is a caller bug, surfaced as an
    /// error rather than a panic.
    pub fn from_well_known(well_known: WellKnownFormat) -> Result<Self> {
        well_known::well_known_audio_formats()
            .get(&well_known)
            .cloned()
            .ok_or(Error::ErrWellKnownKindMismatch)
    }

    /// Registry-internal constructor for table entries whose values are
    /// known to satisfy the construction invariants.
    pub(crate) fn well_known_entry(
        codec: AudioCodec,
        format_id: PayloadType,
        clock_rate: u32,
        rtp_clock_rate: u32,
        channel_count: u16,
    ) -> Self {
        AudioFormat {
            codec,
            format_id,
            format_name: codec.to_string(),
            clock_rate,
            rtp_clock_rate,
            channel_count,
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
    pub fn codec(&self) -> AudioCodec {
        self.codec
    }

    /// The payload ID for this format. Below 96 for well known static
    /// types, 96-127 for per-session dynamic types.
    pub fn format_id(&self) -> PayloadType {
        self.format_id
    }

    /// The official name for the format. The canonical matching key for
    /// dynamic-format offer/answer correlation.
    pub fn format_name(&self) -> &str {
        &self.format_name
    }

    /// The rate at which decoded samples are produced.
    pub fn clock_rate(&self) -> u32 {
        self.clock_rate
    }

    /// The rate used for RTP timestamp units and the SDP `rtpmap` attribute.
    ///
    /// Almost always equal to [`clock_rate`](AudioFormat::clock_rate). G722
    /// is the historical exception: 16 kHz samples against an 8 kHz RTP
    /// clock.
    pub fn rtp_clock_rate(&self) -> u32 {
        self.rtp_clock_rate
    }

    /// The number of audio channels.
    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    /// The opaque out-of-band negotiation string (SDP `fmtp`), if any.
    pub fn parameters(&self) -> Option<&str> {
        self.parameters.as_deref()
    }

    /// Negotiated-format identity: payload ID plus case-insensitive name.
    ///
    /// Dynamic IDs are assigned independently by each side, so the name
    /// comparison is what actually disambiguates dynamic formats.
    pub fn matches(&self, other: &AudioFormat) -> bool {
        self.non_empty
            && other.non_empty
            && self.format_id == other.format_id
            && format_name_eq(&self.format_name, &other.format_name)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(
                f,
                "{}/{}/{} (id {})",
                self.format_name, self.rtp_clock_rate, self.channel_count, self.format_id
            )
        }
    }
}
