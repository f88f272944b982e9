#[cfg(test)]
mod well_known_test;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::format::audio::{AudioCodec, AudioFormat};
use crate::format::video::{VideoCodec, VideoFormat};
use crate::format::{MediaKind, PayloadType};

/// The RFC 3551 section 6 static payload types that can be identified by
/// numeric ID alone, with no qualifying format attribute.
///
/// This is the one bit-exact compatibility surface of the crate: a remote
/// peer identifies these formats purely by number, so the table values must
/// match the RFC exactly.
/// <https://tools.ietf.org/html/rfc3551#section-6>
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellKnownFormat {
    Pcmu = 0,
    Gsm = 3,
    G723 = 4,
    Dvi4 = 5,
    Dvi4_16k = 6,
    Lpc = 7,
    Pcma = 8,
    G722 = 9,
    L16Stereo = 10,
    L16Mono = 11,
    Qcelp = 12,
    Cn = 13,
    Mpa = 14,
    G728 = 15,
    Dvi4_11k = 16,
    Dvi4_22k = 17,
    G729 = 18,

    Celb = 24,
    Jpeg = 26,
    Nv = 28,
    H261 = 31,
    Mpv = 32,
    Mp2t = 33,
    H263 = 34,
}

impl WellKnownFormat {
    /// Every member, in payload type order.
    pub const ALL: &'static [WellKnownFormat] = &[
        WellKnownFormat::Pcmu,
        WellKnownFormat::Gsm,
        WellKnownFormat::G723,
        WellKnownFormat::Dvi4,
        WellKnownFormat::Dvi4_16k,
        WellKnownFormat::Lpc,
        WellKnownFormat::Pcma,
        WellKnownFormat::G722,
        WellKnownFormat::L16Stereo,
        WellKnownFormat::L16Mono,
        WellKnownFormat::Qcelp,
        WellKnownFormat::Cn,
        WellKnownFormat::Mpa,
        WellKnownFormat::G728,
        WellKnownFormat::Dvi4_11k,
        WellKnownFormat::Dvi4_22k,
        WellKnownFormat::G729,
        WellKnownFormat::Celb,
        WellKnownFormat::Jpeg,
        WellKnownFormat::Nv,
        WellKnownFormat::H261,
        WellKnownFormat::Mpv,
        WellKnownFormat::Mp2t,
        WellKnownFormat::H263,
    ];

    /// The static payload type number assigned by RFC 3551.
    pub fn payload_type(&self) -> PayloadType {
        *self as PayloadType
    }

    /// Whether this payload type carries audio or video.
    pub fn kind(&self) -> MediaKind {
        match *self {
            WellKnownFormat::Celb
            | WellKnownFormat::Jpeg
            | WellKnownFormat::Nv
            | WellKnownFormat::H261
            | WellKnownFormat::Mpv
            | WellKnownFormat::Mp2t
            | WellKnownFormat::H263 => MediaKind::Video,
            _ => MediaKind::Audio,
        }
    }
}

static WELL_KNOWN_AUDIO_FORMATS: OnceLock<HashMap<WellKnownFormat, AudioFormat>> = OnceLock::new();
static WELL_KNOWN_VIDEO_FORMATS: OnceLock<HashMap<WellKnownFormat, VideoFormat>> = OnceLock::new();

/// Process-wide table mapping well known audio payload types to fully
/// populated descriptors. Built once, never mutated, safe for concurrent
/// read-only access.
pub fn well_known_audio_formats() -> &'static HashMap<WellKnownFormat, AudioFormat> {
    WELL_KNOWN_AUDIO_FORMATS.get_or_init(|| {
        use AudioCodec::*;
        use WellKnownFormat as W;

        HashMap::from([
            (W::Pcmu, AudioFormat::well_known_entry(Pcmu, 0, 8000, 8000, 1)),
            (W::Gsm, AudioFormat::well_known_entry(Gsm, 3, 8000, 8000, 1)),
            (W::G723, AudioFormat::well_known_entry(G723, 4, 8000, 8000, 1)),
            (W::Dvi4, AudioFormat::well_known_entry(Dvi4, 5, 8000, 8000, 1)),
            (
                W::Dvi4_16k,
                AudioFormat::well_known_entry(Dvi4, 6, 16000, 16000, 1),
            ),
            (W::Lpc, AudioFormat::well_known_entry(Lpc, 7, 8000, 8000, 1)),
            (W::Pcma, AudioFormat::well_known_entry(Pcma, 8, 8000, 8000, 1)),
            // G722 samples at 16 kHz but keeps an 8 kHz RTP clock for
            // historical reasons (RFC 3551 section 4.5.2).
            (
                W::G722,
                AudioFormat::well_known_entry(G722, 9, 16000, 8000, 1),
            ),
            (
                W::L16Stereo,
                AudioFormat::well_known_entry(L16, 10, 44100, 44100, 2),
            ),
            (
                W::L16Mono,
                AudioFormat::well_known_entry(L16, 11, 44100, 44100, 1),
            ),
            (
                W::Qcelp,
                AudioFormat::well_known_entry(Qcelp, 12, 8000, 8000, 1),
            ),
            (W::Cn, AudioFormat::well_known_entry(Cn, 13, 8000, 8000, 1)),
            (
                W::Mpa,
                AudioFormat::well_known_entry(Mpa, 14, 90000, 90000, 1),
            ),
            (
                W::G728,
                AudioFormat::well_known_entry(G728, 15, 8000, 8000, 1),
            ),
            (
                W::Dvi4_11k,
                AudioFormat::well_known_entry(Dvi4, 16, 11025, 11025, 1),
            ),
            (
                W::Dvi4_22k,
                AudioFormat::well_known_entry(Dvi4, 17, 22050, 22050, 1),
            ),
            (
                W::G729,
                AudioFormat::well_known_entry(G729, 18, 8000, 8000, 1),
            ),
        ])
    })
}

/// Process-wide table mapping well known video payload types to fully
/// populated descriptors.
pub fn well_known_video_formats() -> &'static HashMap<WellKnownFormat, VideoFormat> {
    WELL_KNOWN_VIDEO_FORMATS.get_or_init(|| {
        use VideoCodec::*;
        use WellKnownFormat as W;

        HashMap::from([
            (W::Celb, VideoFormat::well_known_entry(Celb, 24)),
            (W::Jpeg, VideoFormat::well_known_entry(Jpeg, 26)),
            (W::Nv, VideoFormat::well_known_entry(Nv, 28)),
            (W::H261, VideoFormat::well_known_entry(H261, 31)),
            (W::Mpv, VideoFormat::well_known_entry(Mpv, 32)),
            (W::Mp2t, VideoFormat::well_known_entry(Mp2t, 33)),
            (W::H263, VideoFormat::well_known_entry(H263, 34)),
        ])
    })
}
