//! Format descriptors and negotiation data.
//!
//! An [`AudioFormat`] or [`VideoFormat`] captures a negotiated or negotiable
//! media format: numeric payload ID, canonical name, clock rate(s), channel
//! count and free-form out-of-band parameters. Descriptors are immutable
//! after construction and carry pure value semantics, so they are freely
//! shareable across threads without synchronization.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicase::UniCase;

pub mod audio;
pub mod capability;
pub mod video;
pub mod well_known;

pub use audio::{AudioCodec, AudioFormat};
pub use capability::FormatCapabilities;
pub use video::{VideoCodec, VideoFormat};
pub use well_known::WellKnownFormat;

/// PayloadType identifies the format of the RTP payload and determines
/// its interpretation by the application. Each codec in a RTP session
/// will have a different payload type.
/// <https://tools.ietf.org/html/rfc3550#section-3>
pub type PayloadType = u8;

/// First payload type of the dynamic range negotiated per-session.
pub const DYNAMIC_PAYLOAD_TYPE_MIN: PayloadType = 96;

/// Last valid payload type. IDs above this cannot appear in an RTP header.
pub const DYNAMIC_PAYLOAD_TYPE_MAX: PayloadType = 127;

/// Returns true when the payload type falls in the dynamic range 96-127.
///
/// Dynamic IDs are assigned independently by each side of a session, so
/// local/remote correlation for them is by format name, not by number.
pub fn is_dynamic_payload_type(id: PayloadType) -> bool {
    (DYNAMIC_PAYLOAD_TYPE_MIN..=DYNAMIC_PAYLOAD_TYPE_MAX).contains(&id)
}

/// Case-insensitive format name comparison used for offer/answer correlation.
pub(crate) fn format_name_eq(a: &str, b: &str) -> bool {
    UniCase::new(a) == UniCase::new(b)
}

const MEDIA_KIND_AUDIO_STR: &str = "audio";
const MEDIA_KIND_VIDEO_STR: &str = "video";

/// Media kind a format or pipeline component belongs to.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    /// Audio media
    #[default]
    Audio,

    /// Video media
    Video,
}

impl From<&str> for MediaKind {
    fn from(raw: &str) -> Self {
        match raw {
            MEDIA_KIND_VIDEO_STR => MediaKind::Video,
            _ => MediaKind::Audio,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            MediaKind::Audio => MEDIA_KIND_AUDIO_STR,
            MediaKind::Video => MEDIA_KIND_VIDEO_STR,
        };
        write!(f, "{s}")
    }
}
