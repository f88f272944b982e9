use super::*;
use shared::error::*;

use crate::format::audio::AudioFormat;
use crate::format::video::VideoFormat;

/// RFC 3551 section 6 audio table: (member, payload type, clock rate,
/// channel count).
const RFC3551_AUDIO: &[(WellKnownFormat, PayloadType, u32, u16)] = &[
    (WellKnownFormat::Pcmu, 0, 8000, 1),
    (WellKnownFormat::Gsm, 3, 8000, 1),
    (WellKnownFormat::G723, 4, 8000, 1),
    (WellKnownFormat::Dvi4, 5, 8000, 1),
    (WellKnownFormat::Dvi4_16k, 6, 16000, 1),
    (WellKnownFormat::Lpc, 7, 8000, 1),
    (WellKnownFormat::Pcma, 8, 8000, 1),
    (WellKnownFormat::G722, 9, 16000, 1),
    (WellKnownFormat::L16Stereo, 10, 44100, 2),
    (WellKnownFormat::L16Mono, 11, 44100, 1),
    (WellKnownFormat::Qcelp, 12, 8000, 1),
    (WellKnownFormat::Cn, 13, 8000, 1),
    (WellKnownFormat::Mpa, 14, 90000, 1),
    (WellKnownFormat::G728, 15, 8000, 1),
    (WellKnownFormat::Dvi4_11k, 16, 11025, 1),
    (WellKnownFormat::Dvi4_22k, 17, 22050, 1),
    (WellKnownFormat::G729, 18, 8000, 1),
];

const RFC3551_VIDEO: &[(WellKnownFormat, PayloadType)] = &[
    (WellKnownFormat::Celb, 24),
    (WellKnownFormat::Jpeg, 26),
    (WellKnownFormat::Nv, 28),
    (WellKnownFormat::H261, 31),
    (WellKnownFormat::Mpv, 32),
    (WellKnownFormat::Mp2t, 33),
    (WellKnownFormat::H263, 34),
];

#[test]
fn test_well_known_audio_table_matches_rfc3551() -> Result<()> {
    for (member, payload_type, clock_rate, channel_count) in RFC3551_AUDIO {
        let format = AudioFormat::from_well_known(*member)?;
        assert_eq!(
            format.format_id(),
            *payload_type,
            "payload type mismatch for {member:?}"
        );
        assert_eq!(
            format.clock_rate(),
            *clock_rate,
            "clock rate mismatch for {member:?}"
        );
        assert_eq!(
            format.channel_count(),
            *channel_count,
            "channel count mismatch for {member:?}"
        );
        assert_eq!(member.payload_type(), *payload_type);
        assert!(!format.is_empty());
    }
    Ok(())
}

#[test]
fn test_well_known_video_table_matches_rfc3551() -> Result<()> {
    for (member, payload_type) in RFC3551_VIDEO {
        let format = VideoFormat::from_well_known(*member)?;
        assert_eq!(
            format.format_id(),
            *payload_type,
            "payload type mismatch for {member:?}"
        );
        assert_eq!(format.clock_rate(), 90000);
        assert_eq!(member.payload_type(), *payload_type);
    }
    Ok(())
}

#[test]
fn test_every_member_in_exactly_one_table() {
    for member in WellKnownFormat::ALL {
        let in_audio = well_known_audio_formats().contains_key(member);
        let in_video = well_known_video_formats().contains_key(member);
        assert!(
            in_audio ^ in_video,
            "{member:?} must appear in exactly one table"
        );
        assert_eq!(in_audio, member.kind() == MediaKind::Audio);
    }
}

#[test]
fn test_well_known_ids_are_static_range() {
    use crate::format::is_dynamic_payload_type;

    for member in WellKnownFormat::ALL {
        assert!(!is_dynamic_payload_type(member.payload_type()));
    }
}
