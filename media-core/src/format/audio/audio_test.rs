use super::*;
use shared::error::*;

const KNOWN_AUDIO_CODECS: &[AudioCodec] = &[
    AudioCodec::Pcmu,
    AudioCodec::Gsm,
    AudioCodec::G723,
    AudioCodec::Dvi4,
    AudioCodec::Lpc,
    AudioCodec::Pcma,
    AudioCodec::G722,
    AudioCodec::L16,
    AudioCodec::Qcelp,
    AudioCodec::Cn,
    AudioCodec::Mpa,
    AudioCodec::G728,
    AudioCodec::G729,
    AudioCodec::Opus,
    AudioCodec::PcmS16Le,
];

#[test]
fn test_audio_format_construction_validation() {
    assert_eq!(
        AudioFormat::new(128, "opus", 48000, 48000, 2, None),
        Err(Error::ErrFormatIdOutOfRange(128))
    );
    assert_eq!(
        AudioFormat::new(255, "opus", 48000, 48000, 2, None),
        Err(Error::ErrFormatIdOutOfRange(255))
    );
    assert_eq!(
        AudioFormat::new(96, "", 48000, 48000, 2, None),
        Err(Error::ErrFormatNameEmpty)
    );
    assert_eq!(
        AudioFormat::new(96, "   ", 48000, 48000, 2, None),
        Err(Error::ErrFormatNameEmpty)
    );
    assert_eq!(
        AudioFormat::new(96, "opus", 0, 48000, 2, None),
        Err(Error::ErrClockRateZero)
    );
    assert_eq!(
        AudioFormat::new(96, "opus", 48000, 0, 2, None),
        Err(Error::ErrRtpClockRateZero)
    );
    assert_eq!(
        AudioFormat::new(96, "opus", 48000, 48000, 0, None),
        Err(Error::ErrChannelCountZero)
    );
}

#[test]
fn test_audio_format_construction_boundaries() -> Result<()> {
    // 0 and 127 are both legal payload types.
    let low = AudioFormat::new(0, "PCMU", 8000, 8000, 1, None)?;
    assert_eq!(low.format_id(), 0);

    let high = AudioFormat::new(127, "opus", 48000, 48000, 2, None)?;
    assert_eq!(high.format_id(), 127);
    Ok(())
}

#[test]
fn test_audio_format_empty_sentinel() -> Result<()> {
    let empty = AudioFormat::default();
    assert!(empty.is_empty());
    assert_eq!(empty.clock_rate(), AudioFormat::DEFAULT_CLOCK_RATE);
    assert_eq!(empty.channel_count(), AudioFormat::DEFAULT_CHANNEL_COUNT);

    // Every named constructor produces a non-empty value.
    assert!(!AudioFormat::from_codec(AudioCodec::Pcmu, 0)?.is_empty());
    assert!(!AudioFormat::dynamic(111, "opus", 48000, 2)?.is_empty());
    assert!(!AudioFormat::from_well_known(WellKnownFormat::G722)?.is_empty());
    Ok(())
}

#[test]
fn test_audio_format_from_codec_defaults() -> Result<()> {
    let pcmu = AudioFormat::from_codec(AudioCodec::Pcmu, 0)?;
    assert_eq!(pcmu.codec(), AudioCodec::Pcmu);
    assert_eq!(pcmu.format_name(), "PCMU");
    assert_eq!(pcmu.clock_rate(), 8000);
    assert_eq!(pcmu.rtp_clock_rate(), 8000);
    assert_eq!(pcmu.channel_count(), 1);
    assert_eq!(pcmu.parameters(), None);
    Ok(())
}

#[test]
fn test_g722_clock_rate_divergence() -> Result<()> {
    // G722 samples at 16 kHz against an 8 kHz RTP clock; regression for the
    // historical RFC 3551 quirk.
    let g722 = AudioFormat::from_well_known(WellKnownFormat::G722)?;
    assert_eq!(g722.clock_rate(), 16000);
    assert_eq!(g722.rtp_clock_rate(), 8000);
    Ok(())
}

#[test]
fn test_audio_codec_resolution_round_trip() -> Result<()> {
    for codec in KNOWN_AUDIO_CODECS {
        let format = AudioFormat::from_codec(*codec, 96)?;
        assert_eq!(
            AudioCodec::from(format.format_name()),
            *codec,
            "codec {codec} did not round trip through its format name"
        );
    }
    Ok(())
}

#[test]
fn test_audio_codec_resolution_case_insensitive() {
    assert_eq!(AudioCodec::from("pcmu"), AudioCodec::Pcmu);
    assert_eq!(AudioCodec::from("OPUS"), AudioCodec::Opus);
    assert_eq!(AudioCodec::from("g722"), AudioCodec::G722);
}

#[test]
fn test_audio_codec_resolution_unknown() -> Result<()> {
    assert_eq!(AudioCodec::from("x-custom"), AudioCodec::Unknown);

    let format = AudioFormat::dynamic(96, "x-custom", 16000, 1)?;
    assert_eq!(format.codec(), AudioCodec::Unknown);
    assert_eq!(format.format_name(), "x-custom");
    Ok(())
}

#[test]
fn test_audio_format_matching() -> Result<()> {
    let offered = AudioFormat::dynamic(111, "opus", 48000, 2)?;
    let answered = AudioFormat::dynamic(111, "OPUS", 48000, 2)?;
    assert!(offered.matches(&answered));

    // Different payload ID is a different negotiated format.
    let renumbered = AudioFormat::dynamic(112, "opus", 48000, 2)?;
    assert!(!offered.matches(&renumbered));

    // Different name on the same ID is a different negotiated format.
    let other = AudioFormat::dynamic(111, "AMR", 8000, 1)?;
    assert!(!offered.matches(&other));

    // The empty sentinel never matches, not even itself.
    assert!(!AudioFormat::default().matches(&AudioFormat::default()));
    assert!(!offered.matches(&AudioFormat::default()));
    Ok(())
}

#[test]
fn test_audio_format_parameters() -> Result<()> {
    let opus = AudioFormat::dynamic(111, "opus", 48000, 2)?
        .with_parameters("minptime=10;useinbandfec=1");
    assert_eq!(opus.parameters(), Some("minptime=10;useinbandfec=1"));
    Ok(())
}

#[test]
fn test_audio_from_well_known_rejects_video_member() {
    assert_eq!(
        AudioFormat::from_well_known(WellKnownFormat::H263),
        Err(Error::ErrWellKnownKindMismatch)
    );
}
