use super::*;

use crate::format::audio::{AudioCodec, AudioFormat};
use crate::format::well_known::WellKnownFormat;

fn advertised() -> Result<FormatCapabilities<AudioFormat>> {
    Ok(FormatCapabilities::new(vec![
        AudioFormat::from_well_known(WellKnownFormat::Pcmu)?,
        AudioFormat::from_well_known(WellKnownFormat::Pcma)?,
        AudioFormat::dynamic(111, "opus", 48000, 2)?,
    ]))
}

#[test]
fn test_restrict_returns_exact_subset() -> Result<()> {
    let capabilities = advertised()?;
    assert_eq!(capabilities.formats().len(), 3);

    capabilities.restrict(|format: &AudioFormat| format.codec() == AudioCodec::Opus);

    let formats = capabilities.formats();
    assert_eq!(formats.len(), 1);
    assert_eq!(formats[0].format_name(), "opus");
    Ok(())
}

#[test]
fn test_restrict_is_monotonic() -> Result<()> {
    let capabilities = advertised()?;
    capabilities.restrict(|format: &AudioFormat| format.codec() == AudioCodec::Pcmu);
    assert_eq!(capabilities.formats().len(), 1);

    // A broader predicate applies to the already-narrowed set; removed
    // formats do not come back.
    capabilities.restrict(|_: &AudioFormat| true);
    let formats = capabilities.formats();
    assert_eq!(formats.len(), 1);
    assert_eq!(formats[0].codec(), AudioCodec::Pcmu);
    Ok(())
}

#[test]
fn test_restrict_to_nothing() -> Result<()> {
    let capabilities = advertised()?;
    capabilities.restrict(|_: &AudioFormat| false);
    assert!(capabilities.formats().is_empty());
    Ok(())
}

#[test]
fn test_select_advertised_format() -> Result<()> {
    let capabilities = advertised()?;
    assert_eq!(capabilities.selected(), None);

    let opus = AudioFormat::dynamic(111, "opus", 48000, 2)?;
    capabilities.select(opus.clone(), AudioFormat::matches)?;
    assert_eq!(capabilities.selected(), Some(opus));
    Ok(())
}

#[test]
fn test_select_unsupported_format_fails() -> Result<()> {
    let capabilities = advertised()?;

    let amr = AudioFormat::dynamic(112, "AMR", 8000, 1)?;
    assert_eq!(
        capabilities.select(amr, AudioFormat::matches),
        Err(Error::ErrFormatNotSupported)
    );
    assert_eq!(capabilities.selected(), None);
    Ok(())
}

#[test]
fn test_select_respects_restriction() -> Result<()> {
    let capabilities = advertised()?;
    capabilities.restrict(|format: &AudioFormat| format.codec() != AudioCodec::Opus);

    let opus = AudioFormat::dynamic(111, "opus", 48000, 2)?;
    assert_eq!(
        capabilities.select(opus, AudioFormat::matches),
        Err(Error::ErrFormatNotSupported)
    );
    Ok(())
}
