use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    //Format construction errors. Validation happens at construction time and
    //never falls back to a silently clamped or defaulted value.
    #[error("format ID {0} exceeds the maximum payload type of 127")]
    ErrFormatIdOutOfRange(u8),
    #[error("a non-empty format name must be provided")]
    ErrFormatNameEmpty,
    #[error("the clock rate must be greater than 0")]
    ErrClockRateZero,
    #[error("the RTP clock rate must be greater than 0")]
    ErrRtpClockRateZero,
    #[error("the channel count must be greater than 0")]
    ErrChannelCountZero,
    #[error("the well known format is for a different media kind")]
    ErrWellKnownKindMismatch,
    #[error("operation attempted on the empty format sentinel")]
    ErrEmptyFormat,

    //Capability errors.
    #[error("format is not supported by this component")]
    ErrFormatNotSupported,

    //Lifecycle errors.
    #[error("media component is not active")]
    ErrNotActive,
    #[error("media component is not paused")]
    ErrNotPaused,
    #[error("media component is already closed")]
    ErrAlreadyClosed,

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
