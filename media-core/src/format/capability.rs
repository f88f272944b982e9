#[cfg(test)]
mod capability_test;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::error::{Error, Result};

/// Thread-safe holder for the set of formats a pipeline component is willing
/// to negotiate, plus the format pinned on it once negotiation settles.
///
/// `restrict` implements the capability-restriction protocol: a higher-level
/// negotiation layer prunes a component's advertised formats to the subset
/// acceptable to a remote peer without the component needing any knowledge of
/// the negotiation protocol itself. Narrowing is monotonic and irreversible;
/// the full unfiltered set is not recoverable except by reconstructing the
/// component.
#[derive(Debug, Default)]
pub struct FormatCapabilities<F> {
    formats: RwLock<Vec<F>>,
    selected: RwLock<Option<F>>,
}

impl<F: Clone> FormatCapabilities<F> {
    /// Creates a capability set advertising `formats`.
    pub fn new(formats: Vec<F>) -> Self {
        FormatCapabilities {
            formats: RwLock::new(formats),
            selected: RwLock::new(None),
        }
    }

    /// Snapshot of the currently advertised formats.
    pub fn formats(&self) -> Vec<F> {
        self.read_formats().clone()
    }

    /// Narrows the advertised set to formats satisfying `predicate`.
    ///
    /// Formats failing the predicate are removed permanently: a later call
    /// with a broader predicate applies to the already-narrowed set and
    /// cannot reinstate them. The predicate must be a pure function of its
    /// input since capability queries may run on any thread.
    pub fn restrict<P>(&self, predicate: P)
    where
        P: Fn(&F) -> bool,
    {
        self.write_formats().retain(|format| predicate(format));
    }

    /// Pins `format` as the negotiated selection.
    ///
    /// `matcher` decides whether an advertised format and the candidate
    /// denote the same negotiated format (payload ID plus canonical name for
    /// the descriptor types).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ErrFormatNotSupported`] when no advertised format
    /// matches the candidate. Selecting an unsupported format is a caller
    /// precondition violation, not a state change.
    pub fn select<M>(&self, format: F, matcher: M) -> Result<()>
    where
        M: Fn(&F, &F) -> bool,
    {
        let supported = self
            .read_formats()
            .iter()
            .any(|advertised| matcher(advertised, &format));
        if !supported {
            return Err(Error::ErrFormatNotSupported);
        }

        *self
            .selected
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(format);
        Ok(())
    }

    /// The pinned format, if negotiation has settled on one.
    pub fn selected(&self) -> Option<F> {
        self.selected
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn read_formats(&self) -> RwLockReadGuard<'_, Vec<F>> {
        self.formats.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_formats(&self) -> RwLockWriteGuard<'_, Vec<F>> {
        self.formats.write().unwrap_or_else(PoisonError::into_inner)
    }
}
