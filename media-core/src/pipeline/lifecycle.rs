#[cfg(test)]
mod lifecycle_test;

use std::fmt;
use std::sync::{Mutex, PoisonError};

use shared::error::{Error, Result};

const MEDIA_STATE_IDLE_STR: &str = "idle";
const MEDIA_STATE_STARTING_STR: &str = "starting";
const MEDIA_STATE_ACTIVE_STR: &str = "active";
const MEDIA_STATE_PAUSED_STR: &str = "paused";
const MEDIA_STATE_CLOSED_STR: &str = "closed";

/// Lifecycle state shared by every media source and sink.
///
/// Idle (initial) -> Starting -> Active <-> Paused, and any state -> Closed
/// (terminal).
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaState {
    #[default]
    Idle,
    Starting,
    Active,
    Paused,
    Closed,
}

impl fmt::Display for MediaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            MediaState::Idle => MEDIA_STATE_IDLE_STR,
            MediaState::Starting => MEDIA_STATE_STARTING_STR,
            MediaState::Active => MEDIA_STATE_ACTIVE_STR,
            MediaState::Paused => MEDIA_STATE_PAUSED_STR,
            MediaState::Closed => MEDIA_STATE_CLOSED_STR,
        };
        write!(f, "{s}")
    }
}

/// Reusable lifecycle state machine for source/sink implementations.
///
/// Lifecycle calls come from a control thread while sample-delivery
/// callbacks fire concurrently from capture/receive threads; the state is
/// mutex-guarded so every transition is atomic. Close is terminal and
/// exactly-once: of any number of concurrent or repeated `close` calls,
/// precisely one observes `true` and performs resource release.
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: Mutex<MediaState>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Lifecycle {
            state: Mutex::new(MediaState::Idle),
        }
    }

    /// The current state.
    pub fn state(&self) -> MediaState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims the Idle -> Starting transition.
    ///
    /// Returns `Ok(true)` when this caller owns the start: it should acquire
    /// its resources and then call [`complete_start`](Lifecycle::complete_start).
    /// Returns `Ok(false)` when the component is already starting, active or
    /// paused, making a repeated `start` a no-op without duplicating
    /// resource acquisition.
    ///
    /// # Errors
    ///
    /// [`Error::ErrAlreadyClosed`] once closed.
    pub fn begin_start(&self) -> Result<bool> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            MediaState::Idle => {
                *state = MediaState::Starting;
                log::trace!("lifecycle transition idle -> starting");
                Ok(true)
            }
            MediaState::Starting | MediaState::Active | MediaState::Paused => Ok(false),
            MediaState::Closed => Err(Error::ErrAlreadyClosed),
        }
    }

    /// Completes a claimed start: Starting -> Active.
    ///
    /// A close that raced in between wins; the component stays Closed.
    pub fn complete_start(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == MediaState::Starting {
            *state = MediaState::Active;
            log::trace!("lifecycle transition starting -> active");
        }
    }

    /// Active -> Paused. Pausing an already-paused component is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::ErrNotActive`] before the component has started;
    /// [`Error::ErrAlreadyClosed`] once closed.
    pub fn pause(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            MediaState::Active => {
                *state = MediaState::Paused;
                log::trace!("lifecycle transition active -> paused");
                Ok(())
            }
            MediaState::Paused => Ok(()),
            MediaState::Closed => Err(Error::ErrAlreadyClosed),
            MediaState::Idle | MediaState::Starting => Err(Error::ErrNotActive),
        }
    }

    /// Paused -> Active. Resuming an already-active component is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::ErrNotPaused`] before the component has started;
    /// [`Error::ErrAlreadyClosed`] once closed.
    pub fn resume(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            MediaState::Paused => {
                *state = MediaState::Active;
                log::trace!("lifecycle transition paused -> active");
                Ok(())
            }
            MediaState::Active => Ok(()),
            MediaState::Closed => Err(Error::ErrAlreadyClosed),
            MediaState::Idle | MediaState::Starting => Err(Error::ErrNotPaused),
        }
    }

    /// Any state -> Closed.
    ///
    /// Returns `true` for exactly one caller, which must release all held
    /// resources; every other concurrent or subsequent call gets `false`.
    pub fn close(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == MediaState::Closed {
            false
        } else {
            log::trace!("lifecycle transition {} -> closed", *state);
            *state = MediaState::Closed;
            true
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state() == MediaState::Paused
    }

    pub fn is_closed(&self) -> bool {
        self.state() == MediaState::Closed
    }
}
