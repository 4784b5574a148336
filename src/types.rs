//! Core value types: trial parameters, per-trial outcomes, and the
//! validation errors raised at the configuration boundary.

use thiserror::Error;

/// Errors raised when simulation parameters violate their invariants.
///
/// These are detected once, at the configuration boundary; the simulation
/// core never re-validates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("there must be at least 3 doors to play (got {got})")]
    DoorCount { got: i64 },
    #[error("number of doors opened by the host must be between 0 and {max} (got {got})")]
    OpenCount { got: i64, max: u64 },
    #[error("number of trials must be positive (got {got})")]
    TrialCount { got: i64 },
}

/// Validated game parameters: `doors` total, of which the host opens
/// `opened` after the player's initial pick.
///
/// Construction via [`TrialParams::new`] is the only way in, so holders may
/// assume `doors >= 3` and `opened <= doors - 2`: at least one door is left
/// for the host to open, and at least one unopened non-chosen door is left
/// to switch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialParams {
    doors: u64,
    opened: u64,
}

impl TrialParams {
    /// Validate and build. `doors` and `opened` arrive as raw signed
    /// integers straight from the CLI parser.
    pub fn new(doors: i64, opened: i64) -> Result<Self, ParamError> {
        if doors < 3 {
            return Err(ParamError::DoorCount { got: doors });
        }
        let max_opened = doors as u64 - 2;
        if opened < 0 || opened as u64 > max_opened {
            return Err(ParamError::OpenCount {
                got: opened,
                max: max_opened,
            });
        }
        Ok(Self {
            doors: doors as u64,
            opened: opened as u64,
        })
    }

    #[inline]
    pub fn doors(&self) -> u64 {
        self.doors
    }

    #[inline]
    pub fn opened(&self) -> u64 {
        self.opened
    }

    /// Doors the player could switch to after the host opens: `n - k - 1`.
    /// Always >= 1 by construction.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.doors - self.opened - 1
    }
}

/// Validate a raw trial count, returning it widened for the batch runner.
pub fn validate_trial_count(trials: i64) -> Result<u64, ParamError> {
    if trials <= 0 {
        return Err(ParamError::TrialCount { got: trials });
    }
    Ok(trials as u64)
}

/// Outcome of one simulated game: whether each strategy would have won.
///
/// Never both true. When `opened == doors - 2` exactly one is true; for
/// smaller `opened` the switching player picks among several surviving
/// doors and may lose either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrialOutcome {
    pub stay_won: bool,
    pub switch_won: bool,
}
