//! Simulated progress: the percentage counter and its status text.
//!
//! Progress is purely cosmetic. It advances by a fixed step on each
//! timer tick and is not tied to any data transfer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status shown when an upload starts, before the first tick.
pub const PREPARING_STATUS: &str = "Preparing upload...";

/// Status shown once the settle delay after 100% has elapsed.
pub const COMPLETE_STATUS: &str = "Verification Complete!";

/// Upper bound of the progress counter.
pub const MAX_PROGRESS: u8 = 100;

/// Phase of the simulated verification, derived from the progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressPhase {
    /// `p < 40`
    Uploading,
    /// `40 <= p < 70`
    Analyzing,
    /// `70 <= p < 90`
    Verifying,
    /// `p >= 90`
    Finalizing,
}

impl ProgressPhase {
    /// Phase for a progress percentage. Lower bounds are inclusive.
    #[must_use]
    pub const fn from_progress(progress: u8) -> Self {
        match progress {
            0..40 => Self::Uploading,
            40..70 => Self::Analyzing,
            70..90 => Self::Verifying,
            _ => Self::Finalizing,
        }
    }

    /// Status text shown under the progress bar.
    #[must_use]
    pub const fn status(self) -> &'static str {
        match self {
            Self::Uploading => "Uploading document...",
            Self::Analyzing => "Analyzing document...",
            Self::Verifying => "Verifying authenticity...",
            Self::Finalizing => "Finalizing verification...",
        }
    }
}

impl fmt::Display for ProgressPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}

/// Status text for a progress percentage.
#[must_use]
pub const fn status_for(progress: u8) -> &'static str {
    ProgressPhase::from_progress(progress).status()
}

/// Advance `progress` by one tick of `step`, saturating at
/// [`MAX_PROGRESS`].
///
/// A zero step advances by one.
#[must_use]
pub fn advance(progress: u8, step: u8) -> u8 {
    progress.saturating_add(step.max(1)).min(MAX_PROGRESS)
}

/// Number of ticks needed to go from 0 to [`MAX_PROGRESS`].
#[must_use]
pub fn ticks_to_complete(step: u8) -> u32 {
    u32::from(MAX_PROGRESS).div_ceil(u32::from(step.max(1)))
}
