//! Step indicator: which stage of the flow (intake, verification,
//! result) is currently active.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One marker in the step indicator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Step {
    /// Step 0: choose a document.
    #[default]
    Upload,
    /// Step 1: simulated upload and verification.
    Verify,
    /// Step 2: verification result.
    Results,
}

impl Step {
    /// All steps in display order.
    pub const ALL: [Self; 3] = [Self::Upload, Self::Verify, Self::Results];

    /// Zero-based position of the marker.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Upload => 0,
            Self::Verify => 1,
            Self::Results => 2,
        }
    }

    /// Step at `index`, clamped to the last step.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Upload,
            1 => Self::Verify,
            _ => Self::Results,
        }
    }

    /// Display label for the marker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload Document",
            Self::Verify => "Verification",
            Self::Results => "Results",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The step indicator, reduced to its only state: the current step.
///
/// Every marker at or before the current step is active; the rest are
/// inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StepIndicator {
    current: Step,
}

impl StepIndicator {
    /// Indicator positioned at `step`.
    #[must_use]
    pub const fn at(step: Step) -> Self {
        Self { current: step }
    }

    /// Indicator positioned at `index`, clamped to the last step.
    #[must_use]
    pub const fn at_index(index: usize) -> Self {
        Self::at(Step::from_index(index))
    }

    /// The current step.
    #[must_use]
    pub const fn current(self) -> Step {
        self.current
    }

    /// Whether the marker at `index` is active.
    #[must_use]
    pub const fn is_active(self, index: usize) -> bool {
        index <= self.current.index()
    }

    /// Each step paired with its active flag, in display order.
    #[must_use]
    pub fn markers(self) -> [(Step, bool); 3] {
        Step::ALL.map(|step| (step, self.is_active(step.index())))
    }
}

impl fmt::Display for StepIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.current.index(), self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_index(step.index()), step);
        }
    }

    #[test]
    fn markers_at_or_before_target_are_active() {
        let expected = [
            [true, false, false],
            [true, true, false],
            [true, true, true],
        ];
        for (target, want) in expected.iter().enumerate() {
            let flags = StepIndicator::at_index(target).markers().map(|(_, a)| a);
            assert_eq!(&flags, want, "target {target}");
        }
    }

    #[test]
    fn out_of_range_target_clamps_to_last() {
        assert_eq!(StepIndicator::at_index(7).current(), Step::Results);
        assert!(StepIndicator::at_index(7).is_active(2));
    }

    #[test]
    fn update_is_idempotent() {
        let once = StepIndicator::at_index(1);
        let twice = StepIndicator::at(once.current());
        assert_eq!(once, twice);
        assert_eq!(once.markers(), twice.markers());
    }

    #[test]
    fn default_is_first_step() {
        assert_eq!(StepIndicator::default().current(), Step::Upload);
    }
}
