use core::fmt;

use super::{direction::DirectionSequence, types::Letter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum RejectReason {
    /// Fewer raw points than a letter can be built from.
    #[default]
    TooFewPoints = 0,
    /// Every segment was jitter, so no direction survived.
    Degenerate = 1,
    NoMatchingRule = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Recognized(Letter),
    Rejected(RejectReason),
}

impl Default for RecognitionOutcome {
    fn default() -> Self {
        Self::Rejected(RejectReason::default())
    }
}

/// Intermediate values of one recognition run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecognitionTrace {
    pub raw_points: usize,
    pub resampled_points: usize,
    pub directions: DirectionSequence,
    pub circular: bool,
    /// The raw gesture hit the point buffer capacity.
    pub overflowed: bool,
    pub outcome: RecognitionOutcome,
}

impl RecognitionTrace {
    pub fn letter(&self) -> Option<Letter> {
        match self.outcome {
            RecognitionOutcome::Recognized(letter) => Some(letter),
            RecognitionOutcome::Rejected(_) => None,
        }
    }
}

impl fmt::Display for RecognitionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "raw={} resampled={} dirs={} circular={} overflowed={} ",
            self.raw_points, self.resampled_points, self.directions, self.circular, self.overflowed
        )?;
        match self.outcome {
            RecognitionOutcome::Recognized(letter) => write!(f, "letter={letter}"),
            RecognitionOutcome::Rejected(reason) => write!(f, "rejected={reason:?}"),
        }
    }
}
