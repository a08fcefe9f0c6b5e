use super::{
    circularity::is_circular,
    config::GestureMetrics,
    direction::DirectionSequence,
    matcher::match_sequence,
    resample::resample,
    trace::{RecognitionOutcome, RecognitionTrace, RejectReason},
    types::{GesturePoint, Letter},
};

pub const MIN_GESTURE_POINTS: usize = 3;

/// Runs the full pipeline once and keeps every intermediate result.
///
/// The loop test sees the raw points and wins over direction matching. The
/// direction sequence is still filled in for circular gestures so the trace
/// shows what the matcher would have seen.
pub fn analyze(points: &[GesturePoint], metrics: &GestureMetrics) -> RecognitionTrace {
    let mut trace = RecognitionTrace {
        raw_points: points.len(),
        ..RecognitionTrace::default()
    };
    if points.len() < MIN_GESTURE_POINTS {
        trace.outcome = RecognitionOutcome::Rejected(RejectReason::TooFewPoints);
        return trace;
    }

    let resampled = resample(points, metrics.segment_length_px);
    trace.resampled_points = resampled.len();
    trace.directions = DirectionSequence::from_path(&resampled, metrics.jitter_epsilon_px);
    trace.circular = is_circular(points, metrics);

    trace.outcome = if trace.circular {
        RecognitionOutcome::Recognized(Letter::O)
    } else if resampled.len() < 2 || trace.directions.is_empty() {
        RecognitionOutcome::Rejected(RejectReason::Degenerate)
    } else {
        match match_sequence(trace.directions.as_slice()) {
            Some(letter) => RecognitionOutcome::Recognized(letter),
            None => RecognitionOutcome::Rejected(RejectReason::NoMatchingRule),
        }
    };
    trace
}

pub fn recognize(points: &[GesturePoint], metrics: &GestureMetrics) -> Option<Letter> {
    analyze(points, metrics).letter()
}
