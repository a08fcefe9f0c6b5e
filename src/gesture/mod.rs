pub mod buffer;
pub mod circularity;
pub mod config;
pub mod direction;
pub mod matcher;
pub mod recognizer;
pub mod resample;
pub mod trace;
pub mod tracker;
#[cfg(feature = "graphics")]
pub mod trail;
pub mod types;

pub use config::{active_config, GestureConfig, GestureMetrics};
pub use direction::DirectionSequence;
pub use recognizer::{analyze, recognize};
pub use trace::{RecognitionOutcome, RecognitionTrace, RejectReason};
pub use tracker::GestureTracker;
#[cfg(feature = "graphics")]
pub use trail::draw_trail;
pub use types::{
    Direction, GesturePoint, Letter, PointerEvent, PointerEventKind, TrackerOutput,
    TrackerStateId,
};

/// Every letter the pattern table and the circularity check can produce.
pub fn supported_letters() -> &'static [Letter] {
    &Letter::ALL
}
