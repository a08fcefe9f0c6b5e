//! Single-stroke letter recognition for pointer gestures.
//!
//! A [`GestureTracker`] follows one press/move/release cycle at a time. Short
//! presses and small drags pass through to whatever sits beneath it; once a
//! drag travels past the configured threshold the tracker claims the gesture,
//! and on release the collected points run through the recognition pipeline:
//!
//! 1. circularity check on the raw points (`O`),
//! 2. resampling to near-uniform spacing,
//! 3. octant classification with consecutive duplicates collapsed,
//! 4. first-match-wins lookup in a fixed pattern table.
//!
//! A recognized [`Letter`] is handed to the callback supplied at construction.
//! Tuning values are compiled from `config/gestures.toml` at build time and
//! exposed through [`active_config`].

pub mod gesture;

pub use gesture::{
    active_config, analyze, recognize, supported_letters, Direction, DirectionSequence,
    GestureConfig, GestureMetrics, GesturePoint, GestureTracker, Letter, PointerEvent,
    PointerEventKind, RecognitionOutcome, RecognitionTrace, RejectReason, TrackerOutput,
    TrackerStateId,
};

#[cfg(feature = "graphics")]
pub use gesture::draw_trail;
