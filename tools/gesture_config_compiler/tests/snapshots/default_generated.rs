// @generated by gesture_config_compiler. Do not edit by hand.
pub static GESTURE_CONFIG: GestureConfig = GestureConfig {
    tracking: TrackingConfig {
        drag_threshold_dp: 30.0,
    },
    resample: ResampleConfig {
        segment_length_dp: 30.0,
        jitter_epsilon_px: 1.0,
    },
    circularity: CircularityConfig {
        min_points: 8,
        max_closure_ratio: 0.35,
        min_dimension_dp: 20.0,
    },
    trail: TrailConfig {
        stroke_width_px: 3,
    },
};
