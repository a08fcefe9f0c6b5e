#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingConfig {
    pub drag_threshold_dp: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResampleConfig {
    pub segment_length_dp: f32,
    pub jitter_epsilon_px: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularityConfig {
    pub min_points: u16,
    pub max_closure_ratio: f32,
    pub min_dimension_dp: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    pub stroke_width_px: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub tracking: TrackingConfig,
    pub resample: ResampleConfig,
    pub circularity: CircularityConfig,
    pub trail: TrailConfig,
}

include!(concat!(env!("OUT_DIR"), "/gesture_config.rs"));

pub fn active_config() -> &'static GestureConfig {
    &GESTURE_CONFIG
}

/// Pixel-space thresholds for one display density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureMetrics {
    pub drag_threshold_px: f32,
    pub segment_length_px: f32,
    pub jitter_epsilon_px: f32,
    pub circle_min_points: usize,
    pub circle_max_closure_ratio: f32,
    pub circle_min_dimension_px: f32,
    pub trail_stroke_width_px: u32,
}

impl GestureConfig {
    /// Resolves `_dp` values for `density` pixels per dp. Densities that are
    /// not positive and finite are treated as 1.0.
    pub fn metrics(&self, density: f32) -> GestureMetrics {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        };
        GestureMetrics {
            drag_threshold_px: self.tracking.drag_threshold_dp * density,
            segment_length_px: self.resample.segment_length_dp * density,
            jitter_epsilon_px: self.resample.jitter_epsilon_px,
            circle_min_points: usize::from(self.circularity.min_points),
            circle_max_closure_ratio: self.circularity.max_closure_ratio,
            circle_min_dimension_px: self.circularity.min_dimension_dp * density,
            trail_stroke_width_px: self.trail.stroke_width_px,
        }
    }
}

impl Default for GestureMetrics {
    fn default() -> Self {
        active_config().metrics(1.0)
    }
}
