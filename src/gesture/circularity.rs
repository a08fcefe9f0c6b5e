use super::{config::GestureMetrics, types::GesturePoint};

/// Axis-aligned bounds of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn of(points: &[GesturePoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for point in rest {
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.max_y = bounds.max_y.max(point.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn diagonal(&self) -> f32 {
        let (w, h) = (self.width(), self.height());
        (w * w + h * h).sqrt()
    }
}

/// Closed-loop test on the raw gesture.
///
/// A path is circular when it has at least `circle_min_points` points, ends
/// within `circle_max_closure_ratio` of its bounding-box diagonal from where it
/// started, and its bounding box is wider and taller than
/// `circle_min_dimension_px`.
pub fn is_circular(points: &[GesturePoint], metrics: &GestureMetrics) -> bool {
    if points.len() < metrics.circle_min_points {
        return false;
    }
    let (Some(first), Some(last), Some(bounds)) =
        (points.first(), points.last(), Bounds::of(points))
    else {
        return false;
    };

    let min_dimension = metrics.circle_min_dimension_px;
    if bounds.width() <= min_dimension || bounds.height() <= min_dimension {
        return false;
    }
    first.distance_to(*last) <= metrics.circle_max_closure_ratio * bounds.diagonal()
}
