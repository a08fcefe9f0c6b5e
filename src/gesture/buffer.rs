use super::types::GesturePoint;

pub const POINT_BUFFER_CAPACITY: usize = 1024;

/// Append-only point storage for the gesture in progress.
///
/// Once full, further points overwrite the last slot so the release point
/// always ends the recorded path.
pub struct PointBuffer {
    points: heapless::Vec<GesturePoint, POINT_BUFFER_CAPACITY>,
    overflowed: bool,
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PointBuffer {
    pub const fn new() -> Self {
        Self {
            points: heapless::Vec::new(),
            overflowed: false,
        }
    }

    pub fn push(&mut self, point: GesturePoint) {
        if let Err(point) = self.points.push(point) {
            self.overflowed = true;
            if let Some(last) = self.points.last_mut() {
                *last = point;
            }
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.overflowed = false;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn as_slice(&self) -> &[GesturePoint] {
        &self.points
    }
}
