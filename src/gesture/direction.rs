use core::fmt;

use super::{buffer::POINT_BUFFER_CAPACITY, types::Direction, types::GesturePoint};

const OCTANT_WIDTH_DEG: f32 = 45.0;
const HALF_OCTANT_DEG: f32 = OCTANT_WIDTH_DEG / 2.0;

/// A set of octants, one bit per [`Direction`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    pub const fn of(directions: &[Direction]) -> DirectionSet {
        let mut bits = 0u8;
        let mut idx = 0;
        while idx < directions.len() {
            bits |= 1 << directions[idx].octant();
            idx += 1;
        }
        DirectionSet(bits)
    }

    pub const fn union(self, other: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 | other.0)
    }

    pub const fn intersect(self, other: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 & other.0)
    }

    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.octant()) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

pub const UPISH: DirectionSet = DirectionSet::of(&[Direction::N, Direction::NE, Direction::NW]);
pub const DOWNISH: DirectionSet = DirectionSet::of(&[Direction::S, Direction::SE, Direction::SW]);
pub const RIGHTISH: DirectionSet = DirectionSet::of(&[Direction::E, Direction::NE, Direction::SE]);
pub const LEFTISH: DirectionSet = DirectionSet::of(&[Direction::W, Direction::NW, Direction::SW]);
// Mixed diagonals: the diagonal plus its horizontal neighbour.
pub const DOWN_RIGHTISH: DirectionSet = DirectionSet::of(&[Direction::SE, Direction::E]);
pub const DOWN_LEFTISH: DirectionSet = DirectionSet::of(&[Direction::SW, Direction::W]);
pub const UP_RIGHTISH: DirectionSet = DirectionSet::of(&[Direction::NE, Direction::E]);

impl Direction {
    pub const fn is_upish(self) -> bool {
        UPISH.contains(self)
    }

    pub const fn is_downish(self) -> bool {
        DOWNISH.contains(self)
    }

    pub const fn is_rightish(self) -> bool {
        RIGHTISH.contains(self)
    }

    pub const fn is_leftish(self) -> bool {
        LEFTISH.contains(self)
    }

    pub const fn is_down_rightish(self) -> bool {
        DOWN_RIGHTISH.contains(self)
    }

    pub const fn is_down_leftish(self) -> bool {
        DOWN_LEFTISH.contains(self)
    }

    pub const fn is_up_rightish(self) -> bool {
        UP_RIGHTISH.contains(self)
    }
}

/// Quantizes the segment `from -> to`, or `None` when it is no longer than
/// `jitter_epsilon`.
pub fn classify_segment(
    from: GesturePoint,
    to: GesturePoint,
    jitter_epsilon: f32,
) -> Option<Direction> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if (dx * dx + dy * dy).sqrt() <= jitter_epsilon {
        return None;
    }
    // Screen y grows downward; negate so "up" lands on 90 degrees.
    let degrees = (-dy).atan2(dx).to_degrees().rem_euclid(360.0);
    let octant = ((degrees + HALF_OCTANT_DEG) / OCTANT_WIDTH_DEG) as u8;
    Some(Direction::from_octant(octant))
}

/// Octant sequence in which no two neighbours are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionSequence {
    directions: heapless::Vec<Direction, POINT_BUFFER_CAPACITY>,
}

impl DirectionSequence {
    pub const fn new() -> Self {
        Self {
            directions: heapless::Vec::new(),
        }
    }

    /// Classifies every segment of `points` and collapses repeats.
    pub fn from_path(points: &[GesturePoint], jitter_epsilon: f32) -> Self {
        let mut sequence = Self::new();
        for pair in points.windows(2) {
            if let Some(direction) = classify_segment(pair[0], pair[1], jitter_epsilon) {
                sequence.push(direction);
            }
        }
        sequence
    }

    /// Appends `direction` unless it repeats the last element.
    pub fn push(&mut self, direction: Direction) {
        if self.directions.last() == Some(&direction) {
            return;
        }
        // One entry per segment at most, so capacity is never exceeded.
        let _ = self.directions.push(direction);
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.directions
    }
}

impl FromIterator<Direction> for DirectionSequence {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for direction in iter {
            sequence.push(direction);
        }
        sequence
    }
}

impl fmt::Display for DirectionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, direction) in self.directions.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(direction.label())?;
        }
        f.write_str("]")
    }
}
