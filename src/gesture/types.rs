use core::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GesturePoint {
    pub x: f32,
    pub y: f32,
}

impl GesturePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: GesturePoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Compass octant of a path segment in screen coordinates (y grows downward,
/// so `N` points toward the top of the surface).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    E = 0,
    NE = 1,
    N = 2,
    NW = 3,
    W = 4,
    SW = 5,
    S = 6,
    SE = 7,
}

impl Direction {
    /// Counter-clockwise from east, matching octant indices.
    pub const ALL: [Direction; 8] = [
        Direction::E,
        Direction::NE,
        Direction::N,
        Direction::NW,
        Direction::W,
        Direction::SW,
        Direction::S,
        Direction::SE,
    ];

    pub const fn from_octant(index: u8) -> Direction {
        Self::ALL[(index % 8) as usize]
    }

    pub const fn octant(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::E => "E",
            Direction::NE => "NE",
            Direction::N => "N",
            Direction::NW => "NW",
            Direction::W => "W",
            Direction::SW => "SW",
            Direction::S => "S",
            Direction::SE => "SE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    C,
    L,
    M,
    N,
    O,
    S,
    V,
    W,
    Z,
}

impl Letter {
    pub const ALL: [Letter; 10] = [
        Letter::A,
        Letter::C,
        Letter::L,
        Letter::M,
        Letter::N,
        Letter::O,
        Letter::S,
        Letter::V,
        Letter::W,
        Letter::Z,
    ];

    pub const fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::C => 'C',
            Letter::L => 'L',
            Letter::M => 'M',
            Letter::N => 'N',
            Letter::O => 'O',
            Letter::S => 'S',
            Letter::V => 'V',
            Letter::W => 'W',
            Letter::Z => 'Z',
        }
    }

    /// Case-insensitive lookup, for hosts that store bindings as characters.
    pub fn from_char(c: char) -> Option<Letter> {
        let upper = c.to_ascii_uppercase();
        Self::ALL.into_iter().find(|letter| letter.as_char() == upper)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Move,
    Release,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub t_ms: u64,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub const fn new(kind: PointerEventKind, t_ms: u64, x: f32, y: f32) -> Self {
        Self { kind, t_ms, x, y }
    }

    pub const fn press(t_ms: u64, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Press, t_ms, x, y)
    }

    pub const fn moved(t_ms: u64, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, t_ms, x, y)
    }

    pub const fn release(t_ms: u64, x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Release, t_ms, x, y)
    }

    pub const fn cancel(t_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, t_ms, 0.0, 0.0)
    }

    pub const fn point(&self) -> GesturePoint {
        GesturePoint::new(self.x, self.y)
    }
}

/// What the host should do after delivering one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackerOutput {
    /// The event was consumed; `false` means it passes through.
    pub handled: bool,
    /// Ancestors must stop intercepting the rest of this gesture.
    pub disallow_intercept: bool,
    /// The feedback trail changed and should be redrawn.
    pub redraw: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TrackerStateId {
    #[default]
    Idle = 0,
    TrackingSubthreshold = 1,
    TrackingCaptured = 2,
}
