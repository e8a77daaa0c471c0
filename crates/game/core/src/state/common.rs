use std::fmt;

/// Unique identifier for a spawned entity within one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Number of simulation steps taken since the run started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three running lanes, left to right.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    pub const fn index(self) -> u8 {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Lane::Left),
            1 => Some(Lane::Center),
            2 => Some(Lane::Right),
            _ => None,
        }
    }

    /// Neighbouring lane to the left, `None` at the boundary.
    pub const fn left(self) -> Option<Self> {
        match self {
            Lane::Left => None,
            Lane::Center => Some(Lane::Left),
            Lane::Right => Some(Lane::Center),
        }
    }

    /// Neighbouring lane to the right, `None` at the boundary.
    pub const fn right(self) -> Option<Self> {
        match self {
            Lane::Left => Some(Lane::Center),
            Lane::Center => Some(Lane::Right),
            Lane::Right => None,
        }
    }

    /// Lane centre as a fraction of the field width.
    pub const fn fraction(self) -> f32 {
        match self {
            Lane::Left => 0.25,
            Lane::Center => 0.5,
            Lane::Right => 0.75,
        }
    }
}

/// Vertical extent of a body, `top < bottom` with `y` growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// Strict overlap; touching edges do not collide.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.top < other.bottom && self.bottom > other.top
    }

    pub fn center(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_neighbours_stop_at_boundaries() {
        assert_eq!(Lane::Left.left(), None);
        assert_eq!(Lane::Left.right(), Some(Lane::Center));
        assert_eq!(Lane::Right.right(), None);
        assert_eq!(Lane::Right.left(), Some(Lane::Center));
    }

    #[test]
    fn lane_index_round_trips() {
        for lane in Lane::ALL {
            assert_eq!(Lane::from_index(lane.index()), Some(lane));
        }
        assert_eq!(Lane::from_index(3), None);
    }

    #[test]
    fn touching_spans_do_not_overlap() {
        let a = Span::new(0.0, 10.0);
        let b = Span::new(10.0, 10.0);
        let c = Span::new(9.5, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }
}
