//! The four facings of a shape and the cycle a player rotates through them with.
use std::{fmt, str::FromStr};

use thiserror::Error;

/// Facing of a shape. Rotation runs North → East → South → West → North.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in rotation order.
    pub const ALL: &'static [Orientation] = &[
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Get the orientation for a rotation counter. Wraps modulo 4.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    /// Position of this orientation in rotation order.
    pub fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// The orientation one quarter turn clockwise from this one.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Single-letter abbreviation used in submitted placements.
    pub fn letter(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::North
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.letter().encode_utf8(&mut buf))
    }
}

/// Error returned when text does not name an orientation.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid orientation {0:?}, expected one of N, E, S, W")]
pub struct ParseOrientationError(String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Accepts the single-letter form (`N`) or the full name (`north`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Orientation::North),
            "e" | "east" => Ok(Orientation::East),
            "s" | "south" => Ok(Orientation::South),
            "w" | "west" => Ok(Orientation::West),
            _ => Err(ParseOrientationError(s.to_owned())),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Orientation> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::from_index(rng.gen_range(0, Orientation::ALL.len()))
    }
}

/// Rotation counter shared by every preview of one grid. It only moves when a
/// rotate action asks it to.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct OrientationCycle {
    /// Index into [`Orientation::ALL`], always below 4.
    counter: usize,
}

impl OrientationCycle {
    /// Start a cycle facing north.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a cycle facing the given orientation.
    pub fn starting_at(orientation: Orientation) -> Self {
        Self {
            counter: orientation.index(),
        }
    }

    /// The orientation the cycle currently points at.
    pub fn current(&self) -> Orientation {
        Orientation::from_index(self.counter)
    }

    /// Advance the cycle a quarter turn and return the new orientation.
    pub fn rotate(&mut self) -> Orientation {
        self.counter = (self.counter + 1) % Orientation::ALL.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_orientation() {
        assert_eq!("N".parse::<Orientation>(), Ok(Orientation::North));
        assert_eq!("e".parse::<Orientation>(), Ok(Orientation::East));
        assert_eq!("South".parse::<Orientation>(), Ok(Orientation::South));
        assert_eq!(" w ".parse::<Orientation>(), Ok(Orientation::West));
        assert_eq!(
            "up".parse::<Orientation>(),
            Err(ParseOrientationError("up".to_owned()))
        );
    }

    #[test]
    fn display_is_single_letter() {
        let shown: Vec<String> = Orientation::ALL.iter().map(|o| o.to_string()).collect();
        assert_eq!(shown, ["N", "E", "S", "W"]);
        for &o in Orientation::ALL {
            assert_eq!(o.to_string().parse::<Orientation>(), Ok(o));
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Orientation::from_index(0), Orientation::North);
        assert_eq!(Orientation::from_index(3), Orientation::West);
        assert_eq!(Orientation::from_index(6), Orientation::South);
        assert_eq!(Orientation::West.next(), Orientation::North);
    }

    #[test]
    fn cycle_has_period_four() {
        let mut cycle = OrientationCycle::new();
        assert_eq!(cycle.current(), Orientation::North);
        assert_eq!(cycle.rotate(), Orientation::East);
        assert_eq!(cycle.rotate(), Orientation::South);
        assert_eq!(cycle.rotate(), Orientation::West);
        assert_eq!(cycle.rotate(), Orientation::North);
        assert_eq!(cycle, OrientationCycle::new());
    }

    #[test]
    fn current_does_not_advance() {
        let cycle = OrientationCycle::starting_at(Orientation::South);
        assert_eq!(cycle.current(), Orientation::South);
        assert_eq!(cycle.current(), Orientation::South);
    }
}
