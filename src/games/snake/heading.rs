//! Directions of travel on the motion lattice.

use serde::{Deserialize, Serialize};

/// Direction the body's head travels on the next tick.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Heading {
    /// Towards smaller `y`.
    #[strum(to_string = "Up", serialize = "U")]
    Up,
    /// Towards larger `y`.
    #[strum(to_string = "Down", serialize = "D")]
    Down,
    /// Towards smaller `x`.
    #[strum(to_string = "Left", serialize = "L")]
    Left,
    /// Towards larger `x`.
    #[default]
    #[strum(to_string = "Right", serialize = "R")]
    Right,
}

impl Heading {
    /// Returns the heading pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn.
    pub fn is_opposite(self, other: Heading) -> bool {
        self.opposite() == other
    }

    /// Unit delta (dx, dy) for one move in this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opposite_headings() {
        assert!(Heading::Up.is_opposite(Heading::Down));
        assert!(Heading::Left.is_opposite(Heading::Right));
        assert!(!Heading::Up.is_opposite(Heading::Left));
        assert!(!Heading::Right.is_opposite(Heading::Right));
        for heading in Heading::iter() {
            assert_eq!(heading.opposite().opposite(), heading);
        }
    }

    #[test]
    fn test_heading_delta() {
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Down.delta(), (0, 1));
        assert_eq!(Heading::Left.delta(), (-1, 0));
        assert_eq!(Heading::Right.delta(), (1, 0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Heading::from_str("right").unwrap(), Heading::Right);
        assert_eq!(Heading::from_str("U").unwrap(), Heading::Up);
        assert_eq!(Heading::from_str("d").unwrap(), Heading::Down);
        assert!(Heading::from_str("north").is_err());
    }
}
