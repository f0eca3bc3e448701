use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The numeric range of a path. Questions on the path stay within
/// `0..=value()` and the player clears ten levels before moving on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathRange(u32);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathRangeError {
    #[error("path range must be at least 5: {got}")]
    TooSmall { got: u32 },

    #[error("path range above 5 must be a multiple of 10: {got}")]
    NotOnLadder { got: u32 },
}

impl PathRange {
    /// The smallest supported path.
    pub const SMALLEST: PathRange = PathRange(5);

    /// Validates a raw range against the supported ladder (5, 10, 20, 30, ...).
    ///
    /// # Errors
    ///
    /// Returns `PathRangeError` for ranges below 5 or off the ladder.
    pub fn new(value: u32) -> Result<Self, PathRangeError> {
        if value < 5 {
            return Err(PathRangeError::TooSmall { got: value });
        }
        if value != 5 && value % 10 != 0 {
            return Err(PathRangeError::NotOnLadder { got: value });
        }
        Ok(Self(value))
    }

    /// Returns the underlying u32 value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The next larger range on the fixed ladder: 5→10, 10→20, 20→30,
    /// then +10 for every path after that.
    #[must_use]
    pub fn next(&self) -> PathRange {
        match self.0 {
            5 => PathRange(10),
            10 => PathRange(20),
            20 => PathRange(30),
            n => PathRange(n + 10),
        }
    }

    /// The ranges offered on the selection menu.
    #[must_use]
    pub fn starting_paths() -> [PathRange; 3] {
        [PathRange(5), PathRange(10), PathRange(20)]
    }
}

impl fmt::Debug for PathRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathRange({})", self.0)
    }
}

impl fmt::Display for PathRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ladder_ranges() {
        for value in [5, 10, 20, 30, 40, 100] {
            assert_eq!(PathRange::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn rejects_off_ladder_ranges() {
        assert_eq!(
            PathRange::new(3),
            Err(PathRangeError::TooSmall { got: 3 })
        );
        assert_eq!(
            PathRange::new(7),
            Err(PathRangeError::NotOnLadder { got: 7 })
        );
        assert_eq!(
            PathRange::new(25),
            Err(PathRangeError::NotOnLadder { got: 25 })
        );
    }

    #[test]
    fn ladder_steps_through_fixed_sequence() {
        let five = PathRange::new(5).unwrap();
        let ten = five.next();
        let twenty = ten.next();
        let thirty = twenty.next();
        let forty = thirty.next();

        assert_eq!(ten.value(), 10);
        assert_eq!(twenty.value(), 20);
        assert_eq!(thirty.value(), 30);
        assert_eq!(forty.value(), 40);
    }

    #[test]
    fn starting_paths_match_menu() {
        let values: Vec<u32> = PathRange::starting_paths()
            .iter()
            .map(PathRange::value)
            .collect();
        assert_eq!(values, vec![5, 10, 20]);
    }
}
