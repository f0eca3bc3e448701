use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the ten stages within a path.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Level(u8);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level must be between 1 and {max}: {got}", max = Level::MAX.value())]
    OutOfRange { got: u8 },
}

impl Level {
    /// The first level of every path.
    pub const FIRST: Level = Level(1);

    /// The last level of every path.
    pub const MAX: Level = Level(10);

    /// Validates a raw level number.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::OutOfRange` outside `1..=10`.
    pub fn new(value: u8) -> Result<Self, LevelError> {
        if value == 0 || value > Self::MAX.0 {
            return Err(LevelError::OutOfRange { got: value });
        }
        Ok(Self(value))
    }

    /// Returns the underlying level number.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The next level, or `None` past the last one.
    #[must_use]
    pub fn advance(&self) -> Option<Level> {
        if self.is_last() {
            None
        } else {
            Some(Level(self.0 + 1))
        }
    }

    /// Returns true on the final level of a path.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.0 == Self::MAX.0
    }

    /// Smallest permitted first operand. Levels above 5 never ask
    /// zero-plus-something questions.
    #[must_use]
    pub fn min_operand(&self) -> u32 {
        if self.0 > 5 { 1 } else { 0 }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_levels_one_through_ten() {
        for value in 1..=10 {
            assert_eq!(Level::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn rejects_zero_and_eleven() {
        assert!(Level::new(0).is_err());
        assert!(Level::new(11).is_err());
    }

    #[test]
    fn advance_stops_at_max() {
        let nine = Level::new(9).unwrap();
        assert_eq!(nine.advance(), Some(Level::MAX));
        assert_eq!(Level::MAX.advance(), None);
    }

    #[test]
    fn min_operand_biases_later_levels() {
        assert_eq!(Level::new(5).unwrap().min_operand(), 0);
        assert_eq!(Level::new(6).unwrap().min_operand(), 1);
        assert_eq!(Level::MAX.min_operand(), 1);
    }
}
