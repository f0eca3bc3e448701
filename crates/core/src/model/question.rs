use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of answer options offered per question.
pub const CHOICE_COUNT: usize = 3;

/// A single addition question with its multiple-choice options.
///
/// Immutable once built; a fresh question replaces it after every correct
/// answer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    operand_a: u32,
    operand_b: u32,
    choices: [u32; CHOICE_COUNT],
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("choices {choices:?} do not include the correct sum {sum}")]
    MissingCorrectSum {
        sum: u32,
        choices: [u32; CHOICE_COUNT],
    },

    #[error("choices {choices:?} contain a duplicate")]
    DuplicateChoice { choices: [u32; CHOICE_COUNT] },
}

impl Question {
    /// Builds a question, validating the choice set.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the choices miss the correct sum or
    /// repeat a value.
    pub fn new(
        operand_a: u32,
        operand_b: u32,
        choices: [u32; CHOICE_COUNT],
    ) -> Result<Self, QuestionError> {
        let sum = operand_a + operand_b;
        if !choices.contains(&sum) {
            return Err(QuestionError::MissingCorrectSum { sum, choices });
        }
        for (index, value) in choices.iter().enumerate() {
            if choices[..index].contains(value) {
                return Err(QuestionError::DuplicateChoice { choices });
            }
        }

        Ok(Self {
            operand_a,
            operand_b,
            choices,
        })
    }

    #[must_use]
    pub fn operand_a(&self) -> u32 {
        self.operand_a
    }

    #[must_use]
    pub fn operand_b(&self) -> u32 {
        self.operand_b
    }

    /// The correct answer.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.operand_a + self.operand_b
    }

    #[must_use]
    pub fn choices(&self) -> &[u32; CHOICE_COUNT] {
        &self.choices
    }

    /// True when the submitted value matches the correct sum.
    #[must_use]
    pub fn is_correct(&self, submitted: u32) -> bool {
        submitted == self.sum()
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Question({} + {}, choices {:?})",
            self.operand_a, self.operand_b, self.choices
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_valid_choices() {
        let question = Question::new(3, 4, [7, 2, 9]).unwrap();
        assert_eq!(question.sum(), 7);
        assert_eq!(question.choices(), &[7, 2, 9]);
    }

    #[test]
    fn rejects_choices_without_the_sum() {
        let err = Question::new(3, 4, [1, 2, 9]).unwrap_err();
        assert!(matches!(err, QuestionError::MissingCorrectSum { sum: 7, .. }));
    }

    #[test]
    fn rejects_duplicate_choices() {
        let err = Question::new(3, 4, [7, 7, 9]).unwrap_err();
        assert!(matches!(err, QuestionError::DuplicateChoice { .. }));
    }

    #[test]
    fn is_correct_compares_against_the_sum() {
        let question = Question::new(3, 4, [7, 2, 9]).unwrap();
        assert!(question.is_correct(7));
        assert!(!question.is_correct(3));
    }
}
