use chrono::{DateTime, Utc};

use crate::model::{Level, PathRange, SessionToken};

/// Correct answers required to clear one level.
pub const QUESTIONS_PER_LEVEL: u32 = 2;

/// Score awarded for each correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Progress state for the currently active path.
///
/// A session is an immutable value: every transition returns a new session
/// and the presentation layer replaces the one it holds wholesale. The
/// token identifies this run; transitions that stay within the run keep
/// it, while a restart or path continuation mints a fresh one.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: SessionToken,
    range: PathRange,
    level: Level,
    progress_in_level: u32,
    score: u32,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a new session at level 1 on the given path.
    #[must_use]
    pub fn start(range: PathRange, now: DateTime<Utc>) -> Self {
        Self {
            token: SessionToken::new(),
            range,
            level: Level::FIRST,
            progress_in_level: 0,
            score: 0,
            started_at: now,
        }
    }

    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.token
    }

    #[must_use]
    pub fn range(&self) -> PathRange {
        self.range
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn progress_in_level(&self) -> u32 {
        self.progress_in_level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Applies one correct answer: score up by the fixed reward, progress
    /// up by one. Progress never exceeds `QUESTIONS_PER_LEVEL`.
    #[must_use]
    pub fn record_correct(&self) -> Self {
        Self {
            score: self.score + POINTS_PER_CORRECT,
            progress_in_level: (self.progress_in_level + 1).min(QUESTIONS_PER_LEVEL),
            ..self.clone()
        }
    }

    /// True once enough correct answers have been collected for this level.
    #[must_use]
    pub fn level_is_complete(&self) -> bool {
        self.progress_in_level >= QUESTIONS_PER_LEVEL
    }

    /// Moves to the next level with progress reset, keeping token, score
    /// and range. Returns `None` on the last level; a completed last level
    /// ends the path instead.
    #[must_use]
    pub fn advance_level(&self) -> Option<Self> {
        let level = self.level.advance()?;
        Some(Self {
            level,
            progress_in_level: 0,
            ..self.clone()
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token)
            .field("range", &self.range)
            .field("level", &self.level)
            .field("progress_in_level", &self.progress_in_level)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn session() -> Session {
        Session::start(PathRange::new(10).unwrap(), fixed_now())
    }

    #[test]
    fn starts_fresh_at_level_one() {
        let session = session();
        assert_eq!(session.level(), Level::FIRST);
        assert_eq!(session.progress_in_level(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.started_at(), fixed_now());
    }

    #[test]
    fn record_correct_awards_fixed_points() {
        let session = session();
        let after = session.record_correct();

        assert_eq!(after.score(), POINTS_PER_CORRECT);
        assert_eq!(after.progress_in_level(), 1);
        assert_eq!(after.token(), session.token());
        assert!(!after.level_is_complete());

        let full = after.record_correct();
        assert_eq!(full.score(), 2 * POINTS_PER_CORRECT);
        assert!(full.level_is_complete());
    }

    #[test]
    fn advance_level_resets_progress_and_keeps_score() {
        let full = session().record_correct().record_correct();
        let advanced = full.advance_level().unwrap();

        assert_eq!(advanced.level().value(), 2);
        assert_eq!(advanced.progress_in_level(), 0);
        assert_eq!(advanced.score(), full.score());
        assert_eq!(advanced.token(), full.token());
    }

    #[test]
    fn advance_level_stops_at_the_last_level() {
        let mut session = session();
        while let Some(next) = session.advance_level() {
            session = next;
        }
        assert!(session.level().is_last());
        assert!(session.advance_level().is_none());
    }

    #[test]
    fn separate_starts_mint_separate_tokens() {
        assert_ne!(session().token(), session().token());
    }
}
