use mathpath_core::Clock;
use mathpath_core::model::{Question, Session};

/// Whether a submitted answer matched the question's sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// What the presentation layer should schedule after an evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextAction {
    /// Briefly show the retry cue and keep the same question.
    ShowIncorrect,
    /// Short pause, then a fresh question on the same level.
    NextQuestion,
    /// Level cleared: show the banner, advance, then a fresh question.
    LevelUp,
    /// Final level cleared: freeze the session on the completion screen.
    PathComplete,
}

/// Result of evaluating one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub verdict: Verdict,
    pub session: Session,
    pub next: NextAction,
}

/// Compares a submission against the question and steps the session.
///
/// A wrong answer returns the session untouched, so repeated wrong
/// submissions on the same question change nothing. A correct answer
/// applies the fixed reward and decides whether play continues on this
/// level, the next level opens, or the path is done.
#[must_use]
pub fn evaluate_answer(question: &Question, submitted: u32, session: &Session) -> AnswerOutcome {
    if !question.is_correct(submitted) {
        return AnswerOutcome {
            verdict: Verdict::Incorrect,
            session: session.clone(),
            next: NextAction::ShowIncorrect,
        };
    }

    let session = session.record_correct();
    let next = if !session.level_is_complete() {
        NextAction::NextQuestion
    } else if session.level().is_last() {
        tracing::info!(
            range = session.range().value(),
            score = session.score(),
            "path complete"
        );
        NextAction::PathComplete
    } else {
        tracing::info!(
            cleared = session.level().value(),
            score = session.score(),
            "level cleared"
        );
        NextAction::LevelUp
    };

    AnswerOutcome {
        verdict: Verdict::Correct,
        session,
        next,
    }
}

/// Applies the level-up scheduled after the banner delay. `None` when the
/// session already sits on the last level.
#[must_use]
pub fn advance_level(session: &Session) -> Option<Session> {
    session.advance_level()
}

/// Starts a fresh session on the next ladder range, with a new token and
/// the score reset.
#[must_use]
pub fn continue_path(session: &Session, clock: &Clock) -> Session {
    Session::start(session.range().next(), clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathpath_core::model::{PathRange, Question, POINTS_PER_CORRECT};
    use mathpath_core::time::{fixed_clock, fixed_now};

    fn question() -> Question {
        Question::new(3, 4, [7, 2, 9]).unwrap()
    }

    fn session() -> Session {
        Session::start(PathRange::new(10).unwrap(), fixed_now())
    }

    fn session_at_level(level: u8) -> Session {
        let mut session = session();
        while session.level().value() < level {
            session = session.advance_level().unwrap();
        }
        session
    }

    #[test]
    fn correct_answer_awards_points_and_continues() {
        let session = session();
        let outcome = evaluate_answer(&question(), 7, &session);

        assert_eq!(outcome.verdict, Verdict::Correct);
        assert_eq!(outcome.next, NextAction::NextQuestion);
        assert_eq!(outcome.session.score(), POINTS_PER_CORRECT);
        assert_eq!(outcome.session.progress_in_level(), 1);
    }

    #[test]
    fn wrong_answer_leaves_the_session_unchanged() {
        let session = session();
        let outcome = evaluate_answer(&question(), 3, &session);

        assert_eq!(outcome.verdict, Verdict::Incorrect);
        assert_eq!(outcome.next, NextAction::ShowIncorrect);
        assert_eq!(outcome.session, session);

        // Repeated wrong submissions stay a no-op.
        let again = evaluate_answer(&question(), 3, &outcome.session);
        assert_eq!(again.session, session);
    }

    #[test]
    fn second_correct_answer_triggers_level_up() {
        let session = session_at_level(8);

        let first = evaluate_answer(&question(), 7, &session);
        assert_eq!(first.next, NextAction::NextQuestion);

        let second = evaluate_answer(&question(), 7, &first.session);
        assert_eq!(second.next, NextAction::LevelUp);

        let advanced = advance_level(&second.session).unwrap();
        assert_eq!(advanced.level().value(), 9);
        assert_eq!(advanced.progress_in_level(), 0);
        assert_eq!(advanced.score(), 2 * POINTS_PER_CORRECT);
    }

    #[test]
    fn last_level_completes_the_path() {
        let session = session_at_level(10).record_correct();

        let outcome = evaluate_answer(&question(), 7, &session);
        assert_eq!(outcome.next, NextAction::PathComplete);
        assert!(advance_level(&outcome.session).is_none());
    }

    #[test]
    fn continue_path_moves_up_the_ladder() {
        let finished = session_at_level(10)
            .record_correct()
            .record_correct();

        let next = continue_path(&finished, &fixed_clock());
        assert_eq!(next.range().value(), 20);
        assert_eq!(next.level().value(), 1);
        assert_eq!(next.progress_in_level(), 0);
        assert_eq!(next.score(), 0);
        assert_ne!(next.token(), finished.token());
    }
}
