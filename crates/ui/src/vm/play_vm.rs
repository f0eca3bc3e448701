use engine::{AnswerOutcome, NextAction, Verdict};
use mathpath_core::Clock;
use mathpath_core::model::{PathRange, QUESTIONS_PER_LEVEL, Question, Session, SessionToken};

/// Where the play screen is in its answer/advance cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayPhase {
    /// Waiting for an answer to the current question.
    Answering,
    /// A correct answer landed; confetti runs while the next step is
    /// scheduled.
    Celebrating,
    /// The level-up banner is on screen.
    LevelBanner,
    /// The path is finished; completion screen with fireworks.
    Complete,
}

/// View-model for one play screen: the live session, the current question
/// and the phase driving what is rendered.
///
/// Timers spawned by the view carry the session token from the moment they
/// were scheduled; they re-check it against [`PlayVm::token`] before
/// applying, so a timer outlived by a restart or path continuation is a
/// no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayVm {
    session: Session,
    question: Question,
    phase: PlayPhase,
    wrong_cue: bool,
}

impl PlayVm {
    /// Starts a session on the given path with its first question.
    #[must_use]
    pub fn start(range: PathRange, clock: &Clock) -> Self {
        let session = Session::start(range, clock.now());
        let question = engine::generate_question(range, session.level());
        Self {
            session,
            question,
            phase: PlayPhase::Answering,
            wrong_cue: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn phase(&self) -> PlayPhase {
        self.phase
    }

    /// True while the "try again" cue should pulse.
    #[must_use]
    pub fn wrong_cue(&self) -> bool {
        self.wrong_cue
    }

    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.session.token()
    }

    /// Fill width of the level progress bar, in percent.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        self.session.progress_in_level() * 100 / QUESTIONS_PER_LEVEL
    }

    /// Evaluates a submission and steps the phase. Returns the action the
    /// view should schedule.
    pub fn submit(&mut self, submitted: u32) -> NextAction {
        let AnswerOutcome {
            verdict,
            session,
            next,
        } = engine::evaluate_answer(&self.question, submitted, &self.session);
        self.session = session;

        match verdict {
            Verdict::Correct => {
                self.wrong_cue = false;
                self.phase = PlayPhase::Celebrating;
            }
            Verdict::Incorrect => {
                self.wrong_cue = true;
            }
        }
        next
    }

    /// Clears the retry cue once its pulse has run.
    pub fn clear_wrong_cue(&mut self) {
        self.wrong_cue = false;
    }

    /// Swaps in a fresh question on the current level.
    pub fn next_question(&mut self) {
        self.question = engine::generate_question(self.session.range(), self.session.level());
        self.phase = PlayPhase::Answering;
    }

    /// Advances the session and shows the banner for the new level.
    pub fn level_up(&mut self) {
        if let Some(session) = engine::advance_level(&self.session) {
            self.session = session;
            self.phase = PlayPhase::LevelBanner;
        }
    }

    /// Ends the banner and resumes play on the new level.
    pub fn finish_banner(&mut self) {
        self.next_question();
    }

    /// Freezes the finished path on the completion screen.
    pub fn complete(&mut self) {
        self.phase = PlayPhase::Complete;
    }

    /// Starts over on the next ladder range with a fresh session.
    pub fn continue_path(&mut self, clock: &Clock) {
        self.session = engine::continue_path(&self.session, clock);
        self.question = engine::generate_question(self.session.range(), self.session.level());
        self.phase = PlayPhase::Answering;
        self.wrong_cue = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathpath_core::bounds::sum_bound;
    use mathpath_core::model::POINTS_PER_CORRECT;
    use mathpath_core::time::fixed_clock;

    fn vm() -> PlayVm {
        PlayVm::start(PathRange::new(10).unwrap(), &fixed_clock())
    }

    #[test]
    fn starts_answering_with_an_in_bound_question() {
        let vm = vm();
        assert_eq!(vm.phase(), PlayPhase::Answering);
        let bound = sum_bound(vm.session().range(), vm.session().level());
        assert!(vm.question().sum() <= bound);
        assert_eq!(vm.progress_percent(), 0);
    }

    #[test]
    fn wrong_answer_only_raises_the_cue() {
        let mut vm = vm();
        let session_before = vm.session().clone();
        let wrong = vm.question().sum() + 1;

        let action = vm.submit(wrong);
        assert_eq!(action, NextAction::ShowIncorrect);
        assert!(vm.wrong_cue());
        assert_eq!(vm.phase(), PlayPhase::Answering);
        assert_eq!(vm.session(), &session_before);

        vm.clear_wrong_cue();
        assert!(!vm.wrong_cue());
    }

    #[test]
    fn two_correct_answers_walk_through_a_level() {
        let mut vm = vm();

        let first = vm.submit(vm.question().sum());
        assert_eq!(first, NextAction::NextQuestion);
        assert_eq!(vm.phase(), PlayPhase::Celebrating);
        assert_eq!(vm.progress_percent(), 50);

        vm.next_question();
        assert_eq!(vm.phase(), PlayPhase::Answering);

        let second = vm.submit(vm.question().sum());
        assert_eq!(second, NextAction::LevelUp);

        vm.level_up();
        assert_eq!(vm.phase(), PlayPhase::LevelBanner);
        assert_eq!(vm.session().level().value(), 2);
        assert_eq!(vm.session().progress_in_level(), 0);
        assert_eq!(vm.session().score(), 2 * POINTS_PER_CORRECT);

        vm.finish_banner();
        assert_eq!(vm.phase(), PlayPhase::Answering);
    }

    #[test]
    fn a_full_path_run_completes_after_ten_levels() {
        let mut vm = vm();
        let token = vm.token();
        let mut answered = 0;

        loop {
            let action = vm.submit(vm.question().sum());
            answered += 1;
            match action {
                NextAction::NextQuestion => vm.next_question(),
                NextAction::LevelUp => {
                    vm.level_up();
                    vm.finish_banner();
                }
                NextAction::PathComplete => {
                    vm.complete();
                    break;
                }
                NextAction::ShowIncorrect => unreachable!("submitted the correct sum"),
            }
        }

        assert_eq!(vm.phase(), PlayPhase::Complete);
        assert_eq!(answered, 20);
        assert_eq!(vm.session().score(), 20 * POINTS_PER_CORRECT);
        assert!(vm.session().level().is_last());
        assert_eq!(vm.token(), token);
    }

    #[test]
    fn continue_path_starts_fresh_on_the_next_range() {
        let mut vm = vm();
        let old_token = vm.token();

        vm.continue_path(&fixed_clock());
        assert_eq!(vm.session().range().value(), 20);
        assert_eq!(vm.session().level().value(), 1);
        assert_eq!(vm.session().score(), 0);
        assert_eq!(vm.phase(), PlayPhase::Answering);
        assert_ne!(vm.token(), old_token);
    }
}
