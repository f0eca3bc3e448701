use rand::Rng;
use rand::seq::SliceRandom;

use mathpath_core::bounds::sum_bound;
use mathpath_core::model::{CHOICE_COUNT, Level, PathRange, Question};

/// Random draws attempted for distractors before switching to synthesized
/// neighbors. Generous for every real bound; the fallback only matters when
/// the bound leaves fewer than three distinct values to draw from.
const MAX_DISTRACTOR_DRAWS: u32 = 64;

/// Produces a fresh question for the given path and level.
#[must_use]
pub fn generate_question(range: PathRange, level: Level) -> Question {
    generate_question_with(&mut rand::rng(), range, level)
}

/// Same as [`generate_question`] with an injected RNG for deterministic
/// tests.
///
/// Operand A is drawn uniformly from `[min_operand, bound]`, operand B from
/// `[0, bound - a]`, so the sum stays within the bound by construction and
/// no redraw loop is needed.
#[must_use]
pub fn generate_question_with<R: Rng + ?Sized>(
    rng: &mut R,
    range: PathRange,
    level: Level,
) -> Question {
    let bound = sum_bound(range, level);
    let operand_a = rng.random_range(level.min_operand()..=bound);
    let operand_b = rng.random_range(0..=bound - operand_a);
    let choices = build_choices(rng, operand_a + operand_b, bound);

    let question = Question::new(operand_a, operand_b, choices)
        .expect("generated choices are distinct and include the sum");
    tracing::debug!(
        a = operand_a,
        b = operand_b,
        bound,
        range = range.value(),
        level = level.value(),
        "generated question"
    );
    question
}

/// Builds the shuffled choice set: the correct sum plus two distinct
/// distractors drawn from `[0, bound + 1]`.
fn build_choices<R: Rng + ?Sized>(rng: &mut R, sum: u32, bound: u32) -> [u32; CHOICE_COUNT] {
    let mut choices = [sum; CHOICE_COUNT];
    let mut held = 1;

    let mut draws = 0;
    while held < CHOICE_COUNT && draws < MAX_DISTRACTOR_DRAWS {
        draws += 1;
        let candidate = rng.random_range(0..=bound + 1);
        if !choices[..held].contains(&candidate) {
            choices[held] = candidate;
            held += 1;
        }
    }

    // A degenerate bound (0 or 1) can exhaust the draw budget before two
    // distinct distractors appear; fill with the nearest unused neighbors
    // of the sum so the loop always terminates.
    let mut offset = 1;
    while held < CHOICE_COUNT {
        for candidate in [sum + offset, sum.saturating_sub(offset)] {
            if held < CHOICE_COUNT && !choices[..held].contains(&candidate) {
                choices[held] = candidate;
                held += 1;
            }
        }
        offset += 1;
    }

    choices.shuffle(rng);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn range(value: u32) -> PathRange {
        PathRange::new(value).unwrap()
    }

    fn level(value: u8) -> Level {
        Level::new(value).unwrap()
    }

    fn assert_valid(question: &Question, bound: u32) {
        assert!(question.operand_a() + question.operand_b() <= bound);
        assert!(question.choices().contains(&question.sum()));
        let mut sorted = *question.choices();
        sorted.sort_unstable();
        assert!(sorted.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn smallest_path_never_exceeds_five() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let question = generate_question_with(&mut rng, range(5), level(1));
            assert_valid(&question, 5);
        }
    }

    #[test]
    fn later_levels_avoid_zero_first_operand() {
        let mut rng = StdRng::seed_from_u64(11);
        for lvl in 6..=10 {
            for _ in 0..200 {
                let question = generate_question_with(&mut rng, range(10), level(lvl));
                assert!(question.operand_a() >= 1);
            }
        }
    }

    #[test]
    fn early_levels_may_use_zero_first_operand() {
        let mut rng = StdRng::seed_from_u64(13);
        let saw_zero = (0..500)
            .map(|_| generate_question_with(&mut rng, range(10), level(1)))
            .any(|question| question.operand_a() == 0);
        assert!(saw_zero);
    }

    #[test]
    fn choices_fall_back_at_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(17);

        let zero = build_choices(&mut rng, 0, 0);
        assert!(zero.contains(&0));
        let mut sorted = zero;
        sorted.sort_unstable();
        assert!(sorted.windows(2).all(|pair| pair[0] != pair[1]));

        let one = build_choices(&mut rng, 1, 1);
        assert!(one.contains(&1));
        let mut sorted = one;
        sorted.sort_unstable();
        assert!(sorted.windows(2).all(|pair| pair[0] != pair[1]));
    }

    proptest! {
        #[test]
        fn generated_questions_respect_the_bound(
            raw_range in prop_oneof![Just(5_u32), Just(10), Just(20), Just(30), Just(40)],
            raw_level in 1..=10_u8,
            seed in any::<u64>(),
        ) {
            let range = PathRange::new(raw_range).unwrap();
            let level = Level::new(raw_level).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);

            let question = generate_question_with(&mut rng, range, level);
            let bound = sum_bound(range, level);

            prop_assert!(question.operand_a() + question.operand_b() <= bound);
            prop_assert!(question.choices().contains(&question.sum()));
            let mut sorted = *question.choices();
            sorted.sort_unstable();
            prop_assert!(sorted.windows(2).all(|pair| pair[0] != pair[1]));
            if raw_level > 5 {
                prop_assert!(question.operand_a() >= 1);
            }
        }
    }
}
