use crate::model::{Level, PathRange};

/// Floor for the sum bound on ranges wide enough to support it.
const MIN_BOUND: u32 = 5;

/// Maximum allowed sum for a question at the given range and level.
///
/// Levels 1-3 play within ~50% of the range, levels 4-7 within ~80% and
/// levels 8-10 within the full range. A range of 5 always uses the full
/// range; above that the bound never drops below 5, keeping early levels
/// non-trivial.
#[must_use]
pub fn sum_bound(range: PathRange, level: Level) -> u32 {
    let range = range.value();
    if range <= MIN_BOUND {
        return range;
    }

    let scaled = match level.value() {
        1..=3 => range / 2,
        4..=7 => range * 4 / 5,
        _ => range,
    };
    scaled.max(MIN_BOUND)
}
