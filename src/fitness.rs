//! Timetable scoring.
//!
//! The score of a schedule is its conflict penalty plus a per-day
//! adjustment chosen by [`PreferenceMode`]. Lower is better, and the score
//! depends on nothing but the schedule and the mode.
//!
//! # Conflict penalty
//!
//! Slots are claimed in gene order. The first claim on a `(day, period)`
//! is free; each further claim on the same slot costs [`CONFLICT_PENALTY`].
//! A slot claimed by `k` courses therefore costs `10 * (k - 1)` whatever
//! the course order.
//!
//! # Preference adjustment
//!
//! Computed per day from that day's distinct claimed periods, sorted:
//!
//! | Mode            | Rule                                                   |
//! |-----------------|--------------------------------------------------------|
//! | `MaxGaps`       | `-5` for every adjacent pair more than one period apart |
//! | `Cram`          | `-5` if the day is non-empty and `max - min <= count`  |
//! | `AvoidMorning`  | `+3` for every period `<= 2`                            |
//! | `None`          | no adjustment                                          |

use std::collections::HashSet;

use crate::schedule::Schedule;
use crate::slot::TimeSlot;

/// Schedule score. Lower is better.
pub type Score = i64;

/// Cost of each claim on an already occupied slot.
pub const CONFLICT_PENALTY: Score = 10;

/// Bonus (as a negative adjustment) used by `MaxGaps` and `Cram`.
pub const PREFERENCE_BONUS: Score = 5;

/// Cost of each early-morning period under `AvoidMorning`.
pub const MORNING_PENALTY: Score = 3;

/// Last period counted as morning by `AvoidMorning`.
pub const LAST_MORNING_PERIOD: u32 = 2;

/// Shapes the score toward a student's preferred week layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreferenceMode {
    /// Reward idle periods between classes.
    MaxGaps,
    /// Reward days whose classes form a tight block.
    Cram,
    /// Penalize classes in the first two periods.
    AvoidMorning,
    /// Conflicts only.
    #[default]
    None,
}

/// Scores a schedule under a preference mode.
///
/// ```
/// use u_timetable::fitness::{evaluate, PreferenceMode};
/// use u_timetable::pool::CoursePool;
/// use u_timetable::schedule::Schedule;
///
/// let pool = CoursePool::new()
///     .with_course("A", [["Mon1"]])?
///     .with_course("B", [["Mon1"]])?;
/// let clash = Schedule::from_choices(&pool, &[0, 0]);
/// assert_eq!(evaluate(&clash, PreferenceMode::None), 10);
/// # Ok::<(), u_timetable::error::TimetableError>(())
/// ```
pub fn evaluate(schedule: &Schedule, mode: PreferenceMode) -> Score {
    evaluate_slots(schedule.genes().iter().map(|g| &g[..]), mode)
}

/// Scores a sequence of per-course slot lists.
pub fn evaluate_slots<'a, I>(genes: I, mode: PreferenceMode) -> Score
where
    I: IntoIterator<Item = &'a [TimeSlot]>,
{
    let mut occupied: HashSet<TimeSlot> = HashSet::new();
    let mut daily: [Vec<u32>; 7] = Default::default();
    let mut score: Score = 0;

    for gene in genes {
        for &slot in gene {
            if occupied.insert(slot) {
                daily[slot.day.index()].push(slot.period);
            } else {
                score += CONFLICT_PENALTY;
            }
        }
    }

    if mode != PreferenceMode::None {
        for periods in daily.iter_mut() {
            periods.sort_unstable();
            score += day_adjustment(periods, mode);
        }
    }

    score
}

/// Preference adjustment for one day's distinct, sorted periods.
pub fn day_adjustment(periods: &[u32], mode: PreferenceMode) -> Score {
    match mode {
        PreferenceMode::MaxGaps => {
            let gaps = periods.windows(2).filter(|w| w[1] - w[0] > 1).count();
            -(gaps as Score) * PREFERENCE_BONUS
        }
        PreferenceMode::Cram => match (periods.first(), periods.last()) {
            (Some(&min), Some(&max)) if (max - min) as usize <= periods.len() => -PREFERENCE_BONUS,
            _ => 0,
        },
        PreferenceMode::AvoidMorning => {
            let early = periods.iter().filter(|&&p| p <= LAST_MORNING_PERIOD).count();
            early as Score * MORNING_PENALTY
        }
        PreferenceMode::None => 0,
    }
}
