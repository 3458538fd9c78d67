//! Skill and luck scales
//!
//! Both ratings run from 0 to 99. Skill compares a guess's expected
//! information with the best available; luck compares how many candidates
//! were actually left with how many the guess was expected to leave.

/// Top of both rating scales
pub const MAX_RATING: u8 = 99;

/// Skill for guessing a non-answer when the answer was already certain
pub const WASTED_GUESS_SKILL: u8 = 0;

/// Luck of a guess that left exactly as many candidates as expected
pub const NEUTRAL_LUCK: u8 = 50;

/// Doing this many bits better (or worse) than expected saturates luck
pub const LUCK_SPAN_BITS: f64 = 1.0;

const MAX_LUCK_SWING: f64 = 49.0;

/// Skill rating of a guess
///
/// `round(99 · guess_bits / optimal_bits)`, clamped to 0..=99. When the best
/// guess carries no information, the answer scores 99 and anything else
/// [`WASTED_GUESS_SKILL`].
///
/// # Examples
/// ```
/// use wordle_coach::analysis::skill_rating;
///
/// assert_eq!(skill_rating(5.0, 5.0, false), 99);
/// assert_eq!(skill_rating(2.5, 5.0, false), 50);
/// assert_eq!(skill_rating(0.0, 0.0, true), 99);
/// ```
#[must_use]
pub fn skill_rating(guess_bits: f64, optimal_bits: f64, is_answer: bool) -> u8 {
    if optimal_bits <= 0.0 {
        return if is_answer {
            MAX_RATING
        } else {
            WASTED_GUESS_SKILL
        };
    }

    let scaled = (f64::from(MAX_RATING) * guess_bits / optimal_bits).round();
    scaled.clamp(0.0, f64::from(MAX_RATING)) as u8
}

/// Luck rating of one guess
///
/// Measures `log2(expected / actual)` remaining candidates and maps
/// ±[`LUCK_SPAN_BITS`] onto 1..=99 around [`NEUTRAL_LUCK`].
#[must_use]
pub fn step_luck(expected_remaining: f64, actual_remaining: usize) -> u8 {
    let actual = actual_remaining.max(1) as f64;
    let surprise = (expected_remaining.max(1.0) / actual).log2();
    let swing = (MAX_LUCK_SWING * (surprise / LUCK_SPAN_BITS).clamp(-1.0, 1.0)).round();
    (f64::from(NEUTRAL_LUCK) + swing) as u8
}

/// Mean of per-guess luck, or [`NEUTRAL_LUCK`] if there is none
#[must_use]
pub fn game_luck(step_lucks: impl IntoIterator<Item = u8>) -> u8 {
    let (sum, count) = step_lucks
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), luck| (sum + u32::from(luck), count + 1));

    if count == 0 {
        return NEUTRAL_LUCK;
    }
    (f64::from(sum) / f64::from(count)).round() as u8
}
