//! Numeric value generators.

use rand::Rng;

/// Round to two decimal places.
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Generate a random float in the given range (inclusive), rounded to two decimals.
pub fn float_range_2dp<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    round_2dp(rng.gen_range(min..=max))
}
