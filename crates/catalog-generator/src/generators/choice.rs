//! Selection generators over fixed vocabularies.

use catalog_core::Vocabulary;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one member of a vocabulary uniformly.
pub fn pick<V: Vocabulary, R: Rng>(rng: &mut R) -> V {
    V::ALL[rng.gen_range(0..V::ALL.len())]
}

/// Sample `amount` distinct members of a vocabulary without replacement.
///
/// Returns every member (in random order) when `amount` exceeds the vocabulary size.
pub fn sample_distinct<V: Vocabulary, R: Rng>(rng: &mut R, amount: usize) -> Vec<V> {
    V::ALL.choose_multiple(rng, amount).copied().collect()
}

/// Fair boolean.
pub fn coin_flip<R: Rng>(rng: &mut R) -> bool {
    rng.gen()
}

/// Draw a uniform `[0, 1)` value and report whether it is strictly above `threshold`.
///
/// `triggered_above(rng, 0.8)` fires with probability 0.2.
pub fn triggered_above<R: Rng>(rng: &mut R, threshold: f64) -> bool {
    rng.gen::<f64>() > threshold
}
