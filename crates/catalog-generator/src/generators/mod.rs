//! Individual value generators.
//!
//! Each helper consumes draws from the caller's RNG and nothing else, so the
//! order in which the caller invokes them fixes the shape of the stream.

pub mod choice;
pub mod numeric;

pub use choice::{coin_flip, pick, sample_distinct, triggered_above};
pub use numeric::{float_range_2dp, int_range, round_2dp};
