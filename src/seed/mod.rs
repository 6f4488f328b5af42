//! Command handlers.
//!
//! This module contains handlers for the seed and generate commands.

pub mod generate;
pub mod run;
pub mod summary;

pub use generate::{run_generate, write_jsonl};
pub use run::{run_seed, seed_with};
pub use summary::BatchSummary;
