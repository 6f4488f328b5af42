//! Synthetic product generator for the marketplace seeding tool.
//!
//! This crate provides [`generate`] and the [`ProductGenerator`] behind it.
//! Both produce deterministic product records from a seed: one `StdRng` is
//! seeded once and every draw of every record comes from it, in a fixed
//! order, so the same seed and count always produce the same batch.
//!
//! # Architecture
//!
//! ```text
//!        seed
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ ProductGenerator │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    ProductRecord { index, name, category, brand, metadata }
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalog_generator::generate;
//!
//! let batch = generate(5, 91);
//! assert_eq!(batch.len(), 5);
//! assert_eq!(batch, generate(5, 91));
//! assert!(batch[0].name.ends_with("Item 1"));
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{generate, ProductGenerator, ProductIterator};
