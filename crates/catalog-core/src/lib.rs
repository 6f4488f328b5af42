//! Core product types for the marketplace seeding tool.
//!
//! This crate defines the data model shared by the generator and the
//! populator:
//!
//! - [`ProductRecord`] - One generated product row
//! - [`ProductMetadata`] - The nested document stored in the `metadata` JSONB column
//! - [`Category`], [`Brand`], [`Tag`] and the other fixed vocabularies
//!
//! ```text
//! catalog-core (this crate)
//!    │
//!    ├─── catalog-generator            (produces ProductRecords from a seed)
//!    └─── catalog-populate-postgresql  (writes ProductRecords to PostgreSQL)
//! ```

pub mod metadata;
pub mod product;
pub mod vocabulary;

// Re-exports for convenience
pub use metadata::{
    Dimensions, ElectronicsSpecs, FurnitureDetails, Pricing, ProductMetadata, Sensor, Specs,
};
pub use product::{product_name, ProductRecord};
pub use vocabulary::{
    Brand, Category, Material, SensorAccuracy, SensorType, Tag, UnknownTermError, Vocabulary,
};
