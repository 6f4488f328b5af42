//! Product records as produced by the generator and stored by the seeder.

use crate::metadata::ProductMetadata;
use crate::vocabulary::{Brand, Category};
use serde::{Deserialize, Serialize};

/// One generated product.
///
/// Records are transient: only `name`, `category`, `brand` and `metadata`
/// are persisted, and the database assigns its own identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// 1-based position of the record within its batch
    pub index: u64,
    pub name: String,
    pub category: Category,
    pub brand: Brand,
    pub metadata: ProductMetadata,
}

impl ProductRecord {
    /// Build a record, deriving `name` from brand, category and index.
    pub fn new(index: u64, category: Category, brand: Brand, metadata: ProductMetadata) -> Self {
        Self {
            index,
            name: product_name(brand, category, index),
            category,
            brand,
            metadata,
        }
    }
}

/// Display name of a product: `"{brand} {category} Item {index}"`.
pub fn product_name(brand: Brand, category: Category, index: u64) -> String {
    format!("{brand} {category} Item {index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Pricing, Specs};
    use crate::vocabulary::Tag;

    #[test]
    fn test_product_name() {
        assert_eq!(
            product_name(Brand::EcoSmart, Category::Apparel, 7),
            "EcoSmart Apparel Item 7"
        );
    }

    #[test]
    fn test_new_derives_name() {
        let metadata = ProductMetadata {
            pricing: Pricing {
                msrp: 10.0,
                sale_price: None,
            },
            tags: vec![Tag::TopRated, Tag::NewArrival],
            specs: Specs {
                weight_kg: 0.5,
                electronics: None,
            },
            sensors: None,
            furniture: None,
        };
        let record = ProductRecord::new(3, Category::Appliances, Brand::Titan, metadata);
        assert_eq!(record.name, "Titan Appliances Item 3");
        assert_eq!(record.index, 3);
    }
}
