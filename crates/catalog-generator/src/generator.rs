//! Main product generator.

use crate::generators::{
    coin_flip, float_range_2dp, int_range, pick, round_2dp, sample_distinct, triggered_above,
};
use catalog_core::{
    Brand, Category, Dimensions, ElectronicsSpecs, FurnitureDetails, Pricing, ProductMetadata,
    ProductRecord, Sensor, Specs, Tag,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive MSRP range.
pub const MSRP_RANGE: (f64, f64) = (10.0, 1000.0);
/// Inclusive ratio range applied to the MSRP to get a sale price.
pub const SALE_RATIO_RANGE: (f64, f64) = (0.5, 0.9);
/// A uniform draw above this value puts the product on sale.
pub const SALE_THRESHOLD: f64 = 0.8;
/// Number of distinct tags per product.
pub const TAGS_PER_PRODUCT: usize = 2;
/// Inclusive weight range in kilograms.
pub const WEIGHT_KG_RANGE: (f64, f64) = (0.5, 50.0);
/// Inclusive battery life range in hours.
pub const BATTERY_HOURS_RANGE: (i64, i64) = (1, 24);
/// Inclusive range for every furniture dimension, in centimetres.
pub const DIMENSION_CM_RANGE: (f64, f64) = (50.0, 200.0);

/// Generate a batch of `count` products from `seed`.
///
/// Records are labelled 1..=count. A `count` of zero yields an empty batch.
/// The same `(count, seed)` pair always yields the same batch.
pub fn generate(count: u64, seed: u64) -> Vec<ProductRecord> {
    ProductGenerator::new(seed).records(count).collect()
}

/// Generator that produces deterministic product records.
///
/// A single seeded stream backs every draw of every record, so the output
/// depends only on the seed and on how many records were generated before.
pub struct ProductGenerator {
    rng: StdRng,
    /// Index of the next record (1-based)
    index: u64,
}

impl ProductGenerator {
    /// Create a new generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 1,
        }
    }

    /// Index the next generated record will carry.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record.
    ///
    /// Draw order: category, brand, msrp, tags, weight, category-specific
    /// fields, sale trigger, and the sale ratio only when triggered.
    pub fn next_record(&mut self) -> ProductRecord {
        let rng = &mut self.rng;

        let category: Category = pick(rng);
        let brand: Brand = pick(rng);
        let msrp = float_range_2dp(rng, MSRP_RANGE.0, MSRP_RANGE.1);
        let tags: Vec<Tag> = sample_distinct(rng, TAGS_PER_PRODUCT);
        let weight_kg = float_range_2dp(rng, WEIGHT_KG_RANGE.0, WEIGHT_KG_RANGE.1);

        let mut metadata = ProductMetadata {
            pricing: Pricing {
                msrp,
                sale_price: None,
            },
            tags,
            specs: Specs {
                weight_kg,
                electronics: None,
            },
            sensors: None,
            furniture: None,
        };

        match category {
            Category::Electronics => {
                let battery_life_hours =
                    int_range(rng, BATTERY_HOURS_RANGE.0, BATTERY_HOURS_RANGE.1) as u8;
                let wireless = coin_flip(rng);
                metadata.specs.electronics = Some(ElectronicsSpecs {
                    battery_life_hours,
                    wireless,
                });
                let sensor_type = pick(rng);
                let accuracy = pick(rng);
                metadata.sensors = Some(vec![Sensor {
                    sensor_type,
                    accuracy,
                }]);
            }
            Category::Furniture => {
                let length = float_range_2dp(rng, DIMENSION_CM_RANGE.0, DIMENSION_CM_RANGE.1);
                let width = float_range_2dp(rng, DIMENSION_CM_RANGE.0, DIMENSION_CM_RANGE.1);
                let height = float_range_2dp(rng, DIMENSION_CM_RANGE.0, DIMENSION_CM_RANGE.1);
                let material = pick(rng);
                let assembly_required = coin_flip(rng);
                metadata.furniture = Some(FurnitureDetails {
                    dimensions_cm: Dimensions {
                        length,
                        width,
                        height,
                    },
                    material,
                    assembly_required,
                });
            }
            Category::Apparel | Category::Appliances => {}
        }

        if triggered_above(rng, SALE_THRESHOLD) {
            let ratio = rng.gen_range(SALE_RATIO_RANGE.0..=SALE_RATIO_RANGE.1);
            metadata.pricing.sale_price = Some(round_2dp(msrp * ratio));
        }

        let record = ProductRecord::new(self.index, category, brand, metadata);
        self.index += 1;
        record
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u64) -> ProductIterator<'_> {
        ProductIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates product records.
pub struct ProductIterator<'a> {
    generator: &'a mut ProductGenerator,
    remaining: u64,
}

impl Iterator for ProductIterator<'_> {
    type Item = ProductRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProductIterator<'_> {}
