//! Nested product metadata stored in the `metadata` JSONB column.
//!
//! The JSON shape is:
//!
//! ```text
//! {
//!   "pricing": { "msrp": 412.5, "sale_price": 301.22 },   // sale_price optional
//!   "tags": ["top-rated", "eco-friendly"],
//!   "specs": { "weight_kg": 12.4, "battery_life_hours": 9, "wireless": true },
//!   "sensors": [{ "type": "motion", "accuracy": "high" }],  // Electronics only
//!   "dimensions_cm": { "length": 120.0, "width": 60.5, "height": 75.25 },
//!   "material": "wood",                                      // Furniture only
//!   "assembly_required": false
//! }
//! ```
//!
//! Category-conditional parts are modelled as `Option`s and omitted from the
//! serialized form when absent.

use crate::vocabulary::{Category, Material, SensorAccuracy, SensorType, Tag};
use serde::{Deserialize, Serialize};

/// Price information. `sale_price`, when present, never exceeds `msrp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub msrp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
}

/// Physical specifications shared by every category, plus the electronics extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    pub weight_kg: f64,
    #[serde(flatten)]
    pub electronics: Option<ElectronicsSpecs>,
}

/// Spec fields only present on [`Category::Electronics`] products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicsSpecs {
    /// Between 1 and 24 inclusive
    pub battery_life_hours: u8,
    pub wireless: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub accuracy: SensorAccuracy,
}

/// Outer dimensions in centimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Top-level metadata fields only present on [`Category::Furniture`] products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDetails {
    pub dimensions_cm: Dimensions,
    pub material: Material,
    pub assembly_required: bool,
}

/// Full metadata document for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub pricing: Pricing,
    pub tags: Vec<Tag>,
    pub specs: Specs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Vec<Sensor>>,
    #[serde(flatten)]
    pub furniture: Option<FurnitureDetails>,
}

impl ProductMetadata {
    /// Check that the conditional parts match `category`.
    ///
    /// Electronics must carry electronics specs and sensors and nothing from
    /// furniture; Furniture the reverse; every other category neither.
    pub fn matches_category(&self, category: Category) -> bool {
        let electronics = self.specs.electronics.is_some() && self.sensors.is_some();
        let no_electronics = self.specs.electronics.is_none() && self.sensors.is_none();
        let furniture = self.furniture.is_some();

        match category {
            Category::Electronics => electronics && !furniture,
            Category::Furniture => no_electronics && furniture,
            Category::Apparel | Category::Appliances => no_electronics && !furniture,
        }
    }

    /// Serialize to a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_metadata() -> ProductMetadata {
        ProductMetadata {
            pricing: Pricing {
                msrp: 120.5,
                sale_price: None,
            },
            tags: vec![Tag::NewArrival, Tag::Discounted],
            specs: Specs {
                weight_kg: 3.25,
                electronics: None,
            },
            sensors: None,
            furniture: None,
        }
    }

    #[test]
    fn test_base_shape() {
        let value = base_metadata().to_json().unwrap();
        assert_eq!(
            value,
            json!({
                "pricing": { "msrp": 120.5 },
                "tags": ["new-arrival", "discounted"],
                "specs": { "weight_kg": 3.25 }
            })
        );
        assert!(base_metadata().matches_category(Category::Apparel));
        assert!(!base_metadata().matches_category(Category::Electronics));
    }

    #[test]
    fn test_electronics_shape() {
        let mut metadata = base_metadata();
        metadata.pricing.sale_price = Some(80.0);
        metadata.specs.electronics = Some(ElectronicsSpecs {
            battery_life_hours: 12,
            wireless: true,
        });
        metadata.sensors = Some(vec![Sensor {
            sensor_type: SensorType::Humidity,
            accuracy: SensorAccuracy::Low,
        }]);

        let value = metadata.to_json().unwrap();
        assert_eq!(value["pricing"]["sale_price"], json!(80.0));
        assert_eq!(value["specs"]["battery_life_hours"], json!(12));
        assert_eq!(value["specs"]["wireless"], json!(true));
        assert_eq!(
            value["sensors"],
            json!([{ "type": "humidity", "accuracy": "low" }])
        );
        assert!(value.get("material").is_none());
        assert!(metadata.matches_category(Category::Electronics));
    }

    #[test]
    fn test_furniture_shape_and_parse_back() {
        let mut metadata = base_metadata();
        metadata.furniture = Some(FurnitureDetails {
            dimensions_cm: Dimensions {
                length: 180.0,
                width: 90.5,
                height: 75.0,
            },
            material: Material::Wood,
            assembly_required: true,
        });

        let value = metadata.to_json().unwrap();
        assert_eq!(value["dimensions_cm"]["width"], json!(90.5));
        assert_eq!(value["material"], json!("wood"));
        assert_eq!(value["assembly_required"], json!(true));
        assert!(value.get("sensors").is_none());

        let parsed: ProductMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, metadata);
        assert!(parsed.matches_category(Category::Furniture));
    }

    #[test]
    fn test_key_order() {
        let mut metadata = base_metadata();
        metadata.furniture = Some(FurnitureDetails {
            dimensions_cm: Dimensions {
                length: 50.0,
                width: 50.0,
                height: 50.0,
            },
            material: Material::Metal,
            assembly_required: false,
        });
        let text = serde_json::to_string(&metadata).unwrap();
        let pricing = text.find("\"pricing\"").unwrap();
        let tags = text.find("\"tags\"").unwrap();
        let specs = text.find("\"specs\"").unwrap();
        let dimensions = text.find("\"dimensions_cm\"").unwrap();
        assert!(pricing < tags && tags < specs && specs < dimensions);
    }
}
