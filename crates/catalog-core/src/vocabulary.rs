//! Fixed vocabularies used by product records.
//!
//! Every vocabulary is a closed enum with a stable string form. The string
//! form is what ends up in the `products` table and in the JSON metadata,
//! and the `ALL` slice fixes the order the generator draws from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed set of terms with a fixed draw order.
///
/// Implementors always have at least one member.
pub trait Vocabulary: Copy + 'static {
    /// All members in draw order.
    const ALL: &'static [Self];
}

/// Error returned when a string is not a member of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {vocabulary}")]
pub struct UnknownTermError {
    /// Name of the vocabulary that rejected the value
    pub vocabulary: &'static str,
    /// The rejected value
    pub value: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl Vocabulary for $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $name {
            /// Stable string form.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownTermError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownTermError {
                        vocabulary: $label,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Product category. Drives which conditional metadata a record carries.
    Category, "category" {
        Electronics => "Electronics",
        Appliances => "Appliances",
        Apparel => "Apparel",
        Furniture => "Furniture",
    }
}

vocabulary! {
    /// Product brand.
    Brand, "brand" {
        HonesTech => "HonesTech",
        Lumina => "Lumina",
        Apex => "Apex",
        EcoSmart => "EcoSmart",
        Titan => "Titan",
        RoughEdge => "RoughEdge",
    }
}

vocabulary! {
    /// Merchandising tag attached to a product.
    Tag, "tag" {
        NewArrival => "new-arrival",
        TopRated => "top-rated",
        Discounted => "discounted",
        EcoFriendly => "eco-friendly",
    }
}

vocabulary! {
    /// Kind of sensor fitted to an electronics product.
    SensorType, "sensor type" {
        Motion => "motion",
        Temperature => "temperature",
        Humidity => "humidity",
    }
}

vocabulary! {
    SensorAccuracy, "sensor accuracy" {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

vocabulary! {
    /// Primary material of a furniture product.
    Material, "material" {
        Wood => "wood",
        Metal => "metal",
        Plastic => "plastic",
        Composite => "composite",
    }
}
