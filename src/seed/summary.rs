//! Batch summaries for dry runs and the `generate` command.

use catalog_core::{Category, ProductRecord, Vocabulary};
use std::fmt;

/// Counts describing a generated batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: u64,
    /// Records per category, in vocabulary order
    pub per_category: Vec<(Category, u64)>,
    pub on_sale: u64,
}

impl BatchSummary {
    pub fn from_records(records: &[ProductRecord]) -> Self {
        let per_category = Category::ALL
            .iter()
            .map(|category| {
                let count = records.iter().filter(|r| r.category == *category).count();
                (*category, count as u64)
            })
            .collect();
        let on_sale = records
            .iter()
            .filter(|r| r.metadata.pricing.sale_price.is_some())
            .count();

        Self {
            total: records.len() as u64,
            per_category,
            on_sale: on_sale as u64,
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} records (", self.total)?;
        for (i, (category, count)) in self.per_category.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{category}: {count}")?;
        }
        write!(f, "), {} on sale", self.on_sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_generator::generate;

    #[test]
    fn test_summary_counts_add_up() {
        let records = generate(200, 91);
        let summary = BatchSummary::from_records(&records);

        assert_eq!(summary.total, 200);
        let sum: u64 = summary.per_category.iter().map(|(_, c)| c).sum();
        assert_eq!(sum, 200);
        assert!(summary.on_sale <= 200);
    }

    #[test]
    fn test_empty_summary_display() {
        let summary = BatchSummary::from_records(&[]);
        assert_eq!(
            summary.to_string(),
            "0 records (Electronics: 0, Appliances: 0, Apparel: 0, Furniture: 0), 0 on sale"
        );
    }
}
