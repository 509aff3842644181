use crate::record::RawRecord;

/// Column holding the product category.
pub const CATEGORY_FIELD: &str = "Sub-Category";

/// Default category needle for uploads.
pub const LAPTOP_CATEGORY: &str = "laptop";

/// Returns `true` when the record's sub-category contains `needle`,
/// ignoring case. Records without a sub-category never match.
#[must_use]
pub fn matches_category(record: &RawRecord, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    record
        .text(CATEGORY_FIELD)
        .is_some_and(|category| category.to_lowercase().contains(&needle))
}

/// Keeps the records matching `needle`, in input order.
#[must_use]
pub fn filter_category(records: Vec<RawRecord>, needle: &str) -> Vec<RawRecord> {
    records
        .into_iter()
        .filter(|record| matches_category(record, needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_category(category: &str) -> RawRecord {
        [(CATEGORY_FIELD, category)].into_iter().collect()
    }

    #[test]
    fn matches_regardless_of_case() {
        assert!(matches_category(&with_category("Laptops"), LAPTOP_CATEGORY));
        assert!(matches_category(&with_category("LAPTOP"), LAPTOP_CATEGORY));
        assert!(matches_category(&with_category("Laptop Accessories"), LAPTOP_CATEGORY));
    }

    #[test]
    fn rejects_other_categories() {
        assert!(!matches_category(&with_category("Desktop"), LAPTOP_CATEGORY));
        assert!(!matches_category(&with_category("Monitor"), LAPTOP_CATEGORY));
    }

    #[test]
    fn rejects_missing_or_empty_category() {
        assert!(!matches_category(&RawRecord::new(), LAPTOP_CATEGORY));
        assert!(!matches_category(&with_category(""), LAPTOP_CATEGORY));
    }

    #[test]
    fn needle_is_case_insensitive_too() {
        assert!(matches_category(&with_category("Desktops"), "DESKTOP"));
    }

    #[test]
    fn filter_preserves_order() {
        let records = vec![
            with_category("Laptops"),
            with_category("Monitor"),
            with_category("Gaming Laptop"),
        ];
        let kept = filter_category(records, LAPTOP_CATEGORY);
        let categories: Vec<_> = kept.iter().filter_map(|r| r.text(CATEGORY_FIELD)).collect();
        assert_eq!(categories, ["Laptops", "Gaming Laptop"]);
    }
}
