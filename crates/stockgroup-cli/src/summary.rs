use stockgroup_core::AggregateResult;

/// Formats each group as `key<TAB>items<TAB>variants<TAB>basePrice`, in
/// first-seen order.
pub(crate) fn summary_lines(result: &AggregateResult) -> Vec<String> {
    result
        .product_groups
        .iter()
        .map(|(key, group)| {
            format!(
                "{key}\t{}\t{}\t{}",
                group.items.len(),
                group.variants.len(),
                group.base_price
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use stockgroup_core::{aggregate, RawRecord};

    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn summary_has_one_line_per_group() {
        let result = aggregate(vec![
            record(&[("Model", "iMac"), ("Price", "999"), ("Color", "Blue")]),
            record(&[("Model", "iMac"), ("Price", "899"), ("Color", "Green")]),
            record(&[("Model", "MacBook Air"), ("Price", "1099.5")]),
        ]);

        assert_eq!(
            summary_lines(&result),
            [
                "iMac_Unknown_Unknown_Unknown\t2\t2\t999",
                "MacBook Air_Unknown_Unknown_Unknown\t1\t1\t1099.5",
            ]
        );
    }

    #[test]
    fn empty_result_has_no_lines() {
        assert!(summary_lines(&aggregate(Vec::new())).is_empty());
    }
}
