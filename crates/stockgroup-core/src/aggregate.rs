//! Two-level aggregation: product group, then variant, then raw items.
//!
//! Groups and variants are created on first sight and never rewritten, so a
//! group's attributes and base price always come from its first record.
//! Both maps keep insertion order, which makes the serialized output
//! identical for identical input.

use indexmap::IndexMap;
use serde::Serialize;

use crate::filter::filter_category;
use crate::key::{GroupAttributes, VariantAttributes};
use crate::price::extract_price;
use crate::record::{serialize_number, RawRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub color: String,
    pub condition: String,
    pub quantity: usize,
    pub items: Vec<RawRecord>,
}

impl Variant {
    fn new(attributes: VariantAttributes) -> Self {
        Self {
            color: attributes.color,
            condition: attributes.condition,
            quantity: 0,
            items: Vec::new(),
        }
    }

    fn push(&mut self, record: RawRecord) {
        self.quantity += 1;
        self.items.push(record);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    pub model: String,
    pub processor: String,
    pub storage: String,
    pub memory: String,
    #[serde(serialize_with = "serialize_number")]
    pub base_price: f64,
    pub items: Vec<RawRecord>,
    pub variants: IndexMap<String, Variant>,
}

impl ProductGroup {
    fn new(attributes: GroupAttributes, base_price: f64) -> Self {
        Self {
            model: attributes.model,
            processor: attributes.processor,
            storage: attributes.storage,
            memory: attributes.memory,
            base_price,
            items: Vec::new(),
            variants: IndexMap::new(),
        }
    }

    /// Returns the variant for `attributes`, creating an empty one if needed.
    fn variant_mut(&mut self, attributes: VariantAttributes) -> &mut Variant {
        self.variants
            .entry(attributes.key())
            .or_insert_with(|| Variant::new(attributes))
    }

    /// Total of all variant quantities; always equals `items.len()`.
    #[must_use]
    pub fn quantity(&self) -> usize {
        self.variants.values().map(|v| v.quantity).sum()
    }
}

/// Response payload for one processed upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub total_items: usize,
    pub product_groups: IndexMap<String, ProductGroup>,
    pub raw_data: Vec<RawRecord>,
    pub group_count: usize,
}

/// Groups already-filtered records by normalized attributes and variant.
#[must_use]
pub fn aggregate(records: Vec<RawRecord>) -> AggregateResult {
    let mut groups: IndexMap<String, ProductGroup> = IndexMap::new();

    for record in &records {
        let attributes = GroupAttributes::from_record(record);
        let group = groups
            .entry(attributes.key())
            .or_insert_with(|| ProductGroup::new(attributes, extract_price(record)));

        group
            .variant_mut(VariantAttributes::from_record(record))
            .push(record.clone());
        group.items.push(record.clone());
    }

    AggregateResult {
        total_items: records.len(),
        group_count: groups.len(),
        product_groups: groups,
        raw_data: records,
    }
}

/// Filters `records` by category and aggregates the survivors.
#[must_use]
pub fn process(records: Vec<RawRecord>, category: &str) -> AggregateResult {
    let decoded = records.len();
    let filtered = filter_category(records, category);
    let result = aggregate(filtered);

    tracing::info!(
        decoded,
        category,
        total_items = result.total_items,
        group_count = result.group_count,
        "aggregated upload"
    );

    result
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
