//! Composite keys for product groups and their variants.

use crate::normalize::{
    normalize_memory, normalize_model, normalize_processor, normalize_storage, UNKNOWN,
};
use crate::record::RawRecord;

/// Separator between the parts of a group or variant key.
pub const KEY_DELIMITER: &str = "_";

/// Variant color used when the record has none.
pub const DEFAULT_COLOR: &str = "Default";

/// Normalized attributes that identify a product group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAttributes {
    pub model: String,
    pub processor: String,
    pub storage: String,
    pub memory: String,
}

impl GroupAttributes {
    /// Normalizes the four identifying columns of `record`.
    #[must_use]
    pub fn from_record(record: &RawRecord) -> Self {
        let model = record.text_or("Model", UNKNOWN);
        Self {
            model: normalize_model(Some(model.as_str())),
            processor: normalize_processor(record.text("Processor").as_deref()),
            storage: normalize_storage(record.text("Storage").as_deref()),
            memory: normalize_memory(record.text("Memory").as_deref()),
        }
    }

    #[must_use]
    pub fn key(&self) -> String {
        [
            self.model.as_str(),
            self.processor.as_str(),
            self.storage.as_str(),
            self.memory.as_str(),
        ]
        .join(KEY_DELIMITER)
    }
}

/// Builds the product group key, e.g. `MacBook Pro_M2_512GB_16GB`.
#[must_use]
pub fn build_group_key(record: &RawRecord) -> String {
    GroupAttributes::from_record(record).key()
}

/// Raw color and condition of a record, with their defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAttributes {
    pub color: String,
    pub condition: String,
}

impl VariantAttributes {
    #[must_use]
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            color: record.text_or("Color", DEFAULT_COLOR),
            condition: record.text_or("Condition", UNKNOWN),
        }
    }

    #[must_use]
    pub fn key(&self) -> String {
        format!("{}{KEY_DELIMITER}{}", self.color, self.condition)
    }
}

/// Builds the variant key from raw color and condition, e.g. `Silver_Used`.
#[must_use]
pub fn build_variant_key(record: &RawRecord) -> String {
    VariantAttributes::from_record(record).key()
}
