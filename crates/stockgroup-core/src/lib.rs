//! Grouping and normalization engine for spreadsheet inventory uploads.
//!
//! Records decoded from a spreadsheet are filtered by sub-category and folded
//! into product groups keyed by normalized model, processor, storage and
//! memory, with variants split by raw color and condition.

pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod error;
pub mod filter;
pub mod key;
pub mod normalize;
pub mod price;
pub mod record;

pub use aggregate::{aggregate, process, AggregateResult, ProductGroup, Variant};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use filter::{filter_category, matches_category, LAPTOP_CATEGORY};
pub use key::{build_group_key, build_variant_key, KEY_DELIMITER};
pub use normalize::{normalize_memory, normalize_model, normalize_processor, normalize_storage};
pub use price::extract_price;
pub use record::{CellValue, RawRecord};
