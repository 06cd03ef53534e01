//! Conversion table lookups.
//!
//! The table is `'static` and never mutated, so lookups hand out `'static`
//! references that can be shared freely between sessions.

pub mod data;

pub use data::{CATEGORIES, MPG_UK_CONSTANT, MPG_US_CONSTANT};

use crate::convert::ConversionError;
use crate::models::{Category, Factor};

/// Category names in display order
pub fn list_categories() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.name).collect()
}

/// Find a category by its exact name
pub fn find_category(name: &str) -> Result<&'static Category, ConversionError> {
    CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| ConversionError::UnknownCategory { category: name.to_string() })
}

/// Unit names of `category` in display order
pub fn list_units(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    Ok(find_category(category)?.unit_names())
}

/// Factor or transform of `unit` within `category`
pub fn unit_factor(category: &str, unit: &str) -> Result<&'static Factor, ConversionError> {
    find_category(category)?.factor(unit)
}
