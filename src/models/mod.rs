//! Data models shared across the converter.
//!
//! - [`Category`] - A measurement category and its unit set
//! - [`Factor`] - Linear scale factor or transform pair relating a unit to its base unit
//! - [`ConversionRecord`] - One successful conversion kept in a session history

pub mod category;
pub mod history;

pub use category::{Category, CategoryKind, Factor, Transform, UnitEntry, UnitSet};
pub use history::{ConversionRecord, DEFAULT_RESULT_PRECISION};
