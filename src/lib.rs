//! Unit Converter - convert values between units of measurement
//!
//! This library provides a static table of measurement categories and their
//! units, and the conversion engine over it:
//!
//! - Linear categories (Length, Mass, Digital Storage, ...) convert through a
//!   per-category base unit
//! - Temperature uses affine formulas between Celsius, Fahrenheit and Kelvin
//! - Fuel Economy handles the reciprocal Miles per Gallon units
//! - A per-session history records every successful conversion
//!
//! # Example
//!
//! ```
//! use unit_converter::{Session, convert};
//!
//! let miles = convert(10.0, "Kilometers", "Miles", "Length")?;
//! assert!((miles - 6.2137).abs() < 1e-3);
//!
//! let mut session = Session::new();
//! session.convert_and_record(1.0, "Bytes", "Bits", "Digital Storage")?;
//! assert_eq!(session.recent_history(5).len(), 1);
//! # Ok::<(), unit_converter::ConversionError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod convert;
pub mod history;
pub mod logging;
pub mod models;
pub mod search;
pub mod table;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use convert::{ConversionError, convert, parse_value, validate_input};
pub use history::{History, Session, SessionStore};
pub use models::{Category, ConversionRecord};
pub use table::{find_category, list_categories, list_units};
