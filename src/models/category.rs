use std::fmt;

use serde::Serialize;

use crate::convert::ConversionError;

/// Selects which converter handles a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryKind {
    Linear,
    Temperature,
    FuelEconomy,
}

/// Pair of functions mapping a non-linear unit to and from its category's base unit
#[derive(Clone, Copy)]
pub struct Transform {
    pub to_base: fn(f64) -> f64,
    pub from_base: fn(f64) -> f64,
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform")
    }
}

/// How one unit relates to its category's base unit
#[derive(Debug, Clone, Copy)]
pub enum Factor {
    /// 1 unit = factor × base unit
    Linear(f64),
    Transform(Transform),
}

impl Factor {
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Factor::Linear(factor) => value * factor,
            Factor::Transform(t) => (t.to_base)(value),
        }
    }

    pub fn from_base(&self, value: f64) -> f64 {
        match self {
            Factor::Linear(factor) => value / factor,
            Factor::Transform(t) => (t.from_base)(value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    pub name: &'static str,
    pub factor: Factor,
}

/// Units of a category: either factor-backed entries or the names of a
/// category whose conversions are handled by dedicated formulas
#[derive(Debug, Clone, Copy)]
pub enum UnitSet {
    Factors(&'static [UnitEntry]),
    Custom(&'static [&'static str]),
}

#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub base_unit: &'static str,
    pub kind: CategoryKind,
    pub units: UnitSet,
}

impl Category {
    /// Unit names in table order
    pub fn unit_names(&self) -> Vec<&'static str> {
        match self.units {
            UnitSet::Factors(entries) => entries.iter().map(|e| e.name).collect(),
            UnitSet::Custom(names) => names.to_vec(),
        }
    }

    pub fn contains(&self, unit: &str) -> bool {
        match self.units {
            UnitSet::Factors(entries) => entries.iter().any(|e| e.name == unit),
            UnitSet::Custom(names) => names.contains(&unit),
        }
    }

    /// Look up a unit's factor. Custom categories have no factors, so every
    /// lookup there is an unknown unit.
    pub fn factor(&self, unit: &str) -> Result<&'static Factor, ConversionError> {
        let entries = match self.units {
            UnitSet::Factors(entries) => entries,
            UnitSet::Custom(_) => &[],
        };
        entries.iter().find(|e| e.name == unit).map(|e| &e.factor).ok_or_else(|| {
            ConversionError::UnknownUnit {
                category: self.name.to_string(),
                unit: unit.to_string(),
            }
        })
    }

    /// Fail with `UnknownUnit` unless `unit` belongs to this category
    pub fn require_unit(&self, unit: &str) -> Result<(), ConversionError> {
        if self.contains(unit) {
            Ok(())
        } else {
            Err(ConversionError::UnknownUnit {
                category: self.name.to_string(),
                unit: unit.to_string(),
            })
        }
    }
}
