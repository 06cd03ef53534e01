//! Static unit table. Factors express "1 unit = factor × base unit".

use std::f64::consts::PI;

use crate::models::{Category, CategoryKind, Factor, Transform, UnitEntry, UnitSet};

/// Miles per Gallon (US) × Liters per 100 Kilometers
pub const MPG_US_CONSTANT: f64 = 235.215;
/// Miles per Gallon (UK) × Liters per 100 Kilometers
pub const MPG_UK_CONSTANT: f64 = 282.481;

const fn linear(name: &'static str, factor: f64) -> UnitEntry {
    UnitEntry { name, factor: Factor::Linear(factor) }
}

// Both directions of a reciprocal relation use the same formula.
fn mpg_us(value: f64) -> f64 {
    MPG_US_CONSTANT / value
}

fn mpg_uk(value: f64) -> f64 {
    MPG_UK_CONSTANT / value
}

static AREA: [UnitEntry; 10] = [
    linear("Square Millimeters", 1e-6),
    linear("Square Centimeters", 1e-4),
    linear("Square Meters", 1.0),
    linear("Hectares", 10000.0),
    linear("Square Kilometers", 1e6),
    linear("Square Inches", 0.00064516),
    linear("Square Feet", 0.092903),
    linear("Square Yards", 0.836127),
    linear("Acres", 4046.86),
    linear("Square Miles", 2.59e6),
];

static DATA_TRANSFER_RATE: [UnitEntry; 10] = [
    linear("Bits per Second", 1.0),
    linear("Kilobits per Second", 1e3),
    linear("Megabits per Second", 1e6),
    linear("Gigabits per Second", 1e9),
    linear("Terabits per Second", 1e12),
    linear("Bytes per Second", 1.0 / 8.0),
    linear("Kilobytes per Second", 1e3 / 8.0),
    linear("Megabytes per Second", 1e6 / 8.0),
    linear("Gigabytes per Second", 1e9 / 8.0),
    linear("Terabytes per Second", 1e12 / 8.0),
];

static DIGITAL_STORAGE: [UnitEntry; 11] = [
    linear("Bits", 1.0),
    linear("Bytes", 8.0),
    linear("Kilobits", 1e3),
    linear("Kilobytes", 8e3),
    linear("Megabits", 1e6),
    linear("Megabytes", 8e6),
    linear("Gigabits", 1e9),
    linear("Gigabytes", 8e9),
    linear("Terabits", 1e12),
    linear("Terabytes", 8e12),
    linear("Petabytes", 8e15),
];

static ENERGY: [UnitEntry; 8] = [
    linear("Joules", 1.0),
    linear("Kilojoules", 1e3),
    linear("Calories", 4.184),
    linear("Kilocalories", 4184.0),
    linear("Watt-hours", 3600.0),
    linear("Kilowatt-hours", 3.6e6),
    linear("BTU", 1055.06),
    linear("Electronvolts", 1.60218e-19),
];

static FREQUENCY: [UnitEntry; 4] = [
    linear("Hertz", 1.0),
    linear("Kilohertz", 1e3),
    linear("Megahertz", 1e6),
    linear("Gigahertz", 1e9),
];

static FUEL_ECONOMY: [UnitEntry; 3] = [
    linear("Liters per 100 Kilometers", 1.0),
    UnitEntry {
        name: "Miles per Gallon (US)",
        factor: Factor::Transform(Transform { to_base: mpg_us, from_base: mpg_us }),
    },
    UnitEntry {
        name: "Miles per Gallon (UK)",
        factor: Factor::Transform(Transform { to_base: mpg_uk, from_base: mpg_uk }),
    },
];

static LENGTH: [UnitEntry; 9] = [
    linear("Millimeters", 0.001),
    linear("Centimeters", 0.01),
    linear("Meters", 1.0),
    linear("Kilometers", 1000.0),
    linear("Inches", 0.0254),
    linear("Feet", 0.3048),
    linear("Yards", 0.9144),
    linear("Miles", 1609.34),
    linear("Nautical Miles", 1852.0),
];

static MASS: [UnitEntry; 5] = [
    linear("Grams", 1.0),
    linear("Kilograms", 1000.0),
    linear("Pounds", 453.592),
    linear("Ounces", 28.3495),
    linear("Tons (Metric)", 1e6),
];

static PLANE_ANGLE: [UnitEntry; 3] = [
    linear("Degrees", 1.0),
    linear("Radians", 180.0 / PI),
    linear("Gradians", 0.9),
];

static PRESSURE: [UnitEntry; 5] = [
    linear("Pascals", 1.0),
    linear("Kilopascals", 1000.0),
    linear("Bars", 1e5),
    linear("Atmospheres", 101325.0),
    linear("Pounds per Square Inch", 6894.76),
];

static SPEED: [UnitEntry; 5] = [
    linear("Meters per Second", 1.0),
    linear("Kilometers per Hour", 1.0 / 3.6),
    linear("Miles per Hour", 1.0 / 2.237),
    linear("Feet per Second", 0.3048),
    linear("Knots", 1.852 / 3.6),
];

static TEMPERATURE: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

static TIME: [UnitEntry; 7] = [
    linear("Seconds", 1.0),
    linear("Minutes", 60.0),
    linear("Hours", 3600.0),
    linear("Days", 86400.0),
    linear("Weeks", 604800.0),
    linear("Months", 2.628e6),
    linear("Years", 3.154e7),
];

static VOLUME: [UnitEntry; 11] = [
    linear("Milliliters", 0.001),
    linear("Liters", 1.0),
    linear("Cubic Meters", 1000.0),
    linear("Teaspoons", 0.004929),
    linear("Tablespoons", 0.014787),
    linear("Cups", 0.24),
    linear("Pints", 0.473176),
    linear("Quarts", 0.946353),
    linear("Gallons", 3.78541),
    linear("Cubic Inches", 0.016387),
    linear("Cubic Feet", 28.3168),
];

const fn factors(
    name: &'static str,
    base_unit: &'static str,
    units: &'static [UnitEntry],
) -> Category {
    Category { name, base_unit, kind: CategoryKind::Linear, units: UnitSet::Factors(units) }
}

/// Every supported category, in display order
pub static CATEGORIES: [Category; 14] = [
    factors("Area", "Square Meters", &AREA),
    factors("Data Transfer Rate", "Bits per Second", &DATA_TRANSFER_RATE),
    factors("Digital Storage", "Bits", &DIGITAL_STORAGE),
    factors("Energy", "Joules", &ENERGY),
    factors("Frequency", "Hertz", &FREQUENCY),
    Category {
        name: "Fuel Economy",
        base_unit: "Liters per 100 Kilometers",
        kind: CategoryKind::FuelEconomy,
        units: UnitSet::Factors(&FUEL_ECONOMY),
    },
    factors("Length", "Meters", &LENGTH),
    factors("Mass", "Grams", &MASS),
    factors("Plane Angle", "Degrees", &PLANE_ANGLE),
    factors("Pressure", "Pascals", &PRESSURE),
    factors("Speed", "Meters per Second", &SPEED),
    Category {
        name: "Temperature",
        base_unit: "Celsius",
        kind: CategoryKind::Temperature,
        units: UnitSet::Custom(&TEMPERATURE),
    },
    factors("Time", "Seconds", &TIME),
    factors("Volume", "Liters", &VOLUME),
];
