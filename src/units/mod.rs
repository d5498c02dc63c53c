//! Unit conversion tables.
//!
//! Length, mass and data size convert by factor lookup through a base unit
//! (meters, grams, bytes); temperature converts through Celsius with the
//! usual formulas. Unit names are matched case-insensitively.

use anyhow::{Result, bail};

/// Conversion categories. Units never convert across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length,
    Mass,
    Data,
    Temperature,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Data => "data",
            Category::Temperature => "temperature",
        }
    }
}

/// Factors to the base unit (meters).
const LENGTH_UNITS: &[(&str, f64)] = &[
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

/// Factors to the base unit (grams).
const MASS_UNITS: &[(&str, f64)] = &[
    ("mg", 0.001),
    ("g", 1.0),
    ("kg", 1000.0),
    ("t", 1_000_000.0),
    ("oz", 28.349523125),
    ("lb", 453.59237),
];

/// Factors to the base unit (bytes), decimal multiples.
const DATA_UNITS: &[(&str, f64)] = &[
    ("bit", 0.125),
    ("b", 1.0),
    ("kb", 1000.0),
    ("mb", 1e6),
    ("gb", 1e9),
    ("tb", 1e12),
];

const TEMPERATURE_UNITS: &[&str] = &["c", "f", "k"];

/// All categories, in listing order.
pub fn categories() -> &'static [Category] {
    &[Category::Length, Category::Mass, Category::Data, Category::Temperature]
}

/// Unit names available in a category, in listing order.
pub fn units_in(category: Category) -> Vec<&'static str> {
    match category {
        Category::Length => LENGTH_UNITS.iter().map(|(name, _)| *name).collect(),
        Category::Mass => MASS_UNITS.iter().map(|(name, _)| *name).collect(),
        Category::Data => DATA_UNITS.iter().map(|(name, _)| *name).collect(),
        Category::Temperature => TEMPERATURE_UNITS.to_vec(),
    }
}

/// Resolve a unit name to its category and base-unit factor. Temperature
/// units resolve with a factor of 1.0; they never convert linearly.
fn lookup(unit: &str) -> Option<(Category, f64)> {
    let name = unit.to_lowercase();
    for &(candidate, factor) in LENGTH_UNITS {
        if candidate == name {
            return Some((Category::Length, factor));
        }
    }
    for &(candidate, factor) in MASS_UNITS {
        if candidate == name {
            return Some((Category::Mass, factor));
        }
    }
    for &(candidate, factor) in DATA_UNITS {
        if candidate == name {
            return Some((Category::Data, factor));
        }
    }
    if TEMPERATURE_UNITS.contains(&name.as_str()) {
        return Some((Category::Temperature, 1.0));
    }
    None
}

fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "f" => (value - 32.0) * 5.0 / 9.0,
        "k" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "f" => value * 9.0 / 5.0 + 32.0,
        "k" => value + 273.15,
        _ => value,
    }
}

/// Convert `value` between two units of the same category.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    let Some((from_category, from_factor)) = lookup(from) else {
        bail!("Unknown unit: '{}' (valid units: {})", from, known_units());
    };
    let Some((to_category, to_factor)) = lookup(to) else {
        bail!("Unknown unit: '{}' (valid units: {})", to, known_units());
    };
    if from_category != to_category {
        bail!(
            "Cannot convert {} ({}) to {} ({})",
            from,
            from_category.name(),
            to,
            to_category.name()
        );
    }

    if from_category == Category::Temperature {
        let celsius = to_celsius(value, &from.to_lowercase());
        return Ok(from_celsius(celsius, &to.to_lowercase()));
    }

    Ok(value * from_factor / to_factor)
}

fn known_units() -> String {
    categories()
        .iter()
        .map(|&c| format!("{}: {}", c.name(), units_in(c).join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
}
