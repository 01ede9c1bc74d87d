//! Unit conversion tables.
//!
//! Length, weight, area and volume route through a base unit (metre, gram,
//! square metre, litre). Each table stores how many base units one unit is
//! worth; the reverse factor is its reciprocal, so a unit listed in a table
//! converts in both directions. Temperature is affine and pivots on Celsius.

use std::fmt;
use std::str::FromStr;

use super::error::{EngineError, Result};

const LENGTH: &[(&str, f64)] = &[
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

const WEIGHT: &[(&str, f64)] = &[
    ("mg", 0.001),
    ("g", 1.0),
    ("kg", 1000.0),
    ("oz", 28.3495),
    ("lb", 453.592),
    ("ton", 1_000_000.0),
];

const AREA: &[(&str, f64)] = &[
    ("mm2", 0.000001),
    ("cm2", 0.0001),
    ("m2", 1.0),
    ("km2", 1_000_000.0),
    ("in2", 0.00064516),
    ("ft2", 0.092903),
    ("yd2", 0.836127),
    ("ac", 4046.86),
    ("ha", 10000.0),
];

const VOLUME: &[(&str, f64)] = &[
    ("ml", 0.001),
    ("l", 1.0),
    ("gal", 3.78541),
    ("qt", 0.946353),
    ("pt", 0.473176),
    ("cup", 0.236588),
    ("fl_oz", 0.0295735),
    ("m3", 1000.0),
];

const TEMPERATURE_UNITS: &[&str] = &["C", "F", "K"];

/// A family of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 5] = [
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Area,
        Self::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Area => "area",
            Self::Volume => "volume",
        }
    }

    /// Unit codes accepted for this category.
    pub fn units(&self) -> Vec<&'static str> {
        match self.table() {
            Some(table) => table.iter().map(|(code, _)| *code).collect(),
            None => TEMPERATURE_UNITS.to_vec(),
        }
    }

    fn table(&self) -> Option<&'static [(&'static str, f64)]> {
        match self {
            Self::Length => Some(LENGTH),
            Self::Weight => Some(WEIGHT),
            Self::Area => Some(AREA),
            Self::Volume => Some(VOLUME),
            Self::Temperature => None,
        }
    }
}

impl FromStr for UnitCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "length" => Ok(Self::Length),
            "weight" => Ok(Self::Weight),
            "temperature" => Ok(Self::Temperature),
            "area" => Ok(Self::Area),
            "volume" => Ok(Self::Volume),
            _ => Err(EngineError::UnknownCategory),
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn to_base_factor(table: &[(&str, f64)], unit: &str) -> Result<f64> {
    table
        .iter()
        .find(|(code, _)| *code == unit)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| EngineError::unknown_unit(unit))
}

fn to_celsius(value: f64, unit: &str) -> Result<f64> {
    match unit {
        "C" => Ok(value),
        "F" => Ok((value - 32.0) * 5.0 / 9.0),
        "K" => Ok(value - 273.15),
        _ => Err(EngineError::UnknownTemperatureUnit),
    }
}

fn from_celsius(celsius: f64, unit: &str) -> Result<f64> {
    match unit {
        "C" => Ok(celsius),
        "F" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "K" => Ok(celsius + 273.15),
        _ => Err(EngineError::UnknownTemperatureUnit),
    }
}

/// Convert `value` from `from` to `to` within `category`.
pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> Result<f64> {
    match category.table() {
        Some(table) => {
            let from_factor = to_base_factor(table, from)?;
            let to_factor = to_base_factor(table, to)?;
            let base = value * from_factor;
            Ok(base * (1.0 / to_factor))
        }
        None => from_celsius(to_celsius(value, from)?, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn length_conversions() {
        assert!(approx(convert(UnitCategory::Length, 100.0, "cm", "m").unwrap(), 1.0));
        assert!(approx(convert(UnitCategory::Length, 1.0, "mi", "km").unwrap(), 1.609344));
        assert!(approx(convert(UnitCategory::Length, 12.0, "in", "ft").unwrap(), 1.0));
    }

    #[test]
    fn weight_and_volume_conversions() {
        assert!(approx(convert(UnitCategory::Weight, 2.0, "kg", "g").unwrap(), 2000.0));
        assert!(approx(convert(UnitCategory::Volume, 1.0, "m3", "l").unwrap(), 1000.0));
        assert!(approx(convert(UnitCategory::Area, 1.0, "ha", "m2").unwrap(), 10000.0));
    }

    #[test]
    fn temperature_pivots_on_celsius() {
        assert!(approx(convert(UnitCategory::Temperature, 0.0, "C", "F").unwrap(), 32.0));
        assert!(approx(convert(UnitCategory::Temperature, 212.0, "F", "C").unwrap(), 100.0));
        assert!(approx(convert(UnitCategory::Temperature, 0.0, "C", "K").unwrap(), 273.15));
        assert!(approx(convert(UnitCategory::Temperature, 32.0, "F", "K").unwrap(), 273.15));
    }

    #[test]
    fn every_unit_round_trips() {
        for category in UnitCategory::ALL {
            let units = category.units();
            for from in &units {
                for to in &units {
                    let there = convert(category, 100.0, from, to).unwrap();
                    let back = convert(category, there, to, from).unwrap();
                    assert!(
                        ((back - 100.0) / 100.0).abs() < 1e-6,
                        "{category}: {from} -> {to} -> {from} gave {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_units_are_errors() {
        assert_eq!(
            convert(UnitCategory::Length, 1.0, "furlong", "m"),
            Err(EngineError::unknown_unit("furlong"))
        );
        assert_eq!(
            convert(UnitCategory::Weight, 1.0, "g", "stone"),
            Err(EngineError::unknown_unit("stone"))
        );
        assert_eq!(
            convert(UnitCategory::Temperature, 1.0, "R", "C"),
            Err(EngineError::UnknownTemperatureUnit)
        );
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert_eq!(
            "speed".parse::<UnitCategory>(),
            Err(EngineError::UnknownCategory)
        );
    }
}
