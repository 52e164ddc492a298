use crate::errors::RulerError;
use std::fmt;
use std::str::FromStr;

use self::Unit::*;

/// Distance units a ruler can measure in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Unit {
    Kilometers,
    Miles,
    NauticalMiles,
    Meters,
    Feet,
    Yards,
    Inches,
}

pub static UNITS: [Unit; 7] = [
    Kilometers,
    Miles,
    NauticalMiles,
    Meters,
    Feet,
    Yards,
    Inches,
];

impl Default for Unit {
    fn default() -> Self {
        Kilometers
    }
}

impl Unit {
    /// Multiplier relative to kilometers.
    pub fn factor(self) -> f64 {
        match self {
            Kilometers => 1.,
            Miles => 1000. / 1609.344,
            NauticalMiles => 1000. / 1852.,
            Meters => 1000.,
            Feet => 1000. / 0.3048,
            Yards => 1000. / 0.9144,
            Inches => 1000. / 0.0254,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Kilometers => "kilometers",
            Miles => "miles",
            NauticalMiles => "nauticalmiles",
            Meters => "meters",
            Feet => "feet",
            Yards => "yards",
            Inches => "inches",
        }
    }

    /// Convert `value` measured in `self` into `to`.
    pub fn convert(self, value: f64, to: Unit) -> f64 {
        value * to.factor() / self.factor()
    }
}

/// Per-unit multipliers relative to kilometers.
pub fn unit_factors() -> [(Unit, f64); 7] {
    let mut table = [(Kilometers, 1.); 7];
    for (entry, &unit) in table.iter_mut().zip(UNITS.iter()) {
        *entry = (unit, unit.factor());
    }
    table
}

pub(crate) fn unit_names() -> String {
    UNITS
        .iter()
        .map(|u| u.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = RulerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "kilometers" => Ok(Kilometers),
            "miles" => Ok(Miles),
            "nauticalmiles" => Ok(NauticalMiles),
            "meters" | "metres" => Ok(Meters),
            "feet" => Ok(Feet),
            "yards" => Ok(Yards),
            "inches" => Ok(Inches),
            _ => Err(RulerError::UnknownUnit {
                name: name.to_string(),
            }),
        }
    }
}
