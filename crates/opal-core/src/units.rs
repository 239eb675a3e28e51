//! Length units and scalar quantities.
//!
//! A [`Length`] is a magnitude tagged with its [`LengthUnit`]. Conversions
//! are explicit and comparisons re-express both sides in a common unit, so
//! `Length::nanometers(1550.0)` and `Length::micrometers(1.55)` compare
//! equal while remaining distinct representations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Units of length accepted for wavelength values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Micrometer,
    Nanometer,
    Picometer,
}

impl LengthUnit {
    /// All units, largest first. Used when choosing a compact display unit.
    const DESCENDING: [LengthUnit; 5] = [
        LengthUnit::Meter,
        LengthUnit::Millimeter,
        LengthUnit::Micrometer,
        LengthUnit::Nanometer,
        LengthUnit::Picometer,
    ];

    /// Metres per one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Micrometer => 1e-6,
            LengthUnit::Nanometer => 1e-9,
            LengthUnit::Picometer => 1e-12,
        }
    }

    /// Power-of-ten exponent of this unit relative to the metre.
    pub(crate) fn exponent(self) -> i32 {
        match self {
            LengthUnit::Meter => 0,
            LengthUnit::Millimeter => -3,
            LengthUnit::Micrometer => -6,
            LengthUnit::Nanometer => -9,
            LengthUnit::Picometer => -12,
        }
    }

    /// SI symbol for this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Nanometer => "nm",
            LengthUnit::Picometer => "pm",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a unit string cannot be parsed.
#[derive(Debug, Error)]
#[error("unrecognised length unit '{0}' (expected m, mm, um, nm or pm)")]
pub struct ParseUnitError(String);

impl FromStr for LengthUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
            "mm" | "millimeter" | "millimetre" => Ok(LengthUnit::Millimeter),
            "um" | "µm" | "micrometer" | "micrometre" | "micron" => Ok(LengthUnit::Micrometer),
            "nm" | "nanometer" | "nanometre" => Ok(LengthUnit::Nanometer),
            "pm" | "picometer" | "picometre" => Ok(LengthUnit::Picometer),
            other => Err(ParseUnitError(other.to_owned())),
        }
    }
}

/// A scalar length quantity.
///
/// Displays as `"{magnitude} {symbol}"`, e.g. `1.55 µm`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Length {
    magnitude: f64,
    unit: LengthUnit,
}

impl Length {
    /// Construct a length from a magnitude and unit.
    pub fn new(magnitude: f64, unit: LengthUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Shorthand constructor for metres.
    pub fn meters(magnitude: f64) -> Self {
        Self::new(magnitude, LengthUnit::Meter)
    }

    /// Shorthand constructor for micrometres.
    pub fn micrometers(magnitude: f64) -> Self {
        Self::new(magnitude, LengthUnit::Micrometer)
    }

    /// Shorthand constructor for nanometres.
    pub fn nanometers(magnitude: f64) -> Self {
        Self::new(magnitude, LengthUnit::Nanometer)
    }

    /// The raw numeric value, in this length's own unit.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The unit the magnitude is expressed in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The value converted to metres.
    pub fn as_meters(&self) -> f64 {
        self.magnitude * self.unit.factor()
    }

    /// Convert to another unit.
    ///
    /// The rescaling uses an exact power-of-ten multiplier or divisor, so
    /// e.g. 1550 nm converts to exactly 1.55 µm.
    pub fn to(&self, unit: LengthUnit) -> Length {
        Length::new(convert(self.magnitude, self.unit, unit), unit)
    }

    /// Re-express this length in the unit that renders its magnitude in
    /// `[1, 1000)`, preferring the current unit when it already does.
    ///
    /// `Length::meters(1.55e-6).to_compact()` displays as `1.55 µm`.
    pub fn to_compact(&self) -> Length {
        let mag = self.magnitude.abs();
        if self.magnitude == 0.0 || (1.0..1000.0).contains(&mag) {
            return *self;
        }
        let metres = self.as_meters();
        for unit in LengthUnit::DESCENDING {
            if metres.abs() >= unit.factor() {
                return self.to(unit);
            }
        }
        self.to(LengthUnit::Picometer)
    }
}

/// Rescale a magnitude between two power-of-ten units.
///
/// Multiplies or divides by an exactly representable power of ten so the
/// common conversions stay free of rounding noise.
pub(crate) fn convert(magnitude: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let diff = from.exponent() - to.exponent();
    if diff >= 0 {
        magnitude * 10f64.powi(diff)
    } else {
        magnitude / 10f64.powi(-diff)
    }
}

/// Both magnitudes re-expressed in the finer of the two units.
///
/// Rescaling into the finer unit multiplies by an exact power of ten, so
/// comparisons like `500 nm == 0.5 µm` hold exactly.
fn in_common_unit(a: &Length, b: &Length) -> (f64, f64) {
    let unit = if a.unit.exponent() <= b.unit.exponent() {
        a.unit
    } else {
        b.unit
    };
    (a.to(unit).magnitude, b.to(unit).magnitude)
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = in_common_unit(self, other);
        lhs == rhs
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let (lhs, rhs) = in_common_unit(self, other);
        lhs.partial_cmp(&rhs)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.symbol())
    }
}
