//! Wavelength arrays: the quantity type sweeps and lookups operate on.
//!
//! A [`Wavelengths`] value is an `ndarray` of magnitudes tagged with a
//! single [`LengthUnit`]. A scalar wavelength is the one-element case, so
//! every downstream operation is written once, over arrays.

use ndarray::Array1;

use crate::units::{Length, LengthUnit};

/// An array of wavelength magnitudes sharing one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavelengths {
    values: Array1<f64>,
    unit: LengthUnit,
}

impl Wavelengths {
    /// Construct from an existing array of magnitudes.
    pub fn new(values: Array1<f64>, unit: LengthUnit) -> Self {
        Self { values, unit }
    }

    /// Construct from a plain vector of magnitudes.
    pub fn from_vec(values: Vec<f64>, unit: LengthUnit) -> Self {
        Self::new(Array1::from_vec(values), unit)
    }

    /// `n` evenly spaced samples from `start` to `end`, both inclusive.
    ///
    /// The last sample is pinned to `end` exactly rather than accumulated
    /// from the step, so both endpoints survive floating-point rounding.
    pub fn linspace(start: f64, end: f64, n: usize, unit: LengthUnit) -> Self {
        if n == 1 {
            return Self::from_vec(vec![start], unit);
        }
        let values = (0..n)
            .map(|i| {
                if i + 1 == n {
                    end
                } else {
                    start + (end - start) * i as f64 / (n - 1).max(1) as f64
                }
            })
            .collect();
        Self::from_vec(values, unit)
    }

    /// Number of wavelength samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The unit shared by every magnitude in the array.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The raw magnitudes, in this array's own unit.
    pub fn magnitudes(&self) -> &Array1<f64> {
        &self.values
    }

    /// The sample at index `i` as a scalar quantity.
    pub fn get(&self, i: usize) -> Length {
        Length::new(self.values[i], self.unit)
    }

    /// All samples converted to metres.
    pub fn meters(&self) -> Array1<f64> {
        let factor = self.unit.factor();
        self.values.mapv(|v| v * factor)
    }

    /// Convert every sample to another unit.
    pub fn to(&self, unit: LengthUnit) -> Wavelengths {
        let from = self.unit;
        Wavelengths::new(
            self.values.mapv(|v| crate::units::convert(v, from, unit)),
            unit,
        )
    }

    /// The smallest sample, or `None` when the array is empty.
    pub fn min(&self) -> Option<Length> {
        self.values
            .iter()
            .copied()
            .reduce(f64::min)
            .map(|v| Length::new(v, self.unit))
    }

    /// The largest sample, or `None` when the array is empty.
    pub fn max(&self) -> Option<Length> {
        self.values
            .iter()
            .copied()
            .reduce(f64::max)
            .map(|v| Length::new(v, self.unit))
    }
}

impl From<Length> for Wavelengths {
    /// A scalar wavelength as a one-element array carrying the same unit.
    fn from(length: Length) -> Self {
        Wavelengths::from_vec(vec![length.magnitude()], length.unit())
    }
}
