//! Refractive index provider trait.
//!
//! All dispersion sources implement [`RefractiveIndex`], which evaluates
//! the complex refractive index n + ik over a wavelength array. The
//! provided [`sample`](RefractiveIndex::sample) entry point applies the
//! wavelength normalization of [`crate::wavelength`] first, so callers may
//! omit the wavelength entirely or pass bare numbers.

use ndarray::Array1;
use num_complex::Complex64;

use opal_core::{Length, Wavelengths};

use crate::material::{Material, MaterialError};
use crate::wavelength::{resolve, WavelengthArg};

/// The complex refractive index sampled over a wavelength array.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// The wavelengths the index was evaluated at.
    pub wavelengths: Wavelengths,
    /// n + ik at each wavelength.
    pub index: Array1<Complex64>,
}

/// Evaluates the complex refractive index of a material.
pub trait RefractiveIndex: Material {
    /// n + ik at each supplied wavelength.
    ///
    /// Wavelengths outside the declared bound produce a single advisory on
    /// the warning channel and are still evaluated; the result always has
    /// one entry per input sample.
    fn refractive_index(
        &self,
        wavelengths: &Wavelengths,
    ) -> Result<Array1<Complex64>, MaterialError>;

    /// n + ik at a single wavelength.
    fn refractive_index_at(&self, wavelength: Length) -> Result<Complex64, MaterialError> {
        let values = self.refractive_index(&Wavelengths::from(wavelength))?;
        Ok(values[0])
    }

    /// Evaluate over a normalized wavelength argument.
    ///
    /// Applies the defaulting and unit coercion of [`resolve`] before the
    /// lookup runs: an omitted argument sweeps the declared bound (which
    /// must then exist), bare numbers are read as metres, and unit-bearing
    /// quantities pass through unchanged.
    fn sample(&self, arg: Option<WavelengthArg>) -> Result<Spectrum, MaterialError> {
        let wavelengths = resolve(self, arg)?;
        let index = self.refractive_index(&wavelengths)?;
        Ok(Spectrum { wavelengths, index })
    }
}
