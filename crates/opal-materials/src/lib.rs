//! # Opal Materials
//!
//! Material definitions for the opal framework: the base behavior every
//! material shares (string representations, wavelength range checking,
//! wavelength normalization) and the dispersion sources that evaluate the
//! complex refractive index n + ik.
//!
//! ## Available dispersion sources
//!
//! | Source | Module | Built-ins |
//! |--------|--------|-----------|
//! | Tabulated (n, k) data | [`tabulated`] | water, gold |
//! | Sellmeier formula | [`sellmeier`] | BK7, fused silica |
//!
//! ## Wavelength handling
//!
//! Every wavelength-consuming operation takes a [`Wavelengths`]
//! (re-exported from `opal-core`) — an array of magnitudes tagged with a
//! unit. Callers holding bare numbers or no wavelength at all go through
//! [`wavelength::ensure_units`], which defaults and coerces the argument
//! before the operation runs. Out-of-range requests are advisory only: a
//! warning is logged and the lookup still evaluates
//! ([`material::Material::check_wavelength`]).

pub mod catalog;
pub mod dispersion;
pub mod material;
pub mod sellmeier;
pub mod spline;
pub mod tabulated;
pub mod wavelength;

pub use opal_core::{Length, LengthUnit, Wavelengths};

pub use dispersion::{RefractiveIndex, Spectrum};
pub use material::{Material, MaterialError, RangeAdvisory, WavelengthBound};
pub use sellmeier::SellmeierMaterial;
pub use tabulated::TabulatedMaterial;
pub use wavelength::{ensure_units, resolve, WavelengthArg, DEFAULT_SWEEP_POINTS};
