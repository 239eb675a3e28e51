//! # Opal Core
//!
//! Unit-bearing quantities shared across the opal framework. Optical data
//! is tabulated against wavelength, and wavelengths arrive from callers in
//! whatever unit is convenient (metres from SI-minded code, micrometres
//! from handbook tables, nanometres from spectroscopy). This crate keeps
//! the unit attached to the number so the mismatch is caught at the seam
//! rather than three modules downstream.
//!
//! ## Modules
//!
//! - [`units`] — Length units, scalar [`units::Length`] quantities,
//!   conversion, and compact human-readable display.
//! - [`spectrum`] — [`spectrum::Wavelengths`], an array quantity used for
//!   wavelength sweeps and elementwise range checks.

pub mod spectrum;
pub mod units;

pub use spectrum::Wavelengths;
pub use units::{Length, LengthUnit};
