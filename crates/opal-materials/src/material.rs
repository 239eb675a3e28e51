//! Material base behavior.
//!
//! Every material — tabulated or formula-based — exposes an identifier and
//! an optional wavelength bound, and inherits the same string
//! representations and range check. The range check is purely
//! observational: it reports an out-of-range request as a
//! [`RangeAdvisory`] and never prevents the lookup from running.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use opal_core::{Length, LengthUnit, Wavelengths};

use crate::spline::SplineError;

/// Errors from material construction and lookup plumbing.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// The default wavelength sweep was requested for a material that
    /// declares no support range. Supply an explicit wavelength instead.
    #[error("material '{0}' declares no wavelength bound; supply an explicit wavelength")]
    MissingBound(String),

    #[error("invalid wavelength bound: min {min} exceeds max {max}")]
    InvalidBound { min: Length, max: Length },

    #[error("material not found: {0}")]
    NotFound(String),

    #[error("dispersion data error: {0}")]
    Data(String),

    #[error(transparent)]
    Spline(#[from] SplineError),
}

/// The ordered (min, max) pair of wavelengths for which a material's
/// optical data is defined.
///
/// The two ends may be expressed in different length units; comparisons
/// are performed on the metre value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavelengthBound {
    min: Length,
    max: Length,
}

impl WavelengthBound {
    /// Construct a bound, rejecting `min > max`.
    pub fn new(min: Length, max: Length) -> Result<Self, MaterialError> {
        if min > max {
            return Err(MaterialError::InvalidBound { min, max });
        }
        Ok(Self { min, max })
    }

    /// The shortest supported wavelength.
    pub fn min(&self) -> Length {
        self.min
    }

    /// The longest supported wavelength.
    pub fn max(&self) -> Length {
        self.max
    }

    /// The unit the bound is expressed in (the min's unit).
    pub fn unit(&self) -> LengthUnit {
        self.min.unit()
    }
}

/// A non-fatal advisory describing a wavelength request outside the
/// material's declared support range.
///
/// Rendering follows the fixed template reported to users:
/// the supplied range first, then the declared bound, then the material.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeAdvisory {
    /// Smallest supplied wavelength.
    pub supplied_min: Length,
    /// Largest supplied wavelength.
    pub supplied_max: Length,
    /// Declared lower bound of the material data.
    pub bound_min: Length,
    /// Declared upper bound of the material data.
    pub bound_max: Length,
    /// Identifier of the material whose bound was exceeded.
    pub filename: String,
}

impl fmt::Display for RangeAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wavelength range goes from {} to {} which is outside the allowable range of {} to {} µm. [Material: {}]",
            self.supplied_min.to_compact(),
            self.supplied_max.to_compact(),
            self.bound_min.to_compact(),
            self.bound_max.to_compact(),
            self.filename,
        )
    }
}

/// Base capability set shared by every material.
///
/// Implementors supply an identifier and (optionally) the wavelength range
/// their data covers; the string representations and the range check come
/// for free.
pub trait Material {
    /// Identifier of the dataset backing this material.
    fn filename(&self) -> &str;

    /// Wavelength range over which the material's data is defined, if any.
    fn wavelength_bound(&self) -> Option<WavelengthBound>;

    /// Informal string representation: `"Material: {filename}"`.
    fn informal_repr(&self) -> String {
        format!("Material: {}", self.filename())
    }

    /// Formal string representation. Identical to [`informal_repr`]
    /// (no further detail is added).
    ///
    /// [`informal_repr`]: Material::informal_repr
    fn formal_repr(&self) -> String {
        self.informal_repr()
    }

    /// Check a requested wavelength range against the declared bound.
    ///
    /// Returns at most one advisory per call, regardless of how many
    /// samples violate the bound. Returns `None` when no bound is
    /// declared, when `range` is empty, or when every sample lies inside
    /// `[min, max]`. The check never mutates state and never blocks the
    /// lookup that follows; callers forward the advisory to the warning
    /// channel.
    fn check_wavelength(&self, range: &Wavelengths) -> Option<RangeAdvisory> {
        let bound = self.wavelength_bound()?;
        let supplied_min = range.min()?;
        let supplied_max = range.max()?;

        let lo = bound.min().as_meters();
        let hi = bound.max().as_meters();
        let outside = range.meters().iter().any(|&m| m < lo || m > hi);
        if !outside {
            return None;
        }

        Some(RangeAdvisory {
            supplied_min,
            supplied_max,
            bound_min: bound.min(),
            bound_max: bound.max(),
            filename: self.filename().to_owned(),
        })
    }
}
