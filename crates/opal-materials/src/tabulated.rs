//! Tabulated (n, k) dispersion data.
//!
//! Materials whose optical constants are published as tables of measured
//! values at discrete wavelengths. The tables are embedded at compile time
//! and interpolated with natural cubic splines.
//!
//! ## Built-in datasets
//!
//! | Identifier | Constructor | Wavelength range | Source |
//! |-----------|-------------|------------------|--------|
//! | `water` | [`TabulatedMaterial::water()`] | 0.2–2.0 µm | Hale & Querry (1973) |
//! | `gold` | [`TabulatedMaterial::gold()`] | 0.207–1.937 µm | Johnson & Christy (1972) |

use log::warn;
use ndarray::Array1;
use num_complex::Complex64;

use opal_core::{Length, LengthUnit, Wavelengths};

use crate::dispersion::RefractiveIndex;
use crate::material::{Material, MaterialError, WavelengthBound};
use crate::spline::CubicSpline;

/// A material backed by a tabulated (λ, n, k) dataset.
///
/// Wavelength knots are stored in micrometres; n and k each get their own
/// spline. The declared bound is the first and last knot.
pub struct TabulatedMaterial {
    filename: String,
    bound: WavelengthBound,
    spline_n: CubicSpline,
    spline_k: CubicSpline,
}

impl TabulatedMaterial {
    /// Construct from tabulated data.
    ///
    /// # Arguments
    /// * `filename` — Dataset identifier.
    /// * `wavelengths_um` — Wavelengths in µm (strictly increasing).
    /// * `n` — Real refractive index at each wavelength.
    /// * `k` — Extinction coefficient at each wavelength.
    pub fn new(
        filename: impl Into<String>,
        wavelengths_um: Vec<f64>,
        n: Vec<f64>,
        k: Vec<f64>,
    ) -> Result<Self, MaterialError> {
        let first = wavelengths_um
            .first()
            .copied()
            .ok_or_else(|| MaterialError::Data("empty dispersion table".into()))?;
        let last = wavelengths_um
            .last()
            .copied()
            .ok_or_else(|| MaterialError::Data("empty dispersion table".into()))?;
        let bound = WavelengthBound::new(Length::micrometers(first), Length::micrometers(last))?;

        let spline_n = CubicSpline::new(wavelengths_um.clone(), n)?;
        let spline_k = CubicSpline::new(wavelengths_um, k)?;

        Ok(Self {
            filename: filename.into(),
            bound,
            spline_n,
            spline_k,
        })
    }

    /// Construct from rows of (λ/µm, n, k).
    pub fn from_rows(
        filename: impl Into<String>,
        rows: &[(f64, f64, f64)],
    ) -> Result<Self, MaterialError> {
        let wavelengths_um = rows.iter().map(|&(lam, _, _)| lam).collect();
        let n = rows.iter().map(|&(_, n, _)| n).collect();
        let k = rows.iter().map(|&(_, _, k)| k).collect();
        Self::new(filename, wavelengths_um, n, k)
    }

    /// Liquid water at room temperature, from
    /// G. M. Hale and M. R. Querry, *Appl. Opt.* **12**, 555 (1973).
    ///
    /// Water is nearly lossless through the visible (k < 1e-8 near 500 nm)
    /// with absorption rising steeply into the infrared.
    pub fn water() -> Result<Self, MaterialError> {
        // (λ/µm, n, k)
        let rows: &[(f64, f64, f64)] = &[
            (0.200, 1.396, 1.10e-7),
            (0.225, 1.373, 4.90e-8),
            (0.250, 1.362, 3.35e-8),
            (0.275, 1.354, 2.35e-8),
            (0.300, 1.349, 1.60e-8),
            (0.350, 1.343, 6.50e-9),
            (0.400, 1.339, 1.86e-9),
            (0.450, 1.337, 1.02e-9),
            (0.500, 1.335, 1.00e-9),
            (0.550, 1.333, 1.96e-9),
            (0.600, 1.332, 1.09e-8),
            (0.650, 1.331, 1.64e-8),
            (0.700, 1.331, 3.35e-8),
            (0.750, 1.330, 1.56e-7),
            (0.800, 1.329, 1.25e-7),
            (0.850, 1.329, 2.93e-7),
            (0.900, 1.328, 4.86e-7),
            (0.950, 1.327, 1.32e-6),
            (1.000, 1.327, 2.89e-6),
            (1.200, 1.324, 9.89e-6),
            (1.400, 1.321, 1.38e-4),
            (1.600, 1.317, 8.55e-5),
            (1.800, 1.312, 1.15e-4),
            (2.000, 1.306, 1.10e-3),
        ];
        Self::from_rows("water", rows)
    }

    /// Gold, from P. B. Johnson and R. W. Christy,
    /// *Phys. Rev. B* **6**, 4370 (1972).
    ///
    /// Selected rows of the published table; the interband transitions
    /// below ~0.5 µm and the Drude-like infrared tail are both covered.
    pub fn gold() -> Result<Self, MaterialError> {
        // (λ/µm, n, k)
        let rows: &[(f64, f64, f64)] = &[
            (0.2066, 1.350, 1.624),
            (0.2417, 1.444, 1.598),
            (0.2755, 1.654, 1.758),
            (0.2988, 1.532, 1.893),
            (0.3263, 1.648, 1.908),
            (0.3542, 1.716, 1.862),
            (0.3815, 1.674, 1.936),
            (0.4133, 1.466, 1.953),
            (0.4428, 1.400, 1.880),
            (0.4769, 1.030, 1.850),
            (0.5166, 0.608, 2.120),
            (0.5391, 0.430, 2.455),
            (0.5821, 0.290, 2.863),
            (0.6168, 0.210, 3.272),
            (0.6526, 0.166, 3.150),
            (0.7045, 0.160, 3.800),
            (0.8211, 0.160, 5.080),
            (0.8920, 0.170, 5.663),
            (1.0880, 0.210, 7.150),
            (1.3940, 0.380, 8.970),
            (1.9370, 0.920, 13.780),
        ];
        Self::from_rows("gold", rows)
    }
}

impl Material for TabulatedMaterial {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn wavelength_bound(&self) -> Option<WavelengthBound> {
        Some(self.bound)
    }
}

impl RefractiveIndex for TabulatedMaterial {
    fn refractive_index(
        &self,
        wavelengths: &Wavelengths,
    ) -> Result<Array1<Complex64>, MaterialError> {
        if let Some(advisory) = self.check_wavelength(wavelengths) {
            warn!("{advisory}");
        }

        let in_um = wavelengths.to(LengthUnit::Micrometer);
        let index = in_um
            .magnitudes()
            .iter()
            .map(|&lam| Complex64::new(self.spline_n.evaluate(lam), self.spline_k.evaluate(lam)))
            .collect();
        Ok(index)
    }
}

impl std::fmt::Display for TabulatedMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.informal_repr())
    }
}
