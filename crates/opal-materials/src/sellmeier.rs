//! Sellmeier dispersion formulas.
//!
//! Transparent optical glasses are usually published not as tables but as
//! coefficients of the three-term Sellmeier equation
//!
//! $n^2(\lambda) = 1 + \sum_{i=1}^{3} \frac{B_i \lambda^2}{\lambda^2 - C_i}$
//!
//! with λ in µm and $C_i$ in µm². The square root is taken in the complex
//! plane, so an evaluation near a resonance (where $n^2$ can turn
//! negative) degrades to an imaginary index instead of a NaN.
//!
//! ## Built-in glasses
//!
//! | Identifier | Constructor | Validity range | Source |
//! |-----------|-------------|----------------|--------|
//! | `BK7` | [`SellmeierMaterial::bk7()`] | 0.3–2.5 µm | SCHOTT catalog |
//! | `fused_silica` | [`SellmeierMaterial::fused_silica()`] | 0.21–3.71 µm | Malitson (1965) |

use log::warn;
use ndarray::Array1;
use num_complex::Complex64;

use opal_core::{Length, LengthUnit, Wavelengths};

use crate::dispersion::RefractiveIndex;
use crate::material::{Material, MaterialError, WavelengthBound};

/// A material described by three-term Sellmeier coefficients.
pub struct SellmeierMaterial {
    filename: String,
    b: [f64; 3],
    /// Resonance terms in µm².
    c: [f64; 3],
    bound: WavelengthBound,
}

impl SellmeierMaterial {
    /// Construct from Sellmeier coefficients.
    ///
    /// # Arguments
    /// * `filename` — Dataset identifier.
    /// * `b` — Oscillator strengths $B_1..B_3$ (dimensionless).
    /// * `c` — Resonance wavelengths squared $C_1..C_3$ (µm²).
    /// * `range_um` — Validity range (min, max) in µm.
    pub fn new(
        filename: impl Into<String>,
        b: [f64; 3],
        c: [f64; 3],
        range_um: (f64, f64),
    ) -> Result<Self, MaterialError> {
        let bound = WavelengthBound::new(
            Length::micrometers(range_um.0),
            Length::micrometers(range_um.1),
        )?;
        Ok(Self {
            filename: filename.into(),
            b,
            c,
            bound,
        })
    }

    /// SCHOTT N-BK7 borosilicate crown glass.
    ///
    /// Coefficients from the SCHOTT optical glass catalog; the standard
    /// reference glass for visible optics (n ≈ 1.5168 at the d line).
    pub fn bk7() -> Result<Self, MaterialError> {
        Self::new(
            "BK7",
            [1.039_612_12, 0.231_792_344, 1.010_469_45],
            [0.006_000_698_67, 0.020_017_914_4, 103.560_653],
            (0.3, 2.5),
        )
    }

    /// Fused silica (amorphous SiO₂).
    ///
    /// Coefficients from I. H. Malitson, *J. Opt. Soc. Am.* **55**, 1205
    /// (1965), fitted over 0.21–3.71 µm.
    pub fn fused_silica() -> Result<Self, MaterialError> {
        Self::new(
            "fused_silica",
            [0.696_166_3, 0.407_942_6, 0.897_479_4],
            [0.004_679_148_26, 0.013_512_063_1, 97.934_002_5],
            (0.21, 3.71),
        )
    }

    /// $n^2$ at a single wavelength (λ in µm).
    fn n_squared(&self, lambda_um: f64) -> f64 {
        let l2 = lambda_um * lambda_um;
        let mut n2 = 1.0;
        for i in 0..3 {
            n2 += self.b[i] * l2 / (l2 - self.c[i]);
        }
        n2
    }
}

impl Material for SellmeierMaterial {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn wavelength_bound(&self) -> Option<WavelengthBound> {
        Some(self.bound)
    }
}

impl RefractiveIndex for SellmeierMaterial {
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
            .map(|&lam| Complex64::from(self.n_squared(lam)).sqrt())
            .collect();
        Ok(index)
    }
}

impl std::fmt::Display for SellmeierMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.informal_repr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bk7_matches_the_catalog_at_the_d_line() {
        let bk7 = SellmeierMaterial::bk7().unwrap();
        let n = bk7
            .refractive_index_at(Length::nanometers(587.6))
            .unwrap();
        assert_relative_eq!(n.re, 1.5168, max_relative = 1e-3);
        assert_relative_eq!(n.im, 0.0);
    }

    #[test]
    fn test_fused_silica_matches_malitson_at_the_d_line() {
        let silica = SellmeierMaterial::fused_silica().unwrap();
        let n = silica
            .refractive_index_at(Length::nanometers(587.6))
            .unwrap();
        assert_relative_eq!(n.re, 1.4585, max_relative = 1e-3);
    }

    #[test]
    fn test_normal_dispersion_in_the_visible() {
        let bk7 = SellmeierMaterial::bk7().unwrap();
        let blue = bk7.refractive_index_at(Length::nanometers(450.0)).unwrap();
        let red = bk7.refractive_index_at(Length::nanometers(650.0)).unwrap();
        assert!(blue.re > red.re, "expected n(450 nm) > n(650 nm)");
    }

    #[test]
    fn test_out_of_range_lookup_still_evaluates() {
        let bk7 = SellmeierMaterial::bk7().unwrap();
        // 5 µm is past the declared validity range; the formula still
        // produces a finite value while the advisory goes to the log.
        let index = bk7
            .refractive_index(&Wavelengths::from_vec(vec![5.0], LengthUnit::Micrometer))
            .unwrap();
        assert_eq!(index.len(), 1);
        assert!(index[0].re.is_finite());
    }

    #[test]
    fn test_inverted_validity_range_is_rejected() {
        let result = SellmeierMaterial::new("broken", [1.0, 1.0, 1.0], [0.01, 0.02, 100.0], (2.0, 1.0));
        assert!(matches!(result, Err(MaterialError::InvalidBound { .. })));
    }
}
