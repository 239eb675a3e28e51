//! TOML deserialisation for user-defined materials.
//!
//! A definition file names a material and supplies either Sellmeier
//! coefficients or tabulated (n, k) columns:
//!
//! ```toml
//! [material]
//! name = "SF11"
//! b = [1.73759695, 0.313747346, 1.89878101]
//! c = [0.013188707, 0.0623068142, 155.23629]
//! range_um = [0.37, 2.5]
//! ```

use serde::Deserialize;

/// Top-level material definition file.
#[derive(Debug, Deserialize)]
pub struct MaterialFile {
    pub material: MaterialDef,
}

/// A single user-defined material.
#[derive(Debug, Deserialize)]
pub struct MaterialDef {
    pub name: String,
    #[serde(flatten)]
    pub dispersion: DispersionDef,
}

/// Dispersion specification: Sellmeier coefficients or a tabulated
/// dataset.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DispersionDef {
    Sellmeier {
        /// Oscillator strengths $B_1..B_3$.
        b: [f64; 3],
        /// Resonance terms $C_1..C_3$ in µm².
        c: [f64; 3],
        /// Validity range [min, max] in µm.
        range_um: [f64; 2],
    },
    Tabulated {
        /// Wavelength knots in µm (strictly increasing).
        wavelength_um: Vec<f64>,
        /// Real refractive index at each knot.
        n: Vec<f64>,
        /// Extinction coefficient at each knot. Omitted means lossless.
        #[serde(default)]
        k: Vec<f64>,
    },
}

/// Load and parse a TOML material definition file.
pub fn load_material(path: &std::path::Path) -> anyhow::Result<MaterialFile> {
    let content = std::fs::read_to_string(path)?;
    let file: MaterialFile = toml::from_str(&content)?;
    Ok(file)
}
