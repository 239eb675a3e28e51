//! Ties material definitions and lookups to terminal output.

use std::io::Write;

use anyhow::{Context, Result};

use opal_core::{Length, LengthUnit};
use opal_materials::{
    Material, RefractiveIndex, SellmeierMaterial, Spectrum, TabulatedMaterial,
};

use crate::config::{DispersionDef, MaterialDef};

/// Build a dispersion source from a parsed definition.
pub fn build_material(def: &MaterialDef) -> Result<Box<dyn RefractiveIndex + Send + Sync>> {
    match &def.dispersion {
        DispersionDef::Sellmeier { b, c, range_um } => {
            let material =
                SellmeierMaterial::new(def.name.clone(), *b, *c, (range_um[0], range_um[1]))
                    .with_context(|| format!("material '{}'", def.name))?;
            Ok(Box::new(material))
        }
        DispersionDef::Tabulated {
            wavelength_um,
            n,
            k,
        } => {
            // An omitted k column means a lossless material.
            let k = if k.is_empty() {
                vec![0.0; n.len()]
            } else {
                k.clone()
            };
            let material =
                TabulatedMaterial::new(def.name.clone(), wavelength_um.clone(), n.clone(), k)
                    .with_context(|| format!("material '{}'", def.name))?;
            Ok(Box::new(material))
        }
    }
}

/// Print n + ik at a single wavelength.
pub fn print_index(material: &dyn RefractiveIndex, wavelength: Length) -> Result<()> {
    let index = material.refractive_index_at(wavelength)?;
    println!("{}", material.informal_repr());
    println!("λ = {}", wavelength.to_compact());
    println!("n = {:.6}", index.re);
    println!("k = {:.6e}", index.im);
    Ok(())
}

/// Write a spectrum as CSV with a `#` metadata header.
pub fn print_spectrum(out: &mut dyn Write, name: &str, spectrum: &Spectrum) -> Result<()> {
    writeln!(out, "# opal — refractive index spectrum")?;
    writeln!(out, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "# material: {}", name)?;
    writeln!(out, "#")?;
    writeln!(out, "wavelength_um,n,k")?;

    let in_um = spectrum.wavelengths.to(LengthUnit::Micrometer);
    for (lam, index) in in_um.magnitudes().iter().zip(spectrum.index.iter()) {
        writeln!(out, "{:.6},{:.6},{:.6e}", lam, index.re, index.im)?;
    }
    Ok(())
}
