//! Built-in material lookup.
//!
//! Maps the identifiers accepted on the command line (and in tests) to
//! constructed dispersion sources.

use crate::dispersion::RefractiveIndex;
use crate::material::MaterialError;
use crate::sellmeier::SellmeierMaterial;
use crate::tabulated::TabulatedMaterial;

/// Identifiers of every built-in material, in listing order.
pub fn names() -> &'static [&'static str] {
    &["BK7", "fused_silica", "water", "gold"]
}

/// Construct a built-in material by identifier.
///
/// Unknown identifiers are [`MaterialError::NotFound`].
pub fn builtin(name: &str) -> Result<Box<dyn RefractiveIndex + Send + Sync>, MaterialError> {
    match name {
        "BK7" | "bk7" => Ok(Box::new(SellmeierMaterial::bk7()?)),
        "fused_silica" => Ok(Box::new(SellmeierMaterial::fused_silica()?)),
        "water" => Ok(Box::new(TabulatedMaterial::water()?)),
        "gold" => Ok(Box::new(TabulatedMaterial::gold()?)),
        other => Err(MaterialError::NotFound(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    #[test]
    fn test_every_listed_name_constructs() {
        for name in names() {
            let material = builtin(name).unwrap();
            assert_eq!(material.filename(), *name);
            assert!(material.wavelength_bound().is_some());
        }
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        assert!(matches!(
            builtin("unobtainium"),
            Err(MaterialError::NotFound(ref name)) if name == "unobtainium"
        ));
    }
}
