//! Integration test: wavelength guarding and normalization across the
//! public API.
//!
//! Exercises the advisory range check and the `ensure_units` combinator
//! the way a consumer would — through the catalog and trait objects —
//! rather than through the individual modules.

use num_complex::Complex64;

use opal_materials::{
    catalog, ensure_units, Length, LengthUnit, Material, MaterialError, RefractiveIndex,
    WavelengthArg, Wavelengths, DEFAULT_SWEEP_POINTS,
};

/// The default sweep covers a built-in material's full declared range.
#[test]
fn test_default_sweep_over_a_builtin_material() {
    let bk7 = catalog::builtin("BK7").unwrap();
    let spectrum = bk7.sample(None).unwrap();

    assert_eq!(spectrum.wavelengths.len(), DEFAULT_SWEEP_POINTS);
    assert_eq!(spectrum.index.len(), DEFAULT_SWEEP_POINTS);

    let bound = bk7.wavelength_bound().unwrap();
    assert_eq!(spectrum.wavelengths.min().unwrap(), bound.min());
    assert_eq!(spectrum.wavelengths.max().unwrap(), bound.max());

    // BK7 is transparent across its whole catalog range.
    assert!(spectrum.index.iter().all(|n| n.re > 1.4 && n.re < 1.6));
}

/// `ensure_units` works over a trait object, closing over the wrapped
/// operation.
#[test]
fn test_combinator_over_a_trait_object() {
    let water = catalog::builtin("water").unwrap();
    let mean_n = ensure_units(|m: &(dyn RefractiveIndex + '_), wl: &Wavelengths| {
        let index = m.refractive_index(wl)?;
        Ok(index.iter().map(|n| n.re).sum::<f64>() / index.len() as f64)
    });

    // Bare number: read as metres. 5e-7 m = 500 nm, where water is ~1.335.
    let n = mean_n(water.as_ref(), Some(WavelengthArg::Unitless(5.0e-7))).unwrap();
    assert!((n - 1.335).abs() < 1e-2, "n = {}", n);

    // Unit-bearing quantity: passed through with its own unit.
    let n = mean_n(
        water.as_ref(),
        Some(Length::nanometers(500.0).into()),
    )
    .unwrap();
    assert!((n - 1.335).abs() < 1e-2, "n = {}", n);

    // Omitted: the default sweep spans the bound.
    let n = mean_n(water.as_ref(), None).unwrap();
    assert!(n > 1.30 && n < 1.40, "mean n over the sweep = {}", n);
}

/// An out-of-range request warns but still returns a usable spectrum, and
/// repeating the request reports the advisory again.
#[test]
fn test_advisory_is_observational_and_unmemoised() {
    let gold = catalog::builtin("gold").unwrap();
    let out_of_range = Wavelengths::from_vec(vec![0.1, 0.6, 2.5], LengthUnit::Micrometer);

    for _ in 0..2 {
        let advisory = gold.check_wavelength(&out_of_range).expect("advisory expected");
        assert!(advisory.to_string().contains("[Material: gold]"));
        assert_eq!(advisory.supplied_min, Length::micrometers(0.1));
        assert_eq!(advisory.supplied_max, Length::micrometers(2.5));
    }

    let index = gold.refractive_index(&out_of_range).unwrap();
    assert_eq!(index.len(), 3);
}

/// Defaulting the wavelength fails fast when no bound is declared.
#[test]
fn test_missing_bound_is_a_loud_contract_violation() {
    struct Unbounded;

    impl Material for Unbounded {
        fn filename(&self) -> &str {
            "unbounded"
        }

        fn wavelength_bound(&self) -> Option<opal_materials::WavelengthBound> {
            None
        }
    }

    impl RefractiveIndex for Unbounded {
        fn refractive_index(
            &self,
            wavelengths: &Wavelengths,
        ) -> Result<ndarray::Array1<Complex64>, MaterialError> {
            Ok(ndarray::Array1::from_elem(
                wavelengths.len(),
                Complex64::new(1.0, 0.0),
            ))
        }
    }

    let unbounded = Unbounded;
    assert!(matches!(
        unbounded.sample(None),
        Err(MaterialError::MissingBound(_))
    ));

    // With an explicit wavelength the material works; it also never warns.
    let spectrum = unbounded.sample(Some(1.0e-6.into())).unwrap();
    assert_eq!(spectrum.index.len(), 1);
    assert!(unbounded
        .check_wavelength(&Wavelengths::from_vec(vec![1e9], LengthUnit::Meter))
        .is_none());
}

/// String representations through the trait.
#[test]
fn test_representations_name_the_dataset() {
    let silica = catalog::builtin("fused_silica").unwrap();
    assert_eq!(silica.informal_repr(), "Material: fused_silica");
    assert_eq!(silica.formal_repr(), silica.informal_repr());
}
