//! Wavelength argument normalization.
//!
//! Callers reach wavelength-consuming operations holding one of three
//! things: nothing at all (meaning "sweep the material's whole range"), a
//! bare number or array (implicitly in metres), or a proper unit-bearing
//! [`Wavelengths`]. [`WavelengthArg`] makes those three cases explicit and
//! [`ensure_units`] turns any operation over `Wavelengths` into one that
//! accepts `Option<WavelengthArg>`, so the operation body only ever sees a
//! unit-correct quantity.

use opal_core::{Length, LengthUnit, Wavelengths};

use crate::material::{Material, MaterialError};

/// Number of samples in the default sweep over a material's bound.
pub const DEFAULT_SWEEP_POINTS: usize = 100;

/// A wavelength argument before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum WavelengthArg {
    /// A bare number, interpreted as metres.
    Unitless(f64),
    /// A bare numeric array, interpreted as metres.
    UnitlessArray(Vec<f64>),
    /// An already unit-bearing quantity, passed through unchanged.
    Quantity(Wavelengths),
}

impl From<f64> for WavelengthArg {
    fn from(value: f64) -> Self {
        WavelengthArg::Unitless(value)
    }
}

impl From<Vec<f64>> for WavelengthArg {
    fn from(values: Vec<f64>) -> Self {
        WavelengthArg::UnitlessArray(values)
    }
}

impl From<Length> for WavelengthArg {
    fn from(length: Length) -> Self {
        WavelengthArg::Quantity(Wavelengths::from(length))
    }
}

impl From<Wavelengths> for WavelengthArg {
    fn from(wavelengths: Wavelengths) -> Self {
        WavelengthArg::Quantity(wavelengths)
    }
}

/// Normalize a wavelength argument to a canonical [`Wavelengths`] value.
///
/// - `None` — build the default sweep: [`DEFAULT_SWEEP_POINTS`] evenly
///   spaced samples spanning the material's declared bound, inclusive of
///   both ends and tagged with the bound's unit. Requires the bound to be
///   declared; an unset bound is [`MaterialError::MissingBound`].
/// - `Unitless`/`UnitlessArray` — the raw numbers are read as metres.
/// - `Quantity` — passed through unchanged, original unit preserved.
pub fn resolve<M>(material: &M, arg: Option<WavelengthArg>) -> Result<Wavelengths, MaterialError>
where
    M: Material + ?Sized,
{
    match arg {
        None => {
            let bound = material
                .wavelength_bound()
                .ok_or_else(|| MaterialError::MissingBound(material.filename().to_owned()))?;
            let unit = bound.unit();
            Ok(Wavelengths::linspace(
                bound.min().magnitude(),
                bound.max().to(unit).magnitude(),
                DEFAULT_SWEEP_POINTS,
                unit,
            ))
        }
        Some(WavelengthArg::Unitless(value)) => {
            Ok(Wavelengths::from_vec(vec![value], LengthUnit::Meter))
        }
        Some(WavelengthArg::UnitlessArray(values)) => {
            Ok(Wavelengths::from_vec(values, LengthUnit::Meter))
        }
        Some(WavelengthArg::Quantity(wavelengths)) => Ok(wavelengths),
    }
}

/// Wrap a wavelength-consuming operation so its wavelength parameter
/// becomes optional.
///
/// The wrapped operation has the same shape as `op` except that it takes
/// `Option<WavelengthArg>`; the argument is normalized with [`resolve`]
/// before `op` runs, and `op`'s result is returned unchanged. The wrapper
/// itself introduces no failure beyond the [`resolve`] precondition that a
/// defaulted wavelength needs a declared bound.
pub fn ensure_units<M, R, F>(op: F) -> impl Fn(&M, Option<WavelengthArg>) -> Result<R, MaterialError>
where
    M: Material + ?Sized,
    F: Fn(&M, &Wavelengths) -> Result<R, MaterialError>,
{
    move |material, arg| {
        let wavelengths = resolve(material, arg)?;
        op(material, &wavelengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::WavelengthBound;
    use approx::assert_relative_eq;

    struct Probe {
        bound: Option<WavelengthBound>,
    }

    impl Material for Probe {
        fn filename(&self) -> &str {
            "probe"
        }

        fn wavelength_bound(&self) -> Option<WavelengthBound> {
            self.bound
        }
    }

    fn bounded() -> Probe {
        Probe {
            bound: Some(
                WavelengthBound::new(Length::micrometers(0.5), Length::micrometers(2.0)).unwrap(),
            ),
        }
    }

    #[test]
    fn test_default_sweep_spans_the_bound() {
        let wl = resolve(&bounded(), None).unwrap();
        assert_eq!(wl.len(), DEFAULT_SWEEP_POINTS);
        assert_eq!(wl.unit(), LengthUnit::Micrometer);
        assert_relative_eq!(wl.magnitudes()[0], 0.5);
        assert_relative_eq!(wl.magnitudes()[DEFAULT_SWEEP_POINTS - 1], 2.0);
    }

    #[test]
    fn test_default_sweep_without_bound_fails_fast() {
        let result = resolve(&Probe { bound: None }, None);
        assert!(matches!(result, Err(MaterialError::MissingBound(ref name)) if name == "probe"));
    }

    #[test]
    fn test_bare_number_is_read_as_metres() {
        let wl = resolve(&bounded(), Some(1.55.into())).unwrap();
        assert_eq!(wl.len(), 1);
        assert_eq!(wl.unit(), LengthUnit::Meter);
        assert_eq!(wl.get(0), Length::meters(1.55));
    }

    #[test]
    fn test_bare_array_is_read_as_metres() {
        let wl = resolve(&bounded(), Some(vec![1.0e-6, 2.0e-6].into())).unwrap();
        assert_eq!(wl.len(), 2);
        assert_eq!(wl.unit(), LengthUnit::Meter);
    }

    #[test]
    fn test_quantity_passes_through_with_its_unit() {
        let arg = WavelengthArg::from(Length::nanometers(1550.0));
        let wl = resolve(&bounded(), Some(arg)).unwrap();
        assert_eq!(wl.unit(), LengthUnit::Nanometer);
        assert_eq!(wl.get(0), Length::nanometers(1550.0));
    }

    #[test]
    fn test_wrapped_operation_receives_normalized_input() {
        let op = ensure_units(|_probe: &Probe, wl: &Wavelengths| Ok(wl.clone()));

        // Omitted argument: the default sweep reaches the operation.
        let seen = op(&bounded(), None).unwrap();
        assert_eq!(seen.len(), DEFAULT_SWEEP_POINTS);

        // Bare number: metres reach the operation.
        let seen = op(&bounded(), Some(1.55.into())).unwrap();
        assert_eq!(seen.get(0), Length::meters(1.55));
    }

    #[test]
    fn test_wrapper_returns_the_operation_result_unchanged() {
        let op = ensure_units(|_probe: &Probe, wl: &Wavelengths| Ok(wl.len()));
        assert_eq!(op(&bounded(), Some(vec![1.0, 2.0, 3.0].into())).unwrap(), 3);
    }

    #[test]
    fn test_mixed_unit_bound_sweeps_in_the_min_unit() {
        let probe = Probe {
            bound: Some(
                WavelengthBound::new(Length::nanometers(500.0), Length::micrometers(2.0)).unwrap(),
            ),
        };
        let wl = resolve(&probe, None).unwrap();
        assert_eq!(wl.unit(), LengthUnit::Nanometer);
        assert_relative_eq!(wl.magnitudes()[0], 500.0);
        assert_relative_eq!(wl.magnitudes()[DEFAULT_SWEEP_POINTS - 1], 2000.0);
    }
}
