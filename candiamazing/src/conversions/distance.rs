//! Distance ↔ distance-modulus conversion.
//!
//! The distance modulus `μ = m - M` relates a distance `d` in parsecs to the
//! difference between apparent and absolute magnitude:
//!
//! ```text
//! μ = 5 · log10(d) - 5
//! d = 10^((μ + 5) / 5)
//! ```
//!
//! By construction an object at 10 pc has `μ = 0`.

use qtty::length::{LengthUnit, Parsec, Parsecs};
use qtty::Quantity;

use crate::error::{ensure_finite, ensure_positive, ConversionResult};

/// Magnitudes of distance modulus per decade of distance.
pub const DISTANCE_MODULUS_SCALE: f64 = 5.0;

/// Distance at which apparent and absolute magnitude coincide.
pub const REFERENCE_DISTANCE: Parsecs = Parsecs::new(10.0);

/// Convert a distance in parsecs to a distance modulus.
///
/// # Arguments
/// * `distance` - Distance in parsecs, must be strictly positive
///
/// # Returns
/// * `Ok(f64)` - The distance modulus in magnitudes
/// * `Err(ConversionError)` - If `distance <= 0` or not finite
///
/// # Example
/// ```
/// use candiamazing::conversions::distance_to_distance_modulus;
/// assert_eq!(distance_to_distance_modulus(10.0).unwrap(), 0.0);
/// ```
pub fn distance_to_distance_modulus(distance: f64) -> ConversionResult<f64> {
    let distance = ensure_positive("distance", distance)?;
    Ok(DISTANCE_MODULUS_SCALE * distance.log10() - DISTANCE_MODULUS_SCALE)
}

/// Convert a distance modulus to a distance in parsecs.
///
/// # Example
/// ```
/// use candiamazing::conversions::distance_modulus_to_distance;
/// let d = distance_modulus_to_distance(5.0).unwrap();
/// assert!((d - 100.0).abs() < 1e-9);
/// ```
pub fn distance_modulus_to_distance(distmod: f64) -> ConversionResult<f64> {
    let distmod = ensure_finite("distance modulus", distmod)?;
    Ok(10f64.powf((distmod + DISTANCE_MODULUS_SCALE) / DISTANCE_MODULUS_SCALE))
}

/// Elementwise [`distance_to_distance_modulus`].
pub fn distance_to_distance_modulus_array(distance: &[f64]) -> ConversionResult<Vec<f64>> {
    distance
        .iter()
        .map(|&d| distance_to_distance_modulus(d))
        .collect()
}

/// Elementwise [`distance_modulus_to_distance`].
pub fn distance_modulus_to_distance_array(distmod: &[f64]) -> ConversionResult<Vec<f64>> {
    distmod
        .iter()
        .map(|&mu| distance_modulus_to_distance(mu))
        .collect()
}

/// Distance modulus of any typed length, converted to parsecs first.
///
/// ```
/// use candiamazing::conversions::length_to_distance_modulus;
/// use qtty::length::Megaparsecs;
///
/// let mu = length_to_distance_modulus(Megaparsecs::new(1.0)).unwrap();
/// assert!((mu - 25.0).abs() < 1e-9);
/// ```
pub fn length_to_distance_modulus<U>(distance: Quantity<U>) -> ConversionResult<f64>
where
    U: LengthUnit + Copy,
{
    distance_to_distance_modulus(distance.to::<Parsec>().value())
}

/// [`distance_modulus_to_distance`] returning a typed quantity.
pub fn distance_modulus_to_parsecs(distmod: f64) -> ConversionResult<Parsecs> {
    distance_modulus_to_distance(distmod).map(Parsecs::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use qtty::length::{Kiloparsecs, Megaparsecs};

    #[test]
    fn test_known_distance_points() {
        for (distance, expected) in [(10.0, 0.0), (100.0, 5.0), (1000.0, 10.0), (1e6, 25.0)] {
            let mu = distance_to_distance_modulus(distance).unwrap();
            assert_abs_diff_eq!(mu, expected, epsilon = 1e-12);

            let back = distance_modulus_to_distance(expected).unwrap();
            assert_relative_eq!(back, distance, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_reference_distance_is_zero_modulus() {
        let mu = length_to_distance_modulus(REFERENCE_DISTANCE).unwrap();
        assert_abs_diff_eq!(mu, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_domain_errors() {
        assert!(matches!(
            distance_to_distance_modulus(0.0),
            Err(ConversionError::NonPositive { quantity: "distance", .. })
        ));
        assert!(matches!(
            distance_to_distance_modulus(-5.0),
            Err(ConversionError::NonPositive { .. })
        ));
        assert!(matches!(
            distance_modulus_to_distance(f64::INFINITY),
            Err(ConversionError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_negative_modulus_is_closer_than_ten_parsecs() {
        let d = distance_modulus_to_distance(-5.0).unwrap();
        assert_relative_eq!(d, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_array_forms() {
        let mus = distance_to_distance_modulus_array(&[10.0, 100.0, 1e6]).unwrap();
        for (mu, expected) in mus.iter().zip([0.0, 5.0, 25.0]) {
            assert_abs_diff_eq!(*mu, expected, epsilon = 1e-12);
        }
        let back = distance_modulus_to_distance_array(&mus).unwrap();
        for (d, expected) in back.iter().zip([10.0, 100.0, 1e6]) {
            assert_relative_eq!(*d, expected, max_relative = 1e-12);
        }
        assert!(distance_to_distance_modulus_array(&[10.0, -1.0]).is_err());
    }

    #[test]
    fn test_typed_lengths() {
        let mu_kpc = length_to_distance_modulus(Kiloparsecs::new(1.0)).unwrap();
        assert_abs_diff_eq!(mu_kpc, 10.0, epsilon = 1e-9);

        let mu_mpc = length_to_distance_modulus(Megaparsecs::new(1.0)).unwrap();
        assert_abs_diff_eq!(mu_mpc, 25.0, epsilon = 1e-9);

        let pc = distance_modulus_to_parsecs(25.0).unwrap();
        assert_relative_eq!(pc.to::<qtty::length::Megaparsec>().value(), 1.0, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_distance(distance in 1e-3..1e10f64) {
            let mu = distance_to_distance_modulus(distance).unwrap();
            let back = distance_modulus_to_distance(mu).unwrap();
            prop_assert!((back - distance).abs() <= 1e-12 * distance.max(1.0) * 100.0);
        }
    }
}
