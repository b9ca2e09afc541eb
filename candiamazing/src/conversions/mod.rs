//! Pure conversion functions.
//!
//! Every function here depends only on its arguments. The scalar forms are
//! the kernels; array and broadcast forms apply the same kernel elementwise,
//! so both calling conventions agree bit for bit.
//!
//! - [`photometry`]: flux ↔ magnitude with a zeropoint
//! - [`distance`]: distance in parsecs ↔ distance modulus
//! - [`broadcast`]: pairing rules for two slice operands

pub mod broadcast;
pub mod distance;
pub mod photometry;

pub use distance::{
    distance_modulus_to_distance, distance_modulus_to_distance_array,
    distance_modulus_to_parsecs, distance_to_distance_modulus,
    distance_to_distance_modulus_array, length_to_distance_modulus,
};
pub use photometry::{
    flux_to_mag, flux_to_mag_array, flux_to_mag_broadcast, mag_to_flux, mag_to_flux_array,
    mag_to_flux_broadcast,
};

use crate::error::{ConversionError, ConversionResult};

/// Parse textual input as a number before it reaches a conversion.
///
/// Surrounding whitespace is ignored. Anything else that is not a
/// floating-point literal yields [`ConversionError::NotNumeric`] naming the
/// quantity it was meant to be.
///
/// ```
/// use candiamazing::conversions::parse_numeric;
/// assert_eq!(parse_numeric("flux", " 3631 ").unwrap(), 3631.0);
/// assert!(parse_numeric("flux", "not_a_number").is_err());
/// ```
pub fn parse_numeric(quantity: &'static str, input: &str) -> ConversionResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ConversionError::NotNumeric {
            quantity,
            input: input.to_string(),
        })
}
