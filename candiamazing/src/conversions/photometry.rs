//! Flux ↔ magnitude conversion.
//!
//! The magnitude scale is anchored by a photometric zeropoint:
//!
//! ```text
//! m = -2.5 · log10(F) + zp
//! F = 10^((zp - m) / 2.5)
//! ```
//!
//! A tenfold increase in flux makes an object 2.5 magnitudes brighter (smaller).

use super::broadcast::broadcast_with;
use crate::error::{ensure_finite, ensure_positive, ConversionResult};

/// Magnitudes per decade of flux (Pogson's ratio expressed in log10).
pub const MAGNITUDES_PER_DEX: f64 = 2.5;

/// AB zeropoint for fluxes expressed in Jansky (3631 Jy ↦ 0 mag).
pub const AB_ZEROPOINT_JY: f64 = 8.9;

/// Convert a flux to a magnitude with the given zeropoint.
///
/// # Arguments
/// * `flux` - Linear brightness, must be strictly positive
/// * `zeropoint` - Magnitude system anchor
///
/// # Returns
/// * `Ok(f64)` - The magnitude
/// * `Err(ConversionError)` - If `flux <= 0` or either argument is not finite
///
/// # Example
/// ```
/// use candiamazing::conversions::flux_to_mag;
/// let mag = flux_to_mag(100.0, 25.0).unwrap();
/// assert_eq!(mag, 20.0);
/// ```
pub fn flux_to_mag(flux: f64, zeropoint: f64) -> ConversionResult<f64> {
    let flux = ensure_positive("flux", flux)?;
    let zeropoint = ensure_finite("zeropoint", zeropoint)?;
    Ok(-MAGNITUDES_PER_DEX * flux.log10() + zeropoint)
}

/// Convert a magnitude to a flux with the given zeropoint.
///
/// Defined for every finite magnitude and zeropoint. Magnitudes far brighter
/// than the zeropoint can overflow to `+inf`, which is returned as-is.
///
/// # Example
/// ```
/// use candiamazing::conversions::mag_to_flux;
/// let flux = mag_to_flux(20.0, 25.0).unwrap();
/// assert_eq!(flux, 100.0);
/// ```
pub fn mag_to_flux(mag: f64, zeropoint: f64) -> ConversionResult<f64> {
    let mag = ensure_finite("magnitude", mag)?;
    let zeropoint = ensure_finite("zeropoint", zeropoint)?;
    Ok(10f64.powf((zeropoint - mag) / MAGNITUDES_PER_DEX))
}

/// Elementwise [`flux_to_mag`] over a slice with a shared zeropoint.
pub fn flux_to_mag_array(flux: &[f64], zeropoint: f64) -> ConversionResult<Vec<f64>> {
    flux_to_mag_broadcast(flux, &[zeropoint])
}

/// Elementwise [`mag_to_flux`] over a slice with a shared zeropoint.
pub fn mag_to_flux_array(mag: &[f64], zeropoint: f64) -> ConversionResult<Vec<f64>> {
    mag_to_flux_broadcast(mag, &[zeropoint])
}

/// [`flux_to_mag`] with fluxes and zeropoints broadcast against each other.
///
/// ```
/// use candiamazing::conversions::flux_to_mag_broadcast;
/// let mags = flux_to_mag_broadcast(&[100.0], &[25.0, 30.0]).unwrap();
/// assert_eq!(mags, vec![20.0, 25.0]);
/// ```
pub fn flux_to_mag_broadcast(flux: &[f64], zeropoint: &[f64]) -> ConversionResult<Vec<f64>> {
    broadcast_with(flux, zeropoint, flux_to_mag)
}

/// [`mag_to_flux`] with magnitudes and zeropoints broadcast against each other.
pub fn mag_to_flux_broadcast(mag: &[f64], zeropoint: &[f64]) -> ConversionResult<Vec<f64>> {
    broadcast_with(mag, zeropoint, mag_to_flux)
}
