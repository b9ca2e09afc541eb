//! Converter objects binding conversion parameters.
//!
//! [`BrightnessConverter`] holds a zeropoint so callers working in one
//! magnitude system don't repeat it on every call; [`DistanceConverter`]
//! carries no parameters and exists for symmetry. Both are immutable after
//! construction and delegate to [`crate::conversions`].

use core::fmt;

use qtty::length::LengthUnit;
use qtty::Quantity;

use crate::conversions::{distance, photometry};
use crate::error::{ensure_finite, ConversionResult};

/// Shared capability of converters: a human-readable description.
pub trait Converter {
    fn description(&self) -> &str;
}

/// Flux ↔ magnitude conversion in a fixed magnitude system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessConverter {
    zeropoint: f64,
}

impl BrightnessConverter {
    /// Bind a zeropoint.
    ///
    /// # Returns
    /// * `Err(ConversionError::NotFinite)` if `zeropoint` is NaN or infinite
    pub fn new(zeropoint: f64) -> ConversionResult<Self> {
        let zeropoint = ensure_finite("zeropoint", zeropoint)?;
        Ok(Self { zeropoint })
    }

    /// Converter for AB magnitudes with flux in Jansky.
    pub fn ab_jansky() -> Self {
        Self {
            zeropoint: photometry::AB_ZEROPOINT_JY,
        }
    }

    pub fn zeropoint(&self) -> f64 {
        self.zeropoint
    }

    /// See [`photometry::flux_to_mag`].
    pub fn flux_to_mag(&self, flux: f64) -> ConversionResult<f64> {
        photometry::flux_to_mag(flux, self.zeropoint)
    }

    /// See [`photometry::mag_to_flux`].
    pub fn mag_to_flux(&self, mag: f64) -> ConversionResult<f64> {
        photometry::mag_to_flux(mag, self.zeropoint)
    }

    pub fn flux_to_mag_array(&self, flux: &[f64]) -> ConversionResult<Vec<f64>> {
        photometry::flux_to_mag_array(flux, self.zeropoint)
    }

    pub fn mag_to_flux_array(&self, mag: &[f64]) -> ConversionResult<Vec<f64>> {
        photometry::mag_to_flux_array(mag, self.zeropoint)
    }
}

impl Converter for BrightnessConverter {
    fn description(&self) -> &str {
        "Brightness Converter"
    }
}

impl fmt::Display for BrightnessConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (zeropoint {})", self.description(), self.zeropoint)
    }
}

/// Distance (parsecs) ↔ distance modulus conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceConverter;

impl DistanceConverter {
    pub fn new() -> Self {
        Self
    }

    /// See [`distance::distance_to_distance_modulus`].
    pub fn distance_to_distmod(&self, distance: f64) -> ConversionResult<f64> {
        distance::distance_to_distance_modulus(distance)
    }

    /// See [`distance::distance_modulus_to_distance`].
    pub fn distmod_to_distance(&self, distmod: f64) -> ConversionResult<f64> {
        distance::distance_modulus_to_distance(distmod)
    }

    pub fn distance_to_distmod_array(&self, distance: &[f64]) -> ConversionResult<Vec<f64>> {
        distance::distance_to_distance_modulus_array(distance)
    }

    pub fn distmod_to_distance_array(&self, distmod: &[f64]) -> ConversionResult<Vec<f64>> {
        distance::distance_modulus_to_distance_array(distmod)
    }

    /// Distance modulus of a typed length in any unit.
    pub fn length_to_distmod<U>(&self, distance: Quantity<U>) -> ConversionResult<f64>
    where
        U: LengthUnit + Copy,
    {
        distance::length_to_distance_modulus(distance)
    }
}

impl Converter for DistanceConverter {
    fn description(&self) -> &str {
        "Distance Converter"
    }
}

impl fmt::Display for DistanceConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
