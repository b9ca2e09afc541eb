//! Pure conversion functions exposed to Python.

use pyo3::prelude::*;

use super::Numeric;
use crate::conversions::{self, photometry};
use crate::smoke;

/// Convert flux to magnitude using the given zeropoint.
#[pyfunction]
pub fn flux_to_mag(flux: Numeric, zeropoint: f64) -> PyResult<Numeric> {
    Ok(flux.apply(
        |f| photometry::flux_to_mag(f, zeropoint),
        |v| photometry::flux_to_mag_array(v, zeropoint),
    )?)
}

/// Convert magnitude to flux using the given zeropoint.
#[pyfunction]
pub fn mag_to_flux(mag: Numeric, zeropoint: f64) -> PyResult<Numeric> {
    Ok(mag.apply(
        |m| photometry::mag_to_flux(m, zeropoint),
        |v| photometry::mag_to_flux_array(v, zeropoint),
    )?)
}

/// Convert distance in parsecs to distance modulus.
#[pyfunction]
pub fn distance_to_distance_modulus(distance: Numeric) -> PyResult<Numeric> {
    Ok(distance.apply(
        conversions::distance_to_distance_modulus,
        conversions::distance_to_distance_modulus_array,
    )?)
}

/// Convert distance modulus to distance in parsecs.
#[pyfunction]
pub fn distance_modulus_to_distance(distmod: Numeric) -> PyResult<Numeric> {
    Ok(distmod.apply(
        conversions::distance_modulus_to_distance,
        conversions::distance_modulus_to_distance_array,
    )?)
}

/// Quick basic tests to make sure the package was installed correctly.
#[pyfunction]
pub fn test() -> PyResult<()> {
    smoke::self_test()?;
    println!("All tests passed!");
    Ok(())
}
