//! Converter classes exposed to Python.

use pyo3::prelude::*;

use super::Numeric;
use crate::converters::{BrightnessConverter, Converter, DistanceConverter};

/// Flux ↔ magnitude conversion with a stored zeropoint.
#[pyclass(name = "BrightnessConverter", module = "candiamazing", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyBrightnessConverter {
    inner: BrightnessConverter,
}

#[pymethods]
impl PyBrightnessConverter {
    #[new]
    fn new(zeropoint: f64) -> PyResult<Self> {
        Ok(Self {
            inner: BrightnessConverter::new(zeropoint)?,
        })
    }

    #[getter]
    fn zeropoint(&self) -> f64 {
        self.inner.zeropoint()
    }

    #[getter]
    fn description(&self) -> String {
        self.inner.description().to_string()
    }

    fn flux_to_mag(&self, flux: Numeric) -> PyResult<Numeric> {
        let conv = self.inner;
        Ok(flux.apply(|f| conv.flux_to_mag(f), |v| conv.flux_to_mag_array(v))?)
    }

    fn mag_to_flux(&self, mag: Numeric) -> PyResult<Numeric> {
        let conv = self.inner;
        Ok(mag.apply(|m| conv.mag_to_flux(m), |v| conv.mag_to_flux_array(v))?)
    }

    fn __repr__(&self) -> String {
        format!("BrightnessConverter(zeropoint={:?})", self.inner.zeropoint())
    }
}

/// Distance (parsecs) ↔ distance modulus conversion.
#[pyclass(name = "DistanceConverter", module = "candiamazing", frozen)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PyDistanceConverter {
    inner: DistanceConverter,
}

#[pymethods]
impl PyDistanceConverter {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    #[getter]
    fn description(&self) -> String {
        self.inner.description().to_string()
    }

    fn distance_to_distmod(&self, distance: Numeric) -> PyResult<Numeric> {
        let conv = self.inner;
        Ok(distance.apply(
            |d| conv.distance_to_distmod(d),
            |v| conv.distance_to_distmod_array(v),
        )?)
    }

    fn distmod_to_distance(&self, distmod: Numeric) -> PyResult<Numeric> {
        let conv = self.inner;
        Ok(distmod.apply(
            |mu| conv.distmod_to_distance(mu),
            |v| conv.distmod_to_distance_array(v),
        )?)
    }

    fn __repr__(&self) -> String {
        "DistanceConverter()".to_string()
    }
}
