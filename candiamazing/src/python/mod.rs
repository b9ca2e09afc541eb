//! Python bindings for candiamazing.
//!
//! This module exposes the conversions to Python via PyO3, mirroring the
//! dynamic calling convention Python users expect: every conversion accepts
//! either a float or a sequence of floats and returns the same shape.
//!
//! # Modules
//!
//! - [`functions`]: the four pure conversions (`candiamazing.utils`) and `test()`
//! - [`classes`]: `BrightnessConverter` and `DistanceConverter`
//!
//! # Errors
//!
//! Non-numeric arguments fail extraction and raise `TypeError`. Values outside
//! a conversion's domain raise `ValueError`; a failing `test()` raises
//! `AssertionError`.

pub mod classes;
pub mod functions;

use pyo3::exceptions::{PyAssertionError, PyValueError};
use pyo3::prelude::*;

use crate::error::{ConversionError, ConversionResult};

pub use classes::{PyBrightnessConverter, PyDistanceConverter};

/// A float or a sequence of floats.
#[derive(Debug, Clone, PartialEq, FromPyObject, IntoPyObject)]
pub enum Numeric {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Numeric {
    /// Apply the scalar or the array form of a conversion, keeping the shape.
    pub fn apply<S, A>(self, scalar: S, array: A) -> ConversionResult<Numeric>
    where
        S: FnOnce(f64) -> ConversionResult<f64>,
        A: FnOnce(&[f64]) -> ConversionResult<Vec<f64>>,
    {
        match self {
            Numeric::Scalar(value) => scalar(value).map(Numeric::Scalar),
            Numeric::Array(values) => array(&values).map(Numeric::Array),
        }
    }
}

impl From<ConversionError> for PyErr {
    fn from(err: ConversionError) -> PyErr {
        match err {
            ConversionError::SelfTest(msg) => PyAssertionError::new_err(msg),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Populate the top-level module: classes and `test()` at the top, the pure
/// functions in the `utils` submodule.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let utils = PyModule::new(m.py(), "utils")?;
    utils.add_function(wrap_pyfunction!(functions::flux_to_mag, &utils)?)?;
    utils.add_function(wrap_pyfunction!(functions::mag_to_flux, &utils)?)?;
    utils.add_function(wrap_pyfunction!(functions::distance_to_distance_modulus, &utils)?)?;
    utils.add_function(wrap_pyfunction!(functions::distance_modulus_to_distance, &utils)?)?;
    m.add_submodule(&utils)?;

    m.add_function(wrap_pyfunction!(functions::test, m)?)?;
    m.add_class::<PyBrightnessConverter>()?;
    m.add_class::<PyDistanceConverter>()?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__author__", "Connor Stone, Erik Osinga")?;
    Ok(())
}

/// candiamazing - flux, magnitude and distance-modulus conversions
#[pymodule]
fn candiamazing(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register(m)
}
