//! # candiamazing
//!
//! Elementary unit conversions used in observational astronomy.
//!
//! ## Features
//!
//! - **Photometry**: flux ↔ magnitude for a given zeropoint
//! - **Distances**: parsecs (or any `qtty` length) ↔ distance modulus
//! - **Arrays**: elementwise and broadcast forms sharing the scalar kernels
//! - **Converters**: small immutable objects binding a zeropoint
//! - **CLI**: the `candiamazing` binary (`flux_to_mag`, `mag_to_flux`, `self_test`)
//! - **Python**: optional PyO3 module behind the `python` feature
//!
//! ## Architecture
//!
//! - [`conversions`]: pure functions; everything else calls into these
//! - [`converters`]: [`BrightnessConverter`] and [`DistanceConverter`]
//! - [`config`]: TOML configuration for the CLI and named magnitude systems
//! - [`smoke`]: installation self test
//! - [`cli`]: clap command tree and exit-status handling
//! - [`error`]: [`ConversionError`] and [`ConversionResult`]
//!
//! ## Example
//!
//! ```
//! use candiamazing::{BrightnessConverter, DistanceConverter};
//!
//! let conv = BrightnessConverter::new(25.0)?;
//! let mags = conv.flux_to_mag_array(&[10.0, 100.0, 1000.0])?;
//! assert_eq!(mags.len(), 3);
//!
//! let mu = DistanceConverter::new().distance_to_distmod(100.0)?;
//! assert!((mu - 5.0).abs() < 1e-12);
//! # Ok::<(), candiamazing::ConversionError>(())
//! ```

pub mod cli;
pub mod config;
pub mod conversions;
pub mod converters;
pub mod error;
pub mod smoke;

#[cfg(feature = "python")]
pub mod python;

pub use config::ConverterConfig;
pub use conversions::{
    distance_modulus_to_distance, distance_to_distance_modulus, flux_to_mag, mag_to_flux,
    parse_numeric,
};
pub use converters::{BrightnessConverter, Converter, DistanceConverter};
pub use error::{ConversionError, ConversionResult};
