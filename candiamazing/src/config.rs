//! Configuration file support.
//!
//! This module reads converter settings from TOML:
//!
//! ```toml
//! [output]
//! precision = 4
//!
//! [logging]
//! level = "info"
//!
//! [systems.sdss]
//! zeropoint = 22.5
//! description = "SDSS nanomaggies"
//! ```
//!
//! Every section is optional. The `ab` system (zeropoint 8.9, flux in Jansky)
//! is always available unless a file redefines it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::conversions::photometry::AB_ZEROPOINT_JY;
use crate::converters::BrightnessConverter;
use crate::error::{ConversionError, ConversionResult};

/// Converter configuration from file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default = "default_systems")]
    pub systems: BTreeMap<String, MagnitudeSystem>,
}

/// How the CLI prints results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Fixed number of decimals; shortest round-trip form when absent.
    #[serde(default)]
    pub precision: Option<usize>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// A named magnitude system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeSystem {
    pub zeropoint: f64,
    #[serde(default)]
    pub description: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_systems() -> BTreeMap<String, MagnitudeSystem> {
    let mut systems = BTreeMap::new();
    systems.insert(
        "ab".to_string(),
        MagnitudeSystem {
            zeropoint: AB_ZEROPOINT_JY,
            description: "AB magnitudes, flux in Jansky".to_string(),
        },
    );
    systems
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output: OutputSettings::default(),
            logging: LoggingSettings::default(),
            systems: default_systems(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ConverterConfig)` if successful
    /// * `Err(ConversionError::Configuration)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConversionResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConversionError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        content.parse()
    }

    /// Look up a magnitude system by name (case-insensitive).
    pub fn system(&self, name: &str) -> ConversionResult<&MagnitudeSystem> {
        let key = name.to_ascii_lowercase();
        self.systems.get(&key).ok_or_else(|| {
            let known: Vec<&str> = self.systems.keys().map(String::as_str).collect();
            ConversionError::Configuration(format!(
                "Unknown magnitude system '{}' (known: {})",
                name,
                known.join(", ")
            ))
        })
    }

    /// Build a [`BrightnessConverter`] for a named magnitude system.
    pub fn brightness_converter(&self, name: &str) -> ConversionResult<BrightnessConverter> {
        BrightnessConverter::new(self.system(name)?.zeropoint)
    }

    /// Render a value according to [`OutputSettings`].
    pub fn format_value(&self, value: f64) -> String {
        match self.output.precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => shortest_with_point(value),
        }
    }

    fn validate(self) -> ConversionResult<Self> {
        for (name, system) in &self.systems {
            if !system.zeropoint.is_finite() {
                return Err(ConversionError::Configuration(format!(
                    "Magnitude system '{}' has a non-finite zeropoint",
                    name
                )));
            }
            if name.to_ascii_lowercase() != *name {
                return Err(ConversionError::Configuration(format!(
                    "Magnitude system name '{}' must be lowercase",
                    name
                )));
            }
        }
        Ok(self)
    }
}

/// Shortest round-trip form of `value` that always has a decimal point
/// for finite values: `20.0`, `0.001`, `1.0e20`, `1.0e-40`.
fn shortest_with_point(value: f64) -> String {
    // Debug keeps ".0" on integral values but prints exponents as "1e20".
    let repr = format!("{:?}", value);
    match repr.find('e') {
        Some(exp) if !repr[..exp].contains('.') => {
            format!("{}.0{}", &repr[..exp], &repr[exp..])
        }
        _ => repr,
    }
}

impl FromStr for ConverterConfig {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ConverterConfig = toml::from_str(s).map_err(|e| {
            ConversionError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()
    }
}
