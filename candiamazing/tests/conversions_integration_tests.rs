//! Integration tests for the public conversion API.
//!
//! These tests ensure that:
//! 1. Known photometric and distance values are reproduced
//! 2. Scalar and array calling conventions agree
//! 3. Converters delegate to the pure functions with their stored zeropoint
//! 4. Invalid input is rejected with a typed error

use approx::{assert_abs_diff_eq, assert_relative_eq};
use candiamazing::conversions::{
    distance_modulus_to_distance, distance_to_distance_modulus, flux_to_mag, flux_to_mag_array,
    mag_to_flux, mag_to_flux_array, parse_numeric,
};
use candiamazing::{
    BrightnessConverter, ConversionError, Converter, ConverterConfig, DistanceConverter,
};
use qtty::length::{Kiloparsecs, Megaparsecs};

// ==================== Helper Functions ====================

fn standard_converter() -> BrightnessConverter {
    BrightnessConverter::new(25.0).expect("finite zeropoint")
}

// ==================== Pure Functions ====================

#[test]
fn test_flux_mag_round_trip_across_zeropoints() {
    let fluxes = [1.0, 10.0, 3631.0];
    for zeropoint in [8.9, 25.0, 30.0] {
        for &flux in &fluxes {
            let mag = flux_to_mag(flux, zeropoint).unwrap();
            let back = mag_to_flux(mag, zeropoint).unwrap();
            assert!((flux - back).abs() < 1e-10, "round trip failed for {flux} @ {zeropoint}");
            assert_relative_eq!(mag, zeropoint - 2.5 * flux.log10(), max_relative = 1e-12);
        }

        let mags = flux_to_mag_array(&fluxes, zeropoint).unwrap();
        let back = mag_to_flux_array(&mags, zeropoint).unwrap();
        for (flux, got) in fluxes.iter().zip(&back) {
            assert!((flux - got).abs() < 1e-10);
        }
    }
}

#[test]
fn test_distance_modulus_pairs() {
    for (distmod, distance) in [(0.0, 10.0), (5.0, 100.0), (10.0, 1000.0)] {
        assert_relative_eq!(
            distance_modulus_to_distance(distmod).unwrap(),
            distance,
            max_relative = 1e-12
        );
        assert_abs_diff_eq!(
            distance_to_distance_modulus(distance).unwrap(),
            distmod,
            epsilon = 1e-12
        );
    }
}

// ==================== Converters ====================

#[test]
fn test_flux_to_mag_simple() {
    assert_abs_diff_eq!(standard_converter().flux_to_mag(100.0).unwrap(), 20.0, epsilon = 1e-12);
}

#[test]
fn test_mag_to_flux_simple() {
    assert_abs_diff_eq!(standard_converter().mag_to_flux(20.0).unwrap(), 100.0, epsilon = 1e-9);
}

#[test]
fn test_distance_modulus_values() {
    let dist_tool = DistanceConverter::new();
    for (distance_pc, expected) in [(10.0, 0.0), (100.0, 5.0), (1e6, 25.0)] {
        let calculated = dist_tool.distance_to_distmod(distance_pc).unwrap();
        assert_abs_diff_eq!(calculated, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_array_handling() {
    let calculated = standard_converter()
        .flux_to_mag_array(&[10.0, 100.0, 1000.0])
        .unwrap();
    let expected = [22.5, 20.0, 17.5];
    assert_eq!(calculated.len(), expected.len());
    for (got, want) in calculated.iter().zip(expected) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
    }
}

#[test]
fn test_typed_distances_through_converter() {
    let dist_tool = DistanceConverter::new();
    assert_abs_diff_eq!(
        dist_tool.length_to_distmod(Kiloparsecs::new(10.0)).unwrap(),
        15.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        dist_tool.length_to_distmod(Megaparsecs::new(1.0)).unwrap(),
        25.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_converter_descriptions() {
    assert_eq!(standard_converter().description(), "Brightness Converter");
    assert_eq!(DistanceConverter::new().description(), "Distance Converter");
}

#[test]
fn test_converter_from_config_system() {
    let config: ConverterConfig = "[systems.nanomaggy]\nzeropoint = 22.5".parse().unwrap();
    let conv = config.brightness_converter("nanomaggy").unwrap();
    assert_abs_diff_eq!(conv.flux_to_mag(1.0).unwrap(), 22.5, epsilon = 1e-12);
}

// ==================== Invalid Input ====================

#[test]
fn test_invalid_input_raises_error() {
    let conv = standard_converter();
    let result = parse_numeric("flux", "not_a_number").and_then(|f| conv.flux_to_mag(f));
    let err = result.unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, ConversionError::NotNumeric { .. }));
}

#[test]
fn test_non_positive_inputs_are_rejected() {
    let conv = standard_converter();
    assert!(conv.flux_to_mag(0.0).unwrap_err().is_invalid_input());
    assert!(conv.flux_to_mag(-100.0).unwrap_err().is_invalid_input());
    assert!(DistanceConverter::new()
        .distance_to_distmod(0.0)
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn test_converters_shared_across_threads() {
    let conv = standard_converter();
    let handles: Vec<_> = (1..=4)
        .map(|i| {
            std::thread::spawn(move || conv.flux_to_mag(10f64.powi(i)).unwrap())
        })
        .collect();
    let mags: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, mag) in mags.iter().enumerate() {
        assert_abs_diff_eq!(*mag, 25.0 - 2.5 * (i as f64 + 1.0), epsilon = 1e-12);
    }
}
