//! Installation sanity check.
//!
//! [`self_test`] runs a handful of conversions with known answers. It needs
//! no test harness, so end users can call it from the CLI (`candiamazing
//! self_test`) or from Python (`candiamazing.test()`) after installing.

use crate::conversions::{flux_to_mag, mag_to_flux};
use crate::converters::DistanceConverter;
use crate::error::{ConversionError, ConversionResult};

const ROUND_TRIP_TOLERANCE: f64 = 1e-10;

fn close(a: f64, b: f64) -> bool {
    // Same acceptance rule as NumPy's allclose defaults.
    (a - b).abs() <= 1e-8 + 1e-5 * b.abs()
}

fn check(ok: bool, message: impl FnOnce() -> String) -> ConversionResult<()> {
    if ok {
        Ok(())
    } else {
        Err(ConversionError::SelfTest(message()))
    }
}

/// Run the built-in checks.
///
/// # Returns
/// * `Ok(())` if every check passes
/// * `Err(ConversionError::SelfTest)` describing the first failing check
pub fn self_test() -> ConversionResult<()> {
    for flux in [1.0, 10.0, 100.0] {
        for zeropoint in [0.0, 10.0, 21.4] {
            let mag = flux_to_mag(flux, zeropoint)?;
            let flux_back = mag_to_flux(mag, zeropoint)?;

            check((flux - flux_back).abs() < ROUND_TRIP_TOLERANCE, || {
                format!(
                    "Round trip flux -> mag -> flux failed for flux={flux}, zeropoint={zeropoint}"
                )
            })?;
            check(close(mag, zeropoint - 2.5 * flux.log10()), || {
                format!("flux_to_mag calculation incorrect for flux={flux}, zeropoint={zeropoint}")
            })?;
            check(close(flux, 10f64.powf((zeropoint - mag) / 2.5)), || {
                format!("mag_to_flux calculation incorrect for mag={mag}, zeropoint={zeropoint}")
            })?;
        }
    }

    let dist_tool = DistanceConverter::new();
    for (distance, expected) in [(10.0, 0.0), (100.0, 5.0), (1e6, 25.0)] {
        let distmod = dist_tool.distance_to_distmod(distance)?;
        check(close(distmod, expected), || {
            format!("distance {distance} pc gave distance modulus {distmod}, expected {expected}")
        })?;
    }

    log::debug!("self test passed");
    Ok(())
}
