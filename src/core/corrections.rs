use crate::domain::model::{CorrectionResult, RunwayInput};
use crate::utils::error::{AnalysisError, Result};

/// FC above this value flags the advisory "combined altitude+temperature
/// factor exceeds safe threshold" condition.
pub const COMBINED_FACTOR_ADVISORY: f64 = 1.35;

/// Sea-level reference temperature (°C) for the temperature correction.
pub const REFERENCE_TEMPERATURE_C: f64 = 14.991;

/// Temperature lapse rate (°C per meter of altitude).
pub const LAPSE_RATE_C_PER_M: f64 = 0.0065;

/// Compute the correction factors and the corrected runway length (LCR).
///
/// Pure and deterministic: no I/O, no side effects. The caller is expected
/// to have validated the input ranges; the only failure mode is a degenerate
/// combined divisor (`FC * FP` zero or non-finite), which would otherwise
/// propagate infinities into the result.
pub fn correct_runway_length(input: &RunwayInput) -> Result<CorrectionResult> {
    let fh = 1.0 + (0.07 * input.altitude_m / 300.0);
    let reference = REFERENCE_TEMPERATURE_C - LAPSE_RATE_C_PER_M * input.altitude_m;
    let ft = 1.0 + 0.01 * (input.temperature_c - reference);
    let fc = fh * ft;
    let fp = 1.0 + 0.1 * input.slope_percent;

    let divisor = fc * fp;
    if divisor == 0.0 || !divisor.is_finite() {
        return Err(AnalysisError::InvalidParameters {
            message: format!(
                "degenerate correction divisor FC*FP = {} (FC = {}, FP = {})",
                divisor, fc, fp
            ),
        });
    }

    Ok(CorrectionResult {
        fh,
        ft,
        fc,
        fp,
        lcr_m: input.runway_length_m / divisor,
        advisory: fc > COMBINED_FACTOR_ADVISORY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(runway: f64, altitude: f64, temperature: f64, slope: f64) -> RunwayInput {
        RunwayInput {
            runway_length_m: runway,
            altitude_m: altitude,
            temperature_c: temperature,
            slope_percent: slope,
        }
    }

    #[test]
    fn test_reference_airport_example() {
        // Tuxtla Gutiérrez defaults from the original analysis form.
        let result = correct_runway_length(&input(3102.0, 73.0, 30.0, 0.65)).unwrap();

        assert!((result.fh - 1.017033).abs() < 1e-5);
        assert!((result.ft - 1.154835).abs() < 1e-5);
        assert!((result.fp - 1.065).abs() < 1e-9);
        assert!((result.lcr_m - 2479.92).abs() < 0.01);
        assert!(!result.advisory);
    }

    #[test]
    fn test_combined_factor_is_exact_product() {
        let result = correct_runway_length(&input(3102.0, 73.0, 30.0, 0.65)).unwrap();
        assert!((result.fc - result.fh * result.ft).abs() < 1e-9);

        let result = correct_runway_length(&input(1500.0, 2400.0, 42.0, -3.2)).unwrap();
        assert!((result.fc - result.fh * result.ft).abs() < 1e-9);
    }

    #[test]
    fn test_lcr_identity() {
        let result = correct_runway_length(&input(4200.0, 1850.0, 25.0, 1.5)).unwrap();
        assert!((result.lcr_m - 4200.0 / (result.fc * result.fp)).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_input_leaves_runway_unchanged() {
        let result = correct_runway_length(&input(3000.0, 0.0, 14.991, 0.0)).unwrap();

        assert_eq!(result.fh, 1.0);
        assert_eq!(result.ft, 1.0);
        assert_eq!(result.fc, 1.0);
        assert_eq!(result.fp, 1.0);
        assert_eq!(result.lcr_m, 3000.0);
        assert!(!result.advisory);
    }

    #[test]
    fn test_zero_divisor_is_an_error() {
        // Slope of -10% makes FP exactly zero.
        let result = correct_runway_length(&input(3000.0, 0.0, 14.991, -10.0));
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_advisory_flag_above_threshold() {
        // High airport on a hot day pushes FC well past 1.35.
        let result = correct_runway_length(&input(3102.0, 2200.0, 35.0, 0.0)).unwrap();
        assert!(result.fc > COMBINED_FACTOR_ADVISORY);
        assert!(result.advisory);
    }

    #[test]
    fn test_no_advisory_just_below_threshold() {
        let result = correct_runway_length(&input(3000.0, 0.0, 14.991 + 34.9, 0.0)).unwrap();
        assert!((result.fc - 1.349).abs() < 1e-9);
        assert!(!result.advisory);
    }
}
