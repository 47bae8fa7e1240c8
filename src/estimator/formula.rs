//! Circumference-based body fat equations from AR 600-9 (2019), Table B-5.
//!
//! % body fat (women) = 163.205 × log10(waist + hip − neck) − 97.684 × log10(height) − 78.387
//! % body fat (men)   =  86.010 × log10(waist − neck)       − 70.041 × log10(height) + 36.76
//!
//! All measurements are in inches. Results are rounded to two decimal places.

use super::error::EstimateError;
use super::types::Measurements;

const WOMEN_CIRCUMFERENCE_COEFF: f64 = 163.205;
const WOMEN_HEIGHT_COEFF: f64 = 97.684;
const WOMEN_CONSTANT: f64 = 78.387;

const MEN_CIRCUMFERENCE_COEFF: f64 = 86.010;
const MEN_HEIGHT_COEFF: f64 = 70.041;
const MEN_CONSTANT: f64 = 36.76;

/// Estimate body fat percentage for women.
///
/// Requires `waist + hip > neck`; otherwise the logarithm argument would not
/// be positive and `WaistPlusHipNotAboveNeck` is returned instead.
pub fn estimate_women(neck: f64, waist: f64, hip: f64, height: f64) -> Result<f64, EstimateError> {
    check_measurement("Neck", neck)?;
    check_measurement("Waist", waist)?;
    check_measurement("Hip", hip)?;
    check_measurement("Height", height)?;

    if waist + hip <= neck {
        return Err(EstimateError::WaistPlusHipNotAboveNeck);
    }

    let percentage = WOMEN_CIRCUMFERENCE_COEFF * (waist + hip - neck).log10()
        - WOMEN_HEIGHT_COEFF * height.log10()
        - WOMEN_CONSTANT;
    finish(percentage)
}

/// Estimate body fat percentage for men.
///
/// Requires `waist > neck`; otherwise `WaistNotAboveNeck` is returned.
pub fn estimate_men(neck: f64, waist: f64, height: f64) -> Result<f64, EstimateError> {
    check_measurement("Neck", neck)?;
    check_measurement("Waist", waist)?;
    check_measurement("Height", height)?;

    if waist <= neck {
        return Err(EstimateError::WaistNotAboveNeck);
    }

    let percentage = MEN_CIRCUMFERENCE_COEFF * (waist - neck).log10()
        - MEN_HEIGHT_COEFF * height.log10()
        + MEN_CONSTANT;
    finish(percentage)
}

/// Run the equation matching the measurement set.
pub fn estimate(measurements: &Measurements) -> Result<f64, EstimateError> {
    match *measurements {
        Measurements::Man { neck, waist, height } => estimate_men(neck, waist, height),
        Measurements::Woman { neck, waist, hip, height } => {
            estimate_women(neck, waist, hip, height)
        }
    }
}

fn check_measurement(field: &'static str, value: f64) -> Result<(), EstimateError> {
    // NaN compares false against zero, so finiteness goes first
    if !value.is_finite() {
        return Err(EstimateError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(EstimateError::NonPositive { field });
    }
    Ok(())
}

/// Finite field values can still sum past `f64::MAX` (e.g. waist + hip).
fn finish(percentage: f64) -> Result<f64, EstimateError> {
    if !percentage.is_finite() {
        return Err(EstimateError::OutOfRange);
    }
    Ok(round_to_hundredths(percentage))
}

/// Round half away from zero at the second decimal place.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_women_sample() {
        // 163.205*log10(65) - 97.684*log10(64) - 78.387 = 41.0546...
        assert_eq!(estimate_women(15.0, 40.0, 40.0, 64.0), Ok(41.05));
    }

    #[test]
    fn test_men_sample() {
        // 86.010*log10(25) - 70.041*log10(69) + 36.76 = 28.2019...
        assert_eq!(estimate_men(15.0, 40.0, 69.0), Ok(28.2));
    }

    #[test]
    fn test_larger_measurements() {
        assert_eq!(estimate_women(15.0, 42.0, 44.0, 64.0), Ok(47.31));
        assert_eq!(estimate_men(16.0, 49.0, 69.0), Ok(38.57));
    }

    #[test]
    fn test_rounding_half_up_at_hundredths() {
        // 27.2556... rounds up, 17.5130... rounds down
        assert_eq!(estimate_women(14.0, 30.0, 38.0, 65.0), Ok(27.26));
        assert_eq!(estimate_men(14.5, 33.5, 70.0), Ok(17.51));
    }

    #[test]
    fn test_men_waist_below_neck() {
        assert_eq!(
            estimate_men(70.5, 43.5, 69.0),
            Err(EstimateError::WaistNotAboveNeck)
        );
    }

    #[test]
    fn test_women_waist_plus_hip_below_neck() {
        assert_eq!(
            estimate_women(50.0, 10.0, 10.0, 64.0),
            Err(EstimateError::WaistPlusHipNotAboveNeck)
        );
    }

    #[test]
    fn test_boundary_equal_is_rejected() {
        assert_eq!(
            estimate_men(15.0, 15.0, 69.0),
            Err(EstimateError::WaistNotAboveNeck)
        );
        assert_eq!(
            estimate_women(50.0, 25.0, 25.0, 64.0),
            Err(EstimateError::WaistPlusHipNotAboveNeck)
        );
    }

    #[test]
    fn test_non_positive_height() {
        assert_eq!(
            estimate_men(15.0, 40.0, 0.0),
            Err(EstimateError::NonPositive { field: "Height" })
        );
        assert_eq!(
            estimate_women(15.0, 40.0, 40.0, -64.0),
            Err(EstimateError::NonPositive { field: "Height" })
        );
    }

    #[test]
    fn test_non_positive_circumference_checked_before_ordering() {
        // hip of zero would also break the ordering check, field error wins
        assert_eq!(
            estimate_women(50.0, 10.0, 0.0, 64.0),
            Err(EstimateError::NonPositive { field: "Hip" })
        );
        assert_eq!(
            estimate_men(-1.0, 40.0, 69.0),
            Err(EstimateError::NonPositive { field: "Neck" })
        );
    }

    #[test]
    fn test_non_finite_measurements() {
        assert_eq!(
            estimate_men(f64::NAN, 40.0, 69.0),
            Err(EstimateError::NotFinite { field: "Neck" })
        );
        assert_eq!(
            estimate_women(15.0, f64::INFINITY, 40.0, 64.0),
            Err(EstimateError::NotFinite { field: "Waist" })
        );
    }

    #[test]
    fn test_overflowing_sum_is_rejected() {
        assert_eq!(
            estimate_women(1.0, 1e308, 1e308, 64.0),
            Err(EstimateError::OutOfRange)
        );
        assert_eq!(
            estimate(&Measurements::Woman { neck: 1.0, waist: f64::MAX, hip: f64::MAX, height: 64.0 }),
            Err(EstimateError::OutOfRange)
        );
    }

    #[test]
    fn test_huge_but_representable_inputs_stay_finite() {
        let value = estimate_men(1.0, 1e308, 64.0).unwrap();
        assert!(value.is_finite());
        let value = estimate_women(1.0, 1e300, 1e300, 1e-300).unwrap();
        assert!(value.is_finite());
    }

    #[test]
    fn test_valid_inputs_give_finite_results() {
        for neck in [10.0, 14.5, 18.0, 22.0] {
            for extra in [0.01, 1.0, 12.5, 40.0] {
                for height in [48.0, 64.0, 80.0] {
                    let men = estimate_men(neck, neck + extra, height).unwrap();
                    assert!(men.is_finite());

                    let women = estimate_women(neck, (neck + extra) / 2.0, (neck + extra) / 2.0, height)
                        .unwrap();
                    assert!(women.is_finite());
                }
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = estimate_women(13.25, 31.0, 39.5, 66.0);
        let second = estimate_women(13.25, 31.0, 39.5, 66.0);
        assert_eq!(first, second);

        let first = estimate_men(16.5, 36.25, 71.0);
        let second = estimate_men(16.5, 36.25, 71.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_estimate_dispatches_by_variant() {
        let woman = Measurements::Woman { neck: 15.0, waist: 40.0, hip: 40.0, height: 64.0 };
        let man = Measurements::Man { neck: 15.0, waist: 40.0, height: 69.0 };
        assert_eq!(estimate(&woman), Ok(41.05));
        assert_eq!(estimate(&man), Ok(28.2));
    }

    #[test]
    fn test_results_have_two_decimals_at_most() {
        let value = estimate_women(13.25, 31.0, 39.5, 66.0).unwrap();
        assert_eq!(value, (value * 100.0).round() / 100.0);
    }
}
