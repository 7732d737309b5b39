//! Number canonicalization.
//!
//! Floats are truncated (toward zero, never rounded) to a configured number
//! of decimal digits before hashing, and integral floats keep a trailing
//! `.0` marker so float-typed `1.0` never collides with integer-typed `1`.
//! Integers pass through verbatim.

use serde_json::Number;

use crate::config::NumberConfig;
use crate::error::TreeHashError;

/// Truncate a float to `digits` decimal digits, toward zero.
///
/// NaN and infinities fail with `InvalidNumber`.
pub fn truncate_float(value: f64, digits: u32) -> Result<f64, TreeHashError> {
    if !value.is_finite() {
        return Err(TreeHashError::InvalidNumber {
            reason: format!("not a finite number: {value}"),
        });
    }
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        // Scaling overflows f64 for very large magnitudes; such values have
        // no representable fractional digits left to truncate.
        return Ok(value);
    }
    Ok(scaled.trunc() / scale)
}

/// Canonical text of a float after truncation.
///
/// Integral results keep a `.0` suffix; everything else uses the shortest
/// round-trip decimal form.
pub fn float_text(value: f64, digits: u32) -> Result<String, TreeHashError> {
    let truncated = truncate_float(value, digits)?;
    if truncated.fract() == 0.0 {
        Ok(format!("{truncated:.1}"))
    } else {
        Ok(truncated.to_string())
    }
}

/// Canonical text of any JSON number.
pub fn number_text(number: &Number, digits: u32) -> Result<String, TreeHashError> {
    if number.is_f64() {
        float_text(number.as_f64().unwrap_or(f64::NAN), digits)
    } else {
        Ok(number.to_string())
    }
}

/// Range/precision audit, gated on `throw_on_range_error`.
///
/// Rejects floats outside `[min_num, max_num]` and floats whose deviation
/// from the nearest multiple of `precision` exceeds machine epsilon scaled
/// to the value's magnitude.
pub fn audit_float(value: f64, config: &NumberConfig) -> Result<(), TreeHashError> {
    if !config.throw_on_range_error {
        return Ok(());
    }
    if value < config.min_num || value > config.max_num {
        return Err(TreeHashError::InvalidNumber {
            reason: format!(
                "{value} outside the range [{}, {}]",
                config.min_num, config.max_num
            ),
        });
    }
    let steps = (value / config.precision).round();
    let deviation = (value - steps * config.precision).abs();
    if deviation > f64::EPSILON * value.abs().max(1.0) {
        return Err(TreeHashError::InvalidNumber {
            reason: format!(
                "{value} is not a multiple of the configured precision {}",
                config.precision
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(truncate_float(3.14159, 2).unwrap(), 3.14);
        assert_eq!(truncate_float(-3.14159, 2).unwrap(), -3.14);
        assert_eq!(truncate_float(1.0000000001, 5).unwrap(), 1.0);
    }

    #[test]
    fn truncation_is_not_rounding() {
        assert_eq!(truncate_float(0.999, 2).unwrap(), 0.99);
        assert_eq!(truncate_float(-0.999, 2).unwrap(), -0.99);
    }

    #[test]
    fn non_finite_rejected() {
        assert!(truncate_float(f64::NAN, 10).is_err());
        assert!(truncate_float(f64::INFINITY, 10).is_err());
        assert!(truncate_float(f64::NEG_INFINITY, 10).is_err());
    }

    #[test]
    fn huge_magnitudes_pass_through() {
        assert_eq!(truncate_float(1e300, 10).unwrap(), 1e300);
    }

    #[test]
    fn integral_floats_keep_point_zero() {
        assert_eq!(float_text(1.0, 10).unwrap(), "1.0");
        assert_eq!(float_text(1.0000000001, 5).unwrap(), "1.0");
        assert_eq!(float_text(-2.0, 10).unwrap(), "-2.0");
    }

    #[test]
    fn fractional_floats_use_shortest_form() {
        assert_eq!(float_text(1.5, 10).unwrap(), "1.5");
        assert_eq!(float_text(0.125, 10).unwrap(), "0.125");
        assert_eq!(float_text(3.14159, 2).unwrap(), "3.14");
    }

    #[test]
    fn integers_pass_through() {
        assert_eq!(number_text(&Number::from(1), 10).unwrap(), "1");
        assert_eq!(number_text(&Number::from(-42), 10).unwrap(), "-42");
        assert_eq!(
            number_text(&Number::from(u64::MAX), 10).unwrap(),
            u64::MAX.to_string()
        );
    }

    #[test]
    fn float_numbers_are_truncated() {
        let n = Number::from_f64(1.0).unwrap();
        assert_eq!(number_text(&n, 10).unwrap(), "1.0");
    }

    #[test]
    fn audit_disabled_accepts_everything() {
        let config = NumberConfig::default();
        assert!(audit_float(1e12, &config).is_ok());
        assert!(audit_float(0.0005, &config).is_ok());
    }

    #[test]
    fn audit_rejects_out_of_range() {
        let config = NumberConfig {
            throw_on_range_error: true,
            ..NumberConfig::default()
        };
        assert!(audit_float(1e12, &config).is_err());
        assert!(audit_float(-1e12, &config).is_err());
        assert!(audit_float(12345.0, &config).is_ok());
    }

    #[test]
    fn audit_rejects_off_grid_values() {
        let config = NumberConfig {
            throw_on_range_error: true,
            ..NumberConfig::default()
        };
        // 1.5 and 0.125 sit on the 0.001 grid; 1.0005 does not.
        assert!(audit_float(1.5, &config).is_ok());
        assert!(audit_float(0.125, &config).is_ok());
        assert!(audit_float(1.0005, &config).is_err());
    }
}
