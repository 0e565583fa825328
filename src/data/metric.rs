use thiserror::Error;

use super::model::NOT_APPLICABLE;

// ---------------------------------------------------------------------------
// Magnitude strings: "150MB", "2.5TB", "45.2K", "N/A"
// ---------------------------------------------------------------------------

/// Storage sizes are normalised to megabytes.
const MB_PER_GB: f64 = 1024.0;
const MB_PER_TB: f64 = 1024.0 * 1024.0;

/// Record counts use decimal multipliers.
const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Errors reported by [`try_parse_metric`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("empty magnitude string")]
    Empty,
    #[error("magnitude is not applicable (N/A)")]
    NotApplicable,
    #[error("'{0}' does not start with a number")]
    NotANumber(String),
}

/// Multiplier for the unit suffix of `raw`.
///
/// Order matters: `"MB"` has to be tested before `"M"`, otherwise every
/// megabyte value would be read as millions.
fn unit_multiplier(raw: &str) -> f64 {
    if raw.ends_with("TB") {
        MB_PER_TB
    } else if raw.ends_with("GB") {
        MB_PER_GB
    } else if raw.ends_with("MB") {
        1.0
    } else if raw.ends_with('M') {
        MILLION
    } else if raw.ends_with('K') {
        THOUSAND
    } else {
        1.0
    }
}

/// Parse a human-formatted magnitude into a comparable number.
///
/// `"N/A"` yields `0`. A string without a leading number yields `NaN`;
/// nothing here ever fails.
pub fn parse_metric(raw: &str) -> f64 {
    if raw == NOT_APPLICABLE {
        return 0.0;
    }
    leading_float(raw) * unit_multiplier(raw)
}

/// Like [`parse_metric`], but reports why a value could not be read.
pub fn try_parse_metric(raw: &str) -> Result<f64, MetricError> {
    if raw.trim().is_empty() {
        return Err(MetricError::Empty);
    }
    if raw == NOT_APPLICABLE {
        return Err(MetricError::NotApplicable);
    }
    let num = leading_float(raw);
    if num.is_nan() {
        return Err(MetricError::NotANumber(raw.to_string()));
    }
    Ok(num * unit_multiplier(raw))
}

/// Numeric value of a trend string such as `"+5.2%"` (the `%` is ignored).
pub fn parse_trend(raw: &str) -> f64 {
    leading_float(raw)
}

/// Parse as much of a leading decimal number as possible.
///
/// Leading whitespace is skipped, then an optional sign, digits with an
/// optional fraction and an optional exponent. Trailing garbage is ignored.
/// Returns `NaN` when no digits are found.
pub fn leading_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_suffixes_normalise_to_megabytes() {
        assert_eq!(parse_metric("150MB"), 150.0);
        assert_eq!(parse_metric("3GB"), 3.0 * 1024.0);
        assert_eq!(parse_metric("2.5TB"), 2.5 * 1024.0 * 1024.0);
    }

    #[test]
    fn count_suffixes_use_decimal_multipliers() {
        assert_eq!(parse_metric("45.2K"), 45200.0);
        assert_eq!(parse_metric("1.1M"), 1_100_000.0);
        assert_eq!(parse_metric("850"), 850.0);
    }

    #[test]
    fn megabytes_are_not_millions() {
        assert_eq!(parse_metric("25MB"), 25.0);
        assert_eq!(parse_metric("25M"), 25_000_000.0);
    }

    #[test]
    fn not_applicable_is_zero() {
        assert_eq!(parse_metric("N/A"), 0.0);
    }

    #[test]
    fn unrecognised_suffix_keeps_the_bare_number() {
        // "+" after the unit hides the suffix.
        assert_eq!(parse_metric("68.3K+"), 68.3);
        assert_eq!(parse_metric("120+"), 120.0);
    }

    #[test]
    fn garbage_degrades_to_nan() {
        assert!(parse_metric("lots").is_nan());
        assert!(parse_metric("").is_nan());
        assert!(parse_metric("GB").is_nan());
    }

    #[test]
    fn try_parse_reports_failures() {
        assert_eq!(try_parse_metric("2GB"), Ok(2048.0));
        assert_eq!(try_parse_metric("  "), Err(MetricError::Empty));
        assert_eq!(try_parse_metric("N/A"), Err(MetricError::NotApplicable));
        assert_eq!(
            try_parse_metric("many"),
            Err(MetricError::NotANumber("many".to_string()))
        );
    }

    #[test]
    fn leading_float_follows_parse_float_rules() {
        assert_eq!(leading_float("+12.5%"), 12.5);
        assert_eq!(leading_float("-2.4%"), -2.4);
        assert_eq!(leading_float("  7"), 7.0);
        assert_eq!(leading_float(".5x"), 0.5);
        assert_eq!(leading_float("5."), 5.0);
        assert_eq!(leading_float("1e3K"), 1000.0);
        assert_eq!(leading_float("2e"), 2.0);
        assert_eq!(leading_float("-Infinity"), f64::NEG_INFINITY);
        assert!(leading_float("N/A").is_nan());
        assert!(leading_float("+").is_nan());
        assert!(leading_float(".").is_nan());
    }

    #[test]
    fn trend_ignores_percent_sign() {
        assert_eq!(parse_trend("+18.3%"), 18.3);
        assert_eq!(parse_trend("0.0%"), 0.0);
        assert!(parse_trend("N/A").is_nan());
    }
}
