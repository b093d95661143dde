//! Damage value reconstruction from (mantissa, magnitude code) pairs.
//!
//! The source encodes each damage figure as a mantissa plus a one-letter
//! order-of-magnitude suffix. Only `K`, `M` and `B` carry a multiplier.
//! Absent and unrecognized codes decode to zero rather than 1x, and rows
//! carrying the literal `"0"` code are removed before decoding by
//! [`has_disallowed_code`].

use serde::Serialize;

/// The literal magnitude code treated as a data-entry error.
pub const DISALLOWED_CODE: &str = "0";

/// Order-of-magnitude suffix attached to a damage mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MagnitudeCode {
    Thousand,
    Million,
    Billion,
    /// Empty or missing code.
    Absent,
    /// Any other code: digits, `+`, `-`, `?`, `h`, ...
    Unrecognized,
}

impl MagnitudeCode {
    /// Parses a raw code, ignoring case and surrounding whitespace.
    pub fn parse(code: Option<&str>) -> Self {
        let Some(code) = code.map(str::trim) else {
            return MagnitudeCode::Absent;
        };

        match code {
            "" => MagnitudeCode::Absent,
            "k" | "K" => MagnitudeCode::Thousand,
            "m" | "M" => MagnitudeCode::Million,
            "b" | "B" => MagnitudeCode::Billion,
            _ => MagnitudeCode::Unrecognized,
        }
    }

    /// Multiplier for recognized codes, `None` otherwise.
    pub fn multiplier(self) -> Option<f64> {
        match self {
            MagnitudeCode::Thousand => Some(1e3),
            MagnitudeCode::Million => Some(1e6),
            MagnitudeCode::Billion => Some(1e9),
            MagnitudeCode::Absent | MagnitudeCode::Unrecognized => None,
        }
    }
}

/// Decodes a damage amount in currency units.
///
/// Returns zero when the mantissa is absent or the code carries no
/// multiplier. Negative and non-finite mantissas count as zero.
pub fn decode(mantissa: Option<f64>, code: MagnitudeCode) -> f64 {
    match (mantissa, code.multiplier()) {
        (Some(m), Some(mult)) if m.is_finite() && m > 0.0 => m * mult,
        _ => 0.0,
    }
}

/// Whether a raw code is the disallowed literal, ignoring surrounding whitespace.
pub fn is_disallowed(code: Option<&str>) -> bool {
    code.map(str::trim) == Some(DISALLOWED_CODE)
}

/// Whether either damage column of a row carries the disallowed code.
///
/// Such rows are dropped from the dataset before any decoding happens.
pub fn has_disallowed_code(prop_code: Option<&str>, crop_code: Option<&str>) -> bool {
    is_disallowed(prop_code) || is_disallowed(crop_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_raw(mantissa: Option<f64>, code: &str) -> f64 {
        decode(mantissa, MagnitudeCode::parse(Some(code)))
    }

    #[test]
    fn test_decode_recognized_codes() {
        assert_eq!(decode_raw(Some(5.0), "K"), 5_000.0);
        assert_eq!(decode_raw(Some(2.5), "M"), 2_500_000.0);
        assert_eq!(decode_raw(Some(1.0), "B"), 1_000_000_000.0);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(MagnitudeCode::parse(Some("k")), MagnitudeCode::Thousand);
        assert_eq!(MagnitudeCode::parse(Some("m")), MagnitudeCode::Million);
        assert_eq!(MagnitudeCode::parse(Some("b")), MagnitudeCode::Billion);
        assert_eq!(MagnitudeCode::parse(Some(" K ")), MagnitudeCode::Thousand);
    }

    #[test]
    fn test_absent_mantissa_is_zero() {
        assert_eq!(decode_raw(None, "K"), 0.0);
    }

    #[test]
    fn test_absent_code() {
        assert_eq!(MagnitudeCode::parse(None), MagnitudeCode::Absent);
        assert_eq!(MagnitudeCode::parse(Some("")), MagnitudeCode::Absent);
        assert_eq!(decode(Some(10.0), MagnitudeCode::Absent), 0.0);
    }

    #[test]
    fn test_unrecognized_codes_never_multiply_by_one() {
        for code in ["1", "5", "h", "H", "+", "-", "?"] {
            assert_eq!(MagnitudeCode::parse(Some(code)), MagnitudeCode::Unrecognized);
            assert_eq!(decode_raw(Some(3.0), code), 0.0, "code {code:?}");
        }
    }

    #[test]
    fn test_non_finite_mantissa_is_zero() {
        assert_eq!(decode_raw(Some(f64::INFINITY), "K"), 0.0);
        assert_eq!(decode_raw(Some(f64::NEG_INFINITY), "M"), 0.0);
        assert_eq!(decode_raw(Some(f64::NAN), "B"), 0.0);
        assert_eq!(decode_raw(Some(-4.0), "K"), 0.0);
    }

    #[test]
    fn test_padded_disallowed_code() {
        assert!(is_disallowed(Some(" 0")));
        assert!(is_disallowed(Some("0 ")));
        assert!(has_disallowed_code(Some("K"), Some(" 0 ")));
    }

    #[test]
    fn test_disallowed_code_detection() {
        assert!(has_disallowed_code(Some("0"), Some("K")));
        assert!(has_disallowed_code(None, Some("0")));
        assert!(!has_disallowed_code(Some("K"), None));
        assert!(!has_disallowed_code(Some("00"), Some("")));
    }
}
