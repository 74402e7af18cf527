//! Numeric field values.
//!
//! Time-series stores distinguish floats from integers, so a field keeps
//! track of which one it is instead of collapsing everything to `f64`.

use core::fmt;

/// The value of a single point field.
///
/// With the `serde` feature the value serializes as a bare number. The
/// integer variant is declared first so that an integral JSON number
/// deserializes back into `Integer`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[cfg_attr(feature = "minicbor", derive(minicbor::Encode, minicbor::Decode))]
pub enum FieldValue {
    /// A signed integer.
    #[cfg_attr(feature = "minicbor", n(0))]
    Integer(#[cfg_attr(feature = "minicbor", n(0))] i64),

    /// A 64-bit float.
    #[cfg_attr(feature = "minicbor", n(1))]
    Float(#[cfg_attr(feature = "minicbor", n(0))] f64),
}

impl FieldValue {
    /// Truncate a float toward zero into an integer value.
    ///
    /// NaN becomes 0 and values outside the `i64` range saturate.
    pub fn truncated(value: f64) -> Self {
        FieldValue::Integer(value as i64)
    }

    /// The value as a float, widening integers.
    pub fn as_f64(&self) -> f64 {
        match *self {
            FieldValue::Integer(v) => v as f64,
            FieldValue::Float(v) => v,
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::Integer(v) => Some(v),
            FieldValue::Float(_) => None,
        }
    }

    /// Returns true for the integer variant.
    pub fn is_integer(&self) -> bool {
        matches!(self, FieldValue::Integer(_))
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Float(0.0)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_drops_fraction() {
        assert_eq!(
            FieldValue::truncated(1073741824.7),
            FieldValue::Integer(1073741824)
        );
        assert_eq!(FieldValue::truncated(-2.9), FieldValue::Integer(-2));
        assert_eq!(FieldValue::truncated(0.0), FieldValue::Integer(0));
    }

    #[test]
    fn truncated_edge_values() {
        assert_eq!(FieldValue::truncated(f64::NAN), FieldValue::Integer(0));
        assert_eq!(
            FieldValue::truncated(f64::INFINITY),
            FieldValue::Integer(i64::MAX)
        );
        assert_eq!(
            FieldValue::truncated(f64::NEG_INFINITY),
            FieldValue::Integer(i64::MIN)
        );
    }

    #[test]
    fn conversions() {
        assert_eq!(FieldValue::from(2.5), FieldValue::Float(2.5));
        assert_eq!(FieldValue::from(7i64), FieldValue::Integer(7));
        assert_eq!(FieldValue::Integer(7).as_f64(), 7.0);
        assert_eq!(FieldValue::Float(2.5).as_f64(), 2.5);
        assert_eq!(FieldValue::Integer(7).as_i64(), Some(7));
        assert_eq!(FieldValue::Float(7.0).as_i64(), None);
        assert!(FieldValue::Integer(1).is_integer());
        assert!(!FieldValue::Float(1.0).is_integer());
    }

    #[test]
    fn default_is_float_zero() {
        assert_eq!(FieldValue::default(), FieldValue::Float(0.0));
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", FieldValue::Integer(1073741824)), "1073741824");
        assert_eq!(format!("{}", FieldValue::Float(0.5)), "0.5");
        assert_eq!(format!("{}", FieldValue::Float(4.0)), "4");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_variant() {
        let json = serde_json::to_string(&FieldValue::Integer(42)).unwrap();
        assert_eq!(json, "42");
        let parsed: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FieldValue::Integer(42));

        let json = serde_json::to_string(&FieldValue::Float(0.25)).unwrap();
        assert_eq!(json, "0.25");
        let parsed: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FieldValue::Float(0.25));
    }
}
