//! Typed value decoding and the rational display convention.

use super::tiff::{Endian, TYPE_ASCII, TYPE_BYTE, TYPE_LONG, TYPE_RATIONAL, TYPE_SHORT};
use std::fmt;

/// A decoded EXIF field value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    Byte(u8),
    Bytes(Vec<u8>),
    Ascii(String),
    Short(u16),
    Shorts(Vec<u16>),
    Long(u32),
    /// Numerator, denominator.
    Rational(u32, u32),
}

/// Decode one value at an absolute `offset` per the field type table.
/// Returns `None` for unrecognized type codes and on any out-of-bounds read.
pub fn read_value(
    data: &[u8],
    offset: usize,
    field_type: u16,
    count: u32,
    bo: Endian,
) -> Option<Value> {
    let count = count as usize;
    match field_type {
        TYPE_BYTE => {
            if count == 1 {
                data.get(offset).copied().map(Value::Byte)
            } else {
                let end = offset.checked_add(count)?;
                (end <= data.len()).then(|| Value::Bytes(data[offset..end].to_vec()))
            }
        }
        TYPE_ASCII => {
            // count includes the null terminator, which is excluded here.
            let len = count.saturating_sub(1);
            let end = offset.checked_add(len)?;
            (end <= data.len())
                .then(|| Value::Ascii(String::from_utf8_lossy(&data[offset..end]).into_owned()))
        }
        TYPE_SHORT => {
            if count == 1 {
                bo.read_u16(data, offset).map(Value::Short)
            } else {
                // Bounds-check against the declared count before allocating;
                // the count is attacker-controlled.
                let end = offset.checked_add(count.checked_mul(2)?)?;
                if end > data.len() {
                    return None;
                }
                let mut values = Vec::with_capacity(count);
                for i in 0..count {
                    values.push(bo.read_u16(data, offset + i * 2)?);
                }
                Some(Value::Shorts(values))
            }
        }
        TYPE_LONG => bo.read_u32(data, offset).map(Value::Long),
        TYPE_RATIONAL => Some(Value::Rational(
            bo.read_u32(data, offset)?,
            bo.read_u32(data, offset.checked_add(4)?)?,
        )),
        _ => None,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Byte(b) => write!(f, "{}", b),
            Value::Bytes(b) => write!(f, "{:?}", b),
            Value::Ascii(s) => f.write_str(s),
            Value::Short(v) => write!(f, "{}", v),
            Value::Shorts(v) => write!(f, "{:?}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Rational(n, d) => write!(f, "{}/{}", n, d),
        }
    }
}

/// Display form of a rational: sub-unit values stay literal fractions
/// (shutter speeds like 1/200), values at or above 1 become a quotient
/// rounded to two decimals (apertures like 2.8).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum RationalDisplay {
    Fraction(u32, u32),
    Decimal(f64),
}

impl fmt::Display for RationalDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalDisplay::Fraction(n, d) => write!(f, "{}/{}", n, d),
            RationalDisplay::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// Render a rational pair for display. Zero numerator or denominator yields
/// nothing to show.
pub fn render_rational(numerator: u32, denominator: u32) -> Option<RationalDisplay> {
    if numerator == 0 || denominator == 0 {
        return None;
    }
    if numerator < denominator {
        Some(RationalDisplay::Fraction(numerator, denominator))
    } else {
        let quotient = numerator as f64 / denominator as f64;
        Some(RationalDisplay::Decimal((quotient * 100.0).round() / 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_unit_rational_renders_as_fraction() {
        let r = render_rational(1, 2).unwrap();
        assert_eq!(r, RationalDisplay::Fraction(1, 2));
        assert_eq!(r.to_string(), "1/2");
    }

    #[test]
    fn rational_at_or_above_one_renders_as_decimal() {
        assert_eq!(render_rational(3, 2), Some(RationalDisplay::Decimal(1.5)));
        assert_eq!(render_rational(5, 1), Some(RationalDisplay::Decimal(5.0)));
        assert_eq!(render_rational(7, 3), Some(RationalDisplay::Decimal(2.33)));
        assert_eq!(render_rational(5, 1).unwrap().to_string(), "5");
    }

    #[test]
    fn zero_rational_renders_nothing() {
        assert_eq!(render_rational(0, 10), None);
        assert_eq!(render_rational(10, 0), None);
    }

    #[test]
    fn ascii_excludes_null_terminator() {
        let data = b"ACME\0";
        let v = read_value(data, 0, TYPE_ASCII, 5, Endian::Little).unwrap();
        assert_eq!(v, Value::Ascii("ACME".to_string()));
    }

    #[test]
    fn short_sequence_reads_per_byte_order() {
        let data = [0x01, 0x00, 0x02, 0x00];
        let v = read_value(&data, 0, TYPE_SHORT, 2, Endian::Little).unwrap();
        assert_eq!(v, Value::Shorts(vec![1, 2]));
        let v = read_value(&data, 0, TYPE_SHORT, 2, Endian::Big).unwrap();
        assert_eq!(v, Value::Shorts(vec![256, 512]));
    }

    #[test]
    fn unknown_type_yields_none() {
        assert_eq!(read_value(&[0u8; 8], 0, 7, 1, Endian::Little), None);
    }

    #[test]
    fn truncated_rational_yields_none() {
        assert_eq!(read_value(&[0u8; 6], 0, TYPE_RATIONAL, 1, Endian::Little), None);
    }

    #[test]
    fn huge_short_count_is_rejected_without_allocating() {
        // A declared count far beyond the buffer must fail the bounds check
        // up front, not reserve count * 2 bytes first.
        assert_eq!(
            read_value(&[0u8; 8], 0, TYPE_SHORT, u32::MAX, Endian::Little),
            None
        );
        assert_eq!(
            read_value(&[0u8; 8], 0, TYPE_SHORT, 5, Endian::Little),
            None
        );
    }
}
