//! Coerced values

use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;
use crate::types::Primitive;

/// A single converted value, one variant per [`Primitive`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Bool(bool),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Uintptr(usize),
    Float32(f32),
    Float64(f64),
    Rune(char),
    Byte(u8),
}

/// Result of coercing one environment variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Primitive, Vec<Scalar>),
}

fn parse_number<T>(raw: &str) -> Result<T, ConversionError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    raw.parse::<T>().map_err(|source| ConversionError::ParseInt {
        value: raw.to_string(),
        source,
    })
}

fn parse_float<T>(raw: &str) -> Result<T, ConversionError>
where
    T: FromStr<Err = std::num::ParseFloatError>,
{
    raw.parse::<T>().map_err(|source| ConversionError::ParseFloat {
        value: raw.to_string(),
        source,
    })
}

fn parse_bool(raw: &str) -> Result<bool, ConversionError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConversionError::ParseBool {
            value: raw.to_string(),
        }),
    }
}

fn rune_byte_error(raw: &str, primitive: Primitive) -> ConversionError {
    ConversionError::RuneByte {
        value: raw.to_string(),
        type_name: primitive.name(),
    }
}

impl Scalar {
    /// Zero value of `primitive`.
    pub fn zero(primitive: Primitive) -> Self {
        match primitive {
            Primitive::String => Scalar::String(String::new()),
            Primitive::Bool => Scalar::Bool(false),
            Primitive::Int => Scalar::Int(0),
            Primitive::Int8 => Scalar::Int8(0),
            Primitive::Int16 => Scalar::Int16(0),
            Primitive::Int32 => Scalar::Int32(0),
            Primitive::Int64 => Scalar::Int64(0),
            Primitive::Uint => Scalar::Uint(0),
            Primitive::Uint8 => Scalar::Uint8(0),
            Primitive::Uint16 => Scalar::Uint16(0),
            Primitive::Uint32 => Scalar::Uint32(0),
            Primitive::Uint64 => Scalar::Uint64(0),
            Primitive::Uintptr => Scalar::Uintptr(0),
            Primitive::Float32 => Scalar::Float32(0.0),
            Primitive::Float64 => Scalar::Float64(0.0),
            Primitive::Rune => Scalar::Rune('\0'),
            Primitive::Byte => Scalar::Byte(0),
        }
    }

    /// Convert `raw` using the textual representation of `primitive`.
    pub fn parse(primitive: Primitive, raw: &str) -> Result<Self, ConversionError> {
        let scalar = match primitive {
            Primitive::String => Scalar::String(raw.to_string()),
            Primitive::Bool => Scalar::Bool(parse_bool(raw)?),
            Primitive::Int => Scalar::Int(parse_number(raw)?),
            Primitive::Int8 => Scalar::Int8(parse_number(raw)?),
            Primitive::Int16 => Scalar::Int16(parse_number(raw)?),
            Primitive::Int32 => Scalar::Int32(parse_number(raw)?),
            Primitive::Int64 => Scalar::Int64(parse_number(raw)?),
            Primitive::Uint => Scalar::Uint(parse_number(raw)?),
            Primitive::Uint8 => Scalar::Uint8(parse_number(raw)?),
            Primitive::Uint16 => Scalar::Uint16(parse_number(raw)?),
            Primitive::Uint32 => Scalar::Uint32(parse_number(raw)?),
            Primitive::Uint64 => Scalar::Uint64(parse_number(raw)?),
            Primitive::Uintptr => Scalar::Uintptr(parse_number(raw)?),
            Primitive::Float32 => Scalar::Float32(parse_float(raw)?),
            Primitive::Float64 => Scalar::Float64(parse_float(raw)?),
            Primitive::Rune => {
                let code = raw
                    .parse::<u32>()
                    .map_err(|_| rune_byte_error(raw, primitive))?;
                Scalar::Rune(char::from_u32(code).ok_or_else(|| rune_byte_error(raw, primitive))?)
            }
            Primitive::Byte => Scalar::Byte(
                raw.parse::<u8>()
                    .map_err(|_| rune_byte_error(raw, primitive))?,
            ),
        };
        Ok(scalar)
    }

    pub fn primitive(&self) -> Primitive {
        match self {
            Scalar::String(_) => Primitive::String,
            Scalar::Bool(_) => Primitive::Bool,
            Scalar::Int(_) => Primitive::Int,
            Scalar::Int8(_) => Primitive::Int8,
            Scalar::Int16(_) => Primitive::Int16,
            Scalar::Int32(_) => Primitive::Int32,
            Scalar::Int64(_) => Primitive::Int64,
            Scalar::Uint(_) => Primitive::Uint,
            Scalar::Uint8(_) => Primitive::Uint8,
            Scalar::Uint16(_) => Primitive::Uint16,
            Scalar::Uint32(_) => Primitive::Uint32,
            Scalar::Uint64(_) => Primitive::Uint64,
            Scalar::Uintptr(_) => Primitive::Uintptr,
            Scalar::Float32(_) => Primitive::Float32,
            Scalar::Float64(_) => Primitive::Float64,
            Scalar::Rune(_) => Primitive::Rune,
            Scalar::Byte(_) => Primitive::Byte,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Scalar::zero(self.primitive())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(v) => f.write_str(v),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Int8(v) => write!(f, "{v}"),
            Scalar::Int16(v) => write!(f, "{v}"),
            Scalar::Int32(v) => write!(f, "{v}"),
            Scalar::Int64(v) => write!(f, "{v}"),
            Scalar::Uint(v) | Scalar::Uintptr(v) => write!(f, "{v}"),
            Scalar::Uint8(v) | Scalar::Byte(v) => write!(f, "{v}"),
            Scalar::Uint16(v) => write!(f, "{v}"),
            Scalar::Uint32(v) => write!(f, "{v}"),
            Scalar::Uint64(v) => write!(f, "{v}"),
            Scalar::Float32(v) => write!(f, "{v}"),
            Scalar::Float64(v) => write!(f, "{v}"),
            Scalar::Rune(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_tokens() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(Scalar::parse(Primitive::Bool, raw).unwrap(), Scalar::Bool(true));
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(Scalar::parse(Primitive::Bool, raw).unwrap(), Scalar::Bool(false));
        }
        assert!(matches!(
            Scalar::parse(Primitive::Bool, "yes"),
            Err(ConversionError::ParseBool { .. })
        ));
    }

    #[test]
    fn test_integers_are_width_bounded() {
        assert_eq!(Scalar::parse(Primitive::Int8, "-128").unwrap(), Scalar::Int8(-128));
        assert!(matches!(
            Scalar::parse(Primitive::Int8, "128"),
            Err(ConversionError::ParseInt { .. })
        ));
        assert!(matches!(
            Scalar::parse(Primitive::Uint16, "-1"),
            Err(ConversionError::ParseInt { .. })
        ));
        assert_eq!(
            Scalar::parse(Primitive::Uint64, "18446744073709551615").unwrap(),
            Scalar::Uint64(u64::MAX)
        );
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(Scalar::parse(Primitive::Float64, "2.5").unwrap(), Scalar::Float64(2.5));
        assert_eq!(Scalar::parse(Primitive::Float32, "-1").unwrap(), Scalar::Float32(-1.0));
        assert!(matches!(
            Scalar::parse(Primitive::Float32, "one"),
            Err(ConversionError::ParseFloat { .. })
        ));
    }

    #[test]
    fn test_rune_is_a_code_point() {
        assert_eq!(Scalar::parse(Primitive::Rune, "65").unwrap(), Scalar::Rune('A'));
        // surrogate range is not a valid scalar value
        assert!(matches!(
            Scalar::parse(Primitive::Rune, "55296"),
            Err(ConversionError::RuneByte { type_name: "rune", .. })
        ));
        assert!(matches!(
            Scalar::parse(Primitive::Rune, "notRune"),
            Err(ConversionError::RuneByte { .. })
        ));
    }

    #[test]
    fn test_byte_range() {
        assert_eq!(Scalar::parse(Primitive::Byte, "255").unwrap(), Scalar::Byte(255));
        assert!(matches!(
            Scalar::parse(Primitive::Byte, "256"),
            Err(ConversionError::RuneByte { type_name: "byte", .. })
        ));
    }

    #[test]
    fn test_zero_values() {
        for primitive in Primitive::ALL {
            let zero = Scalar::zero(primitive);
            assert_eq!(zero.primitive(), primitive);
            assert!(zero.is_zero());
        }
        assert!(!Scalar::Int(1).is_zero());
    }

    #[test]
    fn test_display_is_textual_value() {
        assert_eq!(Scalar::String(String::new()).to_string(), "");
        assert_eq!(Scalar::Int64(0).to_string(), "0");
        assert_eq!(Scalar::Rune('x').to_string(), "x");
    }
}
