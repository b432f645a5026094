//! Conversion of environment variables into declared types

use std::env;

use crate::constraint::Constraint;
use crate::error::{ConfigError, ConversionError};
use crate::types::Primitive;
use crate::value::{Scalar, Value};

/// Read an environment variable, treating unset and empty alike.
///
/// An empty `env_name` reads as unset.
fn get_env_value(env_name: &str) -> Result<String, ConversionError> {
    if env_name.is_empty() {
        return Ok(String::new());
    }

    match env::var(env_name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(String::new()),
        Err(env::VarError::NotUnicode(_)) => Err(ConversionError::NotUnicode),
    }
}

fn convert(
    constraint: &Constraint,
    primitive: Primitive,
    raw: &str,
) -> Result<Value, ConversionError> {
    if !constraint.sequence {
        return Scalar::parse(primitive, raw).map(Value::Scalar);
    }

    let separator = constraint
        .separator
        .ok_or(ConversionError::MissingSeparator {
            type_name: primitive.name(),
        })?;

    let items = raw
        .split(separator)
        .enumerate()
        .map(|(index, part)| {
            Scalar::parse(primitive, part).map_err(|source| ConversionError::Element {
                index,
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::Sequence(primitive, items))
}

/// Coerce the variable named by `constraint` into its declared type.
///
/// An optional variable that is unset or empty yields the zero value of the
/// declared primitive, as a scalar even for sequence declarations.
pub fn coerce(constraint: &Constraint) -> Result<Value, ConfigError> {
    let primitive = constraint.primitive()?;

    let failed = |source: ConversionError| ConfigError::FailedTypeConversion {
        env_name: constraint.env_name.clone(),
        declared_type: primitive.name().to_string(),
        source,
    };

    let raw = get_env_value(&constraint.env_name).map_err(failed)?;
    if !constraint.required && raw.is_empty() {
        return Ok(Value::Scalar(Scalar::zero(primitive)));
    }

    convert(constraint, primitive, &raw).map_err(failed)
}
