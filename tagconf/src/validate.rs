//! Record validation: tokenize, parse, coerce and bind every field

use crate::coerce::coerce;
use crate::constraint::Constraint;
use crate::error::ConfigError;
use crate::field::Field;
use crate::lexer::tokenize;
use crate::value::Value;

/// A record that can be populated from annotated environment variables.
///
/// Usually implemented with `#[derive(Config)]`, which lists every named
/// field in declaration order together with its `#[conf("...")]`
/// annotation.
pub trait Config {
    /// Field table of this record, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Populate and validate `self`. See [`validate_config`].
    fn validate(self) -> Result<Self, ConfigError>
    where
        Self: Sized,
    {
        validate_config(self)
    }

    /// Validate a `Default` record from the environment.
    ///
    /// # Errors
    ///
    /// - An annotation is malformed or does not match its field type
    /// - A field has no `env=` binding
    /// - A variable cannot be converted to the declared type
    /// - A `required` field is empty
    fn from_env() -> anyhow::Result<Self>
    where
        Self: Default + Sized,
    {
        Ok(validate_config(Self::default())?)
    }
}

/// A field together with the tokens of its annotation.
#[derive(Debug)]
pub struct FieldDescriptor<'a> {
    pub field: Field<'a>,
    pub tokens: Vec<String>,
}

impl<'a> FieldDescriptor<'a> {
    pub fn new(field: Field<'a>) -> Self {
        let tokens = tokenize(field.annotation());
        Self { field, tokens }
    }
}

/// Write `value` into the descriptor's field and check its constraints.
///
/// Steps run in a fixed order: type match, assignment, `env=` presence,
/// `required` non-emptiness.
pub fn bind(
    value: Value,
    descriptor: &mut FieldDescriptor<'_>,
    constraint: &Constraint,
) -> Result<(), ConfigError> {
    let name = descriptor.field.name();
    let slot = descriptor.field.slot();
    let field_type = slot.field_type();

    let mismatch = || ConfigError::FieldTypeMismatch {
        field: name.to_string(),
        actual: field_type.to_string(),
        declared: constraint.declared_type(),
    };

    let primitive = constraint.primitive()?;
    if !field_type.matches(primitive, constraint.sequence) {
        return Err(mismatch());
    }

    if !slot.assign(value) {
        return Err(mismatch());
    }

    if constraint.env_name.is_empty() {
        return Err(ConfigError::EnvConstraintUndefined {
            field: name.to_string(),
        });
    }

    if constraint.required && slot.text().is_empty() {
        return Err(ConfigError::FieldRequired {
            field: name.to_string(),
        });
    }

    Ok(())
}

fn validate_field(descriptor: &mut FieldDescriptor<'_>) -> Result<(), ConfigError> {
    let constraint = Constraint::parse(descriptor.field.name(), &descriptor.tokens)?;
    let value = coerce(&constraint)?;
    bind(value, descriptor, &constraint)?;

    tracing::debug!(
        field = descriptor.field.name(),
        env = %constraint.env_name,
        "bound config field"
    );
    Ok(())
}

/// Populate `config` from the environment and validate every field.
///
/// Fields are processed in declaration order and validation stops at the
/// first failure; the record is only returned when every field passed.
pub fn validate_config<C: Config>(mut config: C) -> Result<C, ConfigError> {
    for field in config.fields() {
        let mut descriptor = FieldDescriptor::new(field);
        if let Err(err) = validate_field(&mut descriptor) {
            tracing::debug!(field = descriptor.field.name(), error = %err, "config validation failed");
            return Err(err);
        }
    }

    Ok(config)
}
