//! Error types for annotation parsing, coercion and binding

use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur while validating a config record.
///
/// Validation stops at the first failing field, so a single `ConfigError`
/// always describes exactly one problem:
/// - Malformed annotations (unknown token, bad separator, unknown type)
/// - Disagreement between the annotation and the Rust field type
/// - Missing `env=` binding or an empty `required` field
/// - Values that cannot be converted to the declared type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A sequence type was declared without a one-character separator.
    #[error("field '{field}': sequence types must specify a single separator character in their brackets")]
    SeparatorUndefined {
        /// Name of the field carrying the annotation
        field: String,
    },

    /// An annotation token matched none of `required`, `env=`, `type=`.
    #[error("constraint '{constraint}' on field '{field}' is unknown")]
    UnknownConstraint {
        /// The offending token, verbatim
        constraint: String,
        /// Name of the field carrying the annotation
        field: String,
    },

    /// The `type=` annotation names a type outside the supported set.
    #[error("unrecognized type: '{type_name}'")]
    UnrecognizedType {
        /// Declared type name, verbatim
        type_name: String,
    },

    /// The annotation's declared type disagrees with the field's Rust type.
    #[error("field '{field}' of type '{actual}' does not match the annotated type '{declared}'")]
    FieldTypeMismatch {
        /// Name of the field
        field: String,
        /// The field's type, rendered with annotation type names
        actual: String,
        /// The declared type name from the annotation
        declared: String,
    },

    /// The field has no `env=` binding.
    #[error("'env=' constraint must be defined for all fields of the config, not found for field '{field}'")]
    EnvConstraintUndefined {
        /// Name of the field
        field: String,
    },

    /// A `required` field is empty after coercion.
    #[error("field '{field}' is required")]
    FieldRequired {
        /// Name of the field
        field: String,
    },

    /// The environment value could not be converted to the declared type.
    #[error("failed to convert '{env_name}' to {declared_type} from string: {source}")]
    FailedTypeConversion {
        /// Name of the environment variable that was read
        env_name: String,
        /// Declared type name the value was converted to
        declared_type: String,
        /// Underlying conversion failure
        source: ConversionError,
    },
}

impl ConfigError {
    /// Field name the error refers to, when the error kind carries one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::SeparatorUndefined { field }
            | Self::UnknownConstraint { field, .. }
            | Self::FieldTypeMismatch { field, .. }
            | Self::EnvConstraintUndefined { field }
            | Self::FieldRequired { field } => Some(field),
            Self::UnrecognizedType { .. } | Self::FailedTypeConversion { .. } => None,
        }
    }
}

/// Conversion failures raised by the coercion engine.
///
/// Always surfaced to callers wrapped in [`ConfigError::FailedTypeConversion`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid boolean '{value}'")]
    ParseBool { value: String },

    #[error("invalid integer '{value}': {source}")]
    ParseInt {
        value: String,
        source: ParseIntError,
    },

    #[error("invalid float '{value}': {source}")]
    ParseFloat {
        value: String,
        source: ParseFloatError,
    },

    /// The value is not a base-10 number in the rune or byte range.
    #[error("failed to convert '{value}' to {type_name}")]
    RuneByte {
        value: String,
        type_name: &'static str,
    },

    #[error("separator must be specified to convert a sequence of {type_name}")]
    MissingSeparator { type_name: &'static str },

    /// One element of a sequence failed to convert.
    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<ConversionError>,
    },

    #[error("value is not valid unicode")]
    NotUnicode,
}
