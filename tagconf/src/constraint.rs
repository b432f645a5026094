//! Constraint parsing
//!
//! Turns the tokens of one field annotation into a [`Constraint`]. The
//! recognized tokens are:
//!
//! - `required` - the field must not be empty after coercion
//! - `env=NAME` - environment variable to read (mandatory)
//! - `type=T` - declared scalar type, `string` when omitted
//! - `type=[S]T` - sequence of `T` split on the single character `S`

use std::fmt;

use crate::error::ConfigError;
use crate::types::Primitive;

const REQUIRED: &str = "required";
const ENV_PREFIX: &str = "env=";
const TYPE_PREFIX: &str = "type=";

/// Parsed form of a single field annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Constraint {
    /// Field the annotation belongs to, used in error messages only.
    pub field_name: String,
    pub required: bool,
    /// Empty when no `env=` token was given.
    pub env_name: String,
    /// Declared type name, verbatim; empty means `string`.
    pub type_name: String,
    pub sequence: bool,
    /// Always set when `sequence` is true.
    pub separator: Option<char>,
}

/// Sequence declaration split out of a `type=` value.
enum TypeDecl<'a> {
    Scalar(&'a str),
    Sequence { separator: char, base: &'a str },
}

/// Classify a `type=` value. `None` means the bracket is not exactly one
/// character wide.
fn parse_type_decl(value: &str) -> Option<TypeDecl<'_>> {
    let Some(inner) = value.strip_prefix('[') else {
        return Some(TypeDecl::Scalar(value));
    };

    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), Some(']')) => {
            let base = chars.as_str();
            if base.is_empty() {
                Some(TypeDecl::Scalar(value))
            } else {
                Some(TypeDecl::Sequence { separator, base })
            }
        }
        _ => None,
    }
}

impl Constraint {
    /// Parse annotation tokens for `field_name`.
    ///
    /// The first token that fails to parse aborts; nothing is returned for a
    /// partially parsed annotation.
    pub fn parse<S: AsRef<str>>(field_name: &str, tokens: &[S]) -> Result<Self, ConfigError> {
        let mut constraint = Constraint {
            field_name: field_name.to_string(),
            ..Default::default()
        };

        for token in tokens {
            let token = token.as_ref();

            if token == REQUIRED {
                constraint.required = true;
                continue;
            }

            if let Some(env_name) = token.strip_prefix(ENV_PREFIX).filter(|v| !v.is_empty()) {
                constraint.env_name = env_name.to_string();
                continue;
            }

            if let Some(value) = token.strip_prefix(TYPE_PREFIX).filter(|v| !v.is_empty()) {
                match parse_type_decl(value) {
                    Some(TypeDecl::Sequence { separator, base }) => {
                        constraint.sequence = true;
                        constraint.separator = Some(separator);
                        constraint.type_name = base.to_string();
                    }
                    Some(TypeDecl::Scalar(type_name)) => {
                        constraint.type_name = type_name.to_string();
                    }
                    None => {
                        return Err(ConfigError::SeparatorUndefined {
                            field: field_name.to_string(),
                        });
                    }
                }
                continue;
            }

            return Err(ConfigError::UnknownConstraint {
                constraint: token.to_string(),
                field: field_name.to_string(),
            });
        }

        Ok(constraint)
    }

    /// Declared primitive, resolving the empty type name to `string`.
    pub fn primitive(&self) -> Result<Primitive, ConfigError> {
        Primitive::from_declared(&self.type_name)
    }

    /// Declared type as shown in error messages: `[]T` for sequences.
    pub fn declared_type(&self) -> String {
        if self.sequence {
            format!("[]{}", self.type_name)
        } else {
            self.type_name.clone()
        }
    }
}

impl fmt::Display for Constraint {
    /// Renders the constraint back into annotation form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.required {
            parts.push(REQUIRED.to_string());
        }
        if !self.env_name.is_empty() {
            parts.push(format!("{ENV_PREFIX}{}", self.env_name));
        }
        match (self.sequence, self.separator) {
            (true, Some(separator)) => {
                parts.push(format!("{TYPE_PREFIX}[{separator}]{}", self.type_name))
            }
            _ if !self.type_name.is_empty() => {
                parts.push(format!("{TYPE_PREFIX}{}", self.type_name))
            }
            _ => {}
        }
        f.write_str(&parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse(annotation: &str) -> Result<Constraint, ConfigError> {
        Constraint::parse("field", &tokenize(annotation))
    }

    #[test]
    fn test_parse_required_env_and_type() {
        let constraint = parse("required,env=ACCESS_SECRET,type=string").unwrap();
        assert!(constraint.required);
        assert_eq!(constraint.env_name, "ACCESS_SECRET");
        assert_eq!(constraint.type_name, "string");
        assert!(!constraint.sequence);
        assert_eq!(constraint.separator, None);
    }

    #[test]
    fn test_defaults_when_only_env_given() {
        let constraint = parse("env=REFRESH_SECRET").unwrap();
        assert!(!constraint.required);
        assert_eq!(constraint.type_name, "");
        assert_eq!(constraint.primitive().unwrap(), Primitive::String);
    }

    #[test]
    fn test_parse_sequence_type() {
        let constraint = parse("required,env=KAFKA_BROKERS,type=[,]string").unwrap();
        assert!(constraint.sequence);
        assert_eq!(constraint.separator, Some(','));
        assert_eq!(constraint.type_name, "string");
    }

    #[test]
    fn test_parse_sequence_with_closing_bracket_separator() {
        let constraint = parse("env=X,type=[]]int").unwrap();
        assert_eq!(constraint.separator, Some(']'));
        assert_eq!(constraint.type_name, "int");
    }

    #[test]
    fn test_separator_must_be_one_character() {
        for annotation in ["env=X,type=[]int", "env=X,type=[ab]int", "env=X,type=["] {
            let err = parse(annotation).unwrap_err();
            assert!(
                matches!(err, ConfigError::SeparatorUndefined { ref field } if field == "field"),
                "{annotation}: {err:?}"
            );
        }
    }

    #[test]
    fn test_sequence_without_base_type_is_kept_verbatim() {
        let constraint = parse("env=X,type=[,]").unwrap();
        assert!(!constraint.sequence);
        assert_eq!(constraint.type_name, "[,]");
        assert!(matches!(
            constraint.primitive(),
            Err(ConfigError::UnrecognizedType { .. })
        ));
    }

    #[test]
    fn test_unknown_constraint() {
        let err = parse("required,env=ACCESS_SECRET,invalid_struct_tag").unwrap_err();
        match err {
            ConfigError::UnknownConstraint { constraint, field } => {
                assert_eq!(constraint, "invalid_struct_tag");
                assert_eq!(field, "field");
            }
            other => panic!("Expected UnknownConstraint, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_values_are_unknown() {
        for annotation in ["env=", "type=", "", "required,"] {
            assert!(
                matches!(parse(annotation), Err(ConfigError::UnknownConstraint { .. })),
                "{annotation}"
            );
        }
    }

    #[test]
    fn test_required_is_exact() {
        assert!(matches!(
            parse("required=true"),
            Err(ConfigError::UnknownConstraint { .. })
        ));
    }

    #[test]
    fn test_later_tokens_overwrite() {
        let constraint = parse("env=A,env=B,type=int,type=uint8").unwrap();
        assert_eq!(constraint.env_name, "B");
        assert_eq!(constraint.type_name, "uint8");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_constraint() {
        let constraint = Constraint::parse("ports", &tokenize("env=PORTS,type=[;]uint16")).unwrap();
        let json = serde_json::to_value(&constraint).unwrap();

        assert_eq!(json["field_name"], "ports");
        assert_eq!(json["env_name"], "PORTS");
        assert_eq!(json["separator"], ";");
        assert_eq!(
            serde_json::to_value(constraint.primitive().unwrap()).unwrap(),
            "uint16"
        );
    }

    #[test]
    fn test_declared_type_marks_sequences() {
        assert_eq!(parse("env=X,type=[,]string").unwrap().declared_type(), "[]string");
        assert_eq!(parse("env=X,type=uint8").unwrap().declared_type(), "uint8");
        assert_eq!(parse("env=X").unwrap().declared_type(), "");
    }

    #[test]
    fn test_display_renders_annotation() {
        let annotation = "required,env=PORTS,type=[;]uint16";
        assert_eq!(parse(annotation).unwrap().to_string(), annotation);
        assert_eq!(parse("env=NAME").unwrap().to_string(), "env=NAME");
    }
}
