//! Field slots
//!
//! A [`Field`] is one entry of the table a [`Config`](crate::Config)
//! implementation hands to the validator: the field name, its raw
//! annotation, and a [`Slot`] the coerced value is written into.

use std::fmt;

use crate::types::Primitive;
use crate::value::{Scalar, Value};

/// Shape of a field's Rust type, expressed in annotation type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    /// Declared types this field can hold. The first entry is the canonical
    /// name used in error messages.
    pub accepts: &'static [Primitive],
    pub sequence: bool,
}

impl FieldType {
    /// Whether a declaration of `primitive` (sequence or not) fits this field.
    pub fn matches(&self, primitive: Primitive, sequence: bool) -> bool {
        self.sequence == sequence && self.accepts.contains(&primitive)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sequence {
            f.write_str("[]")?;
        }
        match self.accepts.first() {
            Some(primitive) => f.write_str(primitive.name()),
            None => f.write_str("?"),
        }
    }
}

/// A config field that coerced values can be written into.
///
/// Implemented for every supported scalar type and for `Vec` of each.
pub trait Slot {
    fn field_type(&self) -> FieldType;

    /// Write `value` into the field. Returns `false` when the value does not
    /// fit, leaving the field untouched.
    fn assign(&mut self, value: Value) -> bool;

    /// Textual representation used by the `required` check.
    fn text(&self) -> String;
}

/// Rust types a single scalar can be bound to.
trait ScalarField: Sized + fmt::Display {
    const ACCEPTS: &'static [Primitive];

    fn from_scalar(scalar: Scalar) -> Option<Self>;
}

macro_rules! scalar_field {
    ($ty:ty, [$($primitive:ident),+]) => {
        impl ScalarField for $ty {
            const ACCEPTS: &'static [Primitive] = &[$(Primitive::$primitive),+];

            fn from_scalar(scalar: Scalar) -> Option<Self> {
                match scalar {
                    $(Scalar::$primitive(v) => Some(v),)+
                    _ => None,
                }
            }
        }

        impl Slot for $ty {
            fn field_type(&self) -> FieldType {
                FieldType {
                    accepts: <$ty as ScalarField>::ACCEPTS,
                    sequence: false,
                }
            }

            fn assign(&mut self, value: Value) -> bool {
                assign_scalar(self, value)
            }

            fn text(&self) -> String {
                self.to_string()
            }
        }

        impl Slot for Vec<$ty> {
            fn field_type(&self) -> FieldType {
                FieldType {
                    accepts: <$ty as ScalarField>::ACCEPTS,
                    sequence: true,
                }
            }

            fn assign(&mut self, value: Value) -> bool {
                assign_sequence(self, value)
            }

            fn text(&self) -> String {
                self.iter().map(ToString::to_string).collect()
            }
        }
    };
}

fn assign_scalar<T: ScalarField>(slot: &mut T, value: Value) -> bool {
    let Value::Scalar(scalar) = value else {
        return false;
    };
    match T::from_scalar(scalar) {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}

fn assign_sequence<T: ScalarField>(slot: &mut Vec<T>, value: Value) -> bool {
    match value {
        Value::Sequence(_, items) => {
            let Some(items) = items.into_iter().map(T::from_scalar).collect::<Option<Vec<_>>>()
            else {
                return false;
            };
            *slot = items;
            true
        }
        // optional sequence whose variable is unset
        Value::Scalar(scalar) if scalar.is_zero() && T::ACCEPTS.contains(&scalar.primitive()) => {
            slot.clear();
            true
        }
        Value::Scalar(_) => false,
    }
}

scalar_field!(String, [String]);
scalar_field!(bool, [Bool]);
scalar_field!(isize, [Int]);
scalar_field!(i8, [Int8]);
scalar_field!(i16, [Int16]);
scalar_field!(i32, [Int32]);
scalar_field!(i64, [Int64]);
scalar_field!(usize, [Uint, Uintptr]);
scalar_field!(u8, [Uint8, Byte]);
scalar_field!(u16, [Uint16]);
scalar_field!(u32, [Uint32]);
scalar_field!(u64, [Uint64]);
scalar_field!(f32, [Float32]);
scalar_field!(f64, [Float64]);
scalar_field!(char, [Rune]);

/// One entry of a record's field table.
pub struct Field<'a> {
    name: &'static str,
    annotation: &'static str,
    slot: &'a mut dyn Slot,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, annotation: &'static str, slot: &'a mut dyn Slot) -> Self {
        Self {
            name,
            annotation,
            slot,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw annotation text, empty when the field carries none.
    pub fn annotation(&self) -> &'static str {
        self.annotation
    }

    pub fn slot(&mut self) -> &mut dyn Slot {
        &mut *self.slot
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .field("type", &self.slot.field_type().to_string())
            .finish()
    }
}
