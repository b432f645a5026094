//! Annotation-driven environment variable configuration
//!
//! `tagconf` populates a config struct from environment variables. Each field
//! carries a `#[conf("...")]` annotation that names the variable, marks it as
//! required and declares the type the value is converted to. Sequence fields
//! declare the single character their elements are separated by.
//!
//! # Annotation grammar
//!
//! A comma-separated list of constraints:
//!
//! - `required` - the field must not be empty after conversion
//! - `env=NAME` - the environment variable to read (mandatory on every field)
//! - `type=T` - declared type, `string` when omitted
//! - `type=[S]T` - sequence of `T`, split on the character `S`
//!
//! Supported types: `string`, `bool`, `int`, `int8`, `int16`, `int32`,
//! `int64`, `uint`, `uint8`, `uint16`, `uint32`, `uint64`, `uintptr`,
//! `float32`, `float64`, `rune` and `byte`.
//!
//! | Declared type         | Rust field type   |
//! |-----------------------|-------------------|
//! | `string`              | `String`          |
//! | `bool`                | `bool`            |
//! | `int` / `uint`        | `isize` / `usize` |
//! | `intN` / `uintN`      | `iN` / `uN`       |
//! | `uintptr`             | `usize`           |
//! | `float32` / `float64` | `f32` / `f64`     |
//! | `rune`                | `char`            |
//! | `byte`                | `u8`              |
//! | `[S]T`                | `Vec<T>`          |
//!
//! # Example
//!
//! ```rust
//! use tagconf::Config;
//!
//! #[derive(Debug, Default, Config)]
//! struct AppConfig {
//!     #[conf("required,env=ACCESS_SECRET")]
//!     pub access_secret: String,
//!
//!     #[conf("env=PORT,type=uint16")]
//!     pub port: u16,
//!
//!     #[conf("required,env=KAFKA_BROKERS,type=[,]string")]
//!     pub kafka_brokers: Vec<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("ACCESS_SECRET", "s3cret");
//! #     std::env::set_var("KAFKA_BROKERS", "broker1,broker2");
//! #     std::env::remove_var("PORT");
//! let config = tagconf::validate_config(AppConfig::default())?;
//! assert_eq!(config.kafka_brokers, vec!["broker1", "broker2"]);
//! // optional and unset: zero value
//! assert_eq!(config.port, 0);
//! #     Ok(())
//! # }
//! ```
//!
//! # Validation order
//!
//! Fields are validated in declaration order and the first failure is
//! returned. For each field the annotation is tokenized and parsed, the
//! variable is converted, the declared type is checked against the field
//! type, the value is assigned, and finally the `env=` and `required`
//! constraints are enforced.
//!
//! An optional variable that is unset or empty leaves the field at the zero
//! value of its type (an empty `Vec` for sequences). The `required` check
//! compares the field's text to the empty string, so a numeric `0` counts as
//! present.

mod coerce;
mod constraint;
mod error;
mod field;
mod lexer;
mod types;
mod validate;
mod value;

pub use coerce::coerce;
pub use constraint::Constraint;
pub use error::{ConfigError, ConversionError};
pub use field::{Field, FieldType, Slot};
pub use lexer::tokenize;
pub use tagconf_derive::Config;
pub use types::Primitive;
pub use validate::{bind, validate_config, Config, FieldDescriptor};
pub use value::{Scalar, Value};

// Re-export so callers of `Config::from_env` can name its result type
#[doc(hidden)]
pub use anyhow;
