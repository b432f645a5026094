//! Attribute parsing for `#[conf("...")]` annotations.
//!
//! The annotation body is kept as the raw string literal; tokenizing and
//! parsing it is done at runtime by `tagconf`.

use syn::{Field, LitStr, Meta};

/// Parsed `#[conf(...)]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw annotation text; `None` when the field has no `#[conf]`.
    pub annotation: Option<LitStr>,
}

impl FieldAttrs {
    /// Extract the `#[conf("...")]` attribute from a struct field.
    ///
    /// Attributes other than `conf` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("conf") {
                continue;
            }

            if !matches!(attr.meta, Meta::List(_)) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected a string annotation: #[conf(\"env=NAME,...\")]",
                ));
            }

            if attrs.annotation.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate conf attribute; put all constraints in one annotation",
                ));
            }

            let annotation: LitStr = attr.parse_args()?;
            attrs.annotation = Some(annotation);
        }

        Ok(attrs)
    }

    /// Annotation text, empty when the field has none.
    pub fn annotation_value(&self) -> String {
        self.annotation
            .as_ref()
            .map(LitStr::value)
            .unwrap_or_default()
    }
}
