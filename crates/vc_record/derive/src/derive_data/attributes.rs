use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitInt};

use crate::{DEFAULT_MAX_FIELDS, RECORD_ATTRIBUTE_NAME};

/// Type level `#[record(...)]` options.
#[derive(Debug)]
pub(crate) struct TypeAttributes {
    /// `max_fields = N`.
    pub max_fields: Option<usize>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut max_fields = None;

        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("max_fields") {
                    let lit: LitInt = meta.value()?.parse()?;
                    if max_fields.is_some() {
                        return Err(meta.error("duplicate `max_fields`"));
                    }
                    max_fields = Some(lit.base10_parse::<usize>()?);
                    Ok(())
                } else if meta.path.is_ident("base") {
                    Err(meta.error("`base` can only be applied to a field"))
                } else {
                    Err(meta.error("unknown record attribute, expected `max_fields`"))
                }
            })?;
        }

        Ok(Self { max_fields })
    }

    #[inline]
    pub fn max_fields(&self) -> usize {
        self.max_fields.unwrap_or(DEFAULT_MAX_FIELDS)
    }
}

/// Field level `#[record(...)]` options.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `base`, with the span of the keyword.
    pub base: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut base = None;

        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("base") {
                    if base.is_some() {
                        return Err(meta.error("duplicate `base`"));
                    }
                    base = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("max_fields") {
                    Err(meta.error("`max_fields` can only be applied to the type"))
                } else {
                    Err(meta.error("unknown record attribute, expected `base`"))
                }
            })?;
        }

        Ok(Self { base })
    }
}
