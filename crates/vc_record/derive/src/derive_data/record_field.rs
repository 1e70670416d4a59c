use proc_macro2::Literal;
use syn::ext::IdentExt;
use syn::{Field, Index, Member, Type};

use super::FieldAttributes;

/// One declared field of a record.
#[derive(Debug)]
pub(crate) struct RecordField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Position in declaration order.
    pub index: usize,
}

impl<'a> RecordField<'a> {
    pub fn new(data: &'a Field, index: usize) -> syn::Result<Self> {
        Ok(Self {
            data,
            attrs: FieldAttributes::parse_attrs(&data.attrs)?,
            index,
        })
    }

    /// `self.<member>` accessor: the identifier, or the tuple index.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(self.index)),
        }
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }

    /// Unsuffixed index literal, usable as a const argument.
    #[inline]
    pub fn index_lit(&self) -> Literal {
        Literal::usize_unsuffixed(self.index)
    }

    /// Declared name without the `r#` prefix.
    pub fn name(&self) -> Option<String> {
        self.data.ident.as_ref().map(|ident| ident.unraw().to_string())
    }

    #[inline]
    pub fn is_base(&self) -> bool {
        self.attrs.base.is_some()
    }

    /// Declared as `&T` or `&mut T`.
    #[inline]
    pub fn is_reference(&self) -> bool {
        is_reference_type(&self.data.ty)
    }
}

fn is_reference_type(ty: &Type) -> bool {
    match ty {
        Type::Reference(_) => true,
        Type::Paren(paren) => is_reference_type(&paren.elem),
        Type::Group(group) => is_reference_type(&group.elem),
        _ => false,
    }
}
