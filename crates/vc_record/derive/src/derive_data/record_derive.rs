use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use super::{RecordField, RecordMeta, TypeAttributes};

/// Shape of the struct body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordKind {
    /// `struct A { .. }`
    Named,
    /// `struct A(..);`
    Tuple,
    /// `struct A;`
    Unit,
}

/// A parsed `#[derive(Record)]` input.
#[derive(Debug)]
pub(crate) struct RecordDerive<'a> {
    pub meta: RecordMeta<'a>,
    pub kind: RecordKind,
    pub fields: Vec<RecordField<'a>>,
}

impl<'a> RecordDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Record` can only be derived for structs, not enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Record` can only be derived for structs, not unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = RecordMeta::new(attrs, &input.ident, &input.generics);

        let kind = match &data.fields {
            Fields::Named(_) => RecordKind::Named,
            Fields::Unnamed(_) => RecordKind::Tuple,
            Fields::Unit => RecordKind::Unit,
        };

        let fields = data
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| RecordField::new(field, index))
            .collect::<syn::Result<Vec<_>>>()?;

        if let Some(field) = fields.iter().skip(1).find(|field| field.is_base()) {
            return Err(syn::Error::new(
                field.attrs.base.unwrap_or_else(|| field.data.span()),
                "`#[record(base)]` can only be applied to the first field",
            ));
        }

        Ok(Self { meta, kind, fields })
    }

    /// The embedded base record, if the first field is marked `base`.
    #[inline]
    pub fn base(&self) -> Option<&RecordField<'a>> {
        self.fields.first().filter(|field| field.is_base())
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Within the cap and without base.
    ///
    /// The count of a has-base record depends on the base and is only known
    /// once the generated constants are evaluated.
    pub fn is_decomposable(&self) -> bool {
        self.base().is_none() && self.field_count() <= self.meta.max_fields()
    }

    pub fn is_namable(&self) -> bool {
        self.is_decomposable()
            && self.kind == RecordKind::Named
            && self.field_count() > 0
            && !self.fields.iter().any(RecordField::is_reference)
    }

    /// Declared names, in order. Only meaningful for named records.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().filter_map(RecordField::name).collect()
    }
}
