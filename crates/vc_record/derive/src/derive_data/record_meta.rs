use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{Generics, Ident, Path, WherePredicate};

use super::TypeAttributes;

/// Type level information shared by every generated impl.
pub(crate) struct RecordMeta<'a> {
    vc_record_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for RecordMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecordMeta")
            .field("vc_record_path", &self.vc_record_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> RecordMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            vc_record_path: crate::path::vc_record(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn vc_record_path(&self) -> &Path {
        &self.vc_record_path
    }

    #[inline]
    pub fn max_fields(&self) -> usize {
        self.attrs.max_fields()
    }

    /// The type's identifier as text, without `r#`.
    #[inline]
    pub fn type_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// `impl<..> #trait_ for Ident<..> where ..` header of an impl.
    pub fn impl_header(&self, trait_: TokenStream) -> TokenStream {
        let ident = self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        quote! {
            impl #impl_generics #trait_ for #ident #ty_generics #where_clause
        }
    }

    /// Like [`impl_header`](Self::impl_header), with an extra type parameter
    /// `param` and extra `predicates`.
    pub fn impl_header_with(
        &self,
        trait_: TokenStream,
        param: &Ident,
        predicates: impl IntoIterator<Item = WherePredicate>,
    ) -> TokenStream {
        let ident = self.ident;

        let mut generics = self.generics.clone();
        generics.params.push(syn::parse_quote!(#param));
        let where_clause = generics.make_where_clause();
        where_clause.predicates.extend(predicates);

        let (impl_generics, _, where_clause) = generics.split_for_impl();
        let (_, ty_generics, _) = self.generics.split_for_impl();
        quote! {
            impl #impl_generics #trait_ for #ident #ty_generics #where_clause
        }
    }
}
