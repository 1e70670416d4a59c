use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

/// Generate one `FieldAt<I>` impl per field.
pub(crate) fn impl_trait_field_at(record: &RecordDerive) -> TokenStream {
    let field_at_ = crate::path::field_at_(record.meta.vc_record_path());

    let impls = record.fields.iter().map(|field| {
        let index = field.index_lit();
        let ty = field.ty();
        let member = field.member();
        let impl_header = record.meta.impl_header(quote! { #field_at_<#index> });

        quote! {
            #impl_header {
                type Type = #ty;

                #[inline]
                fn get(&self) -> &#ty {
                    &self.#member
                }

                #[inline]
                fn get_mut(&mut self) -> &mut #ty {
                    &mut self.#member
                }

                #[inline]
                fn take(self) -> #ty {
                    self.#member
                }
            }
        }
    });

    quote! {
        #(#impls)*
    }
}
