use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::RecordDerive;

/// Provided for `#[derive(Record)]`.
pub(crate) fn match_record_impls(ast: &DeriveInput) -> TokenStream {
    // Parse attributes and fields.
    let record = match RecordDerive::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let record_impl = super::impl_trait_record(&record);

    // Above the cap or with a base: only countable.
    if !record.is_decomposable() {
        return TokenStream::from(quote! {
            const _: () = {
                #record_impl
            };
        });
    }

    let decompose_impl = super::impl_trait_decompose(&record);
    let field_at_impls = super::impl_trait_field_at(&record);
    let traverse_impls = super::impl_trait_traverse(&record);
    let named_impl = if record.is_namable() {
        super::impl_trait_named(&record)
    } else {
        crate::utils::empty()
    };

    TokenStream::from(quote! {
        const _: () = {
            #record_impl
            #decompose_impl
            #field_at_impls
            #traverse_impls
            #named_impl
        };
    })
}
