use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDerive;

/// Generate implementation code for `NamedFields`.
pub(crate) fn impl_trait_named(record: &RecordDerive) -> TokenStream {
    let named_fields_ = crate::path::named_fields_(record.meta.vc_record_path());
    let names = record.field_names();

    let impl_header = record.meta.impl_header(named_fields_);

    quote! {
        #impl_header {
            const FIELD_NAMES: &'static [&'static str] = &[#(#names),*];
        }
    }
}
