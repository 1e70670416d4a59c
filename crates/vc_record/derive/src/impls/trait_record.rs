use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::RecordDerive;
use crate::path::fp::ModulePathFP;

/// Generate implementation code for `Record`.
///
/// Similar to following:
///
/// ```ignore
/// impl Record for Foo {
///     const INFO: RecordInfo = RecordInfo::new("Foo", module_path!(), Arity::probe(2, 100))
///         .with_field_names(&["a", "b"]);
/// }
/// ```
pub(crate) fn impl_trait_record(record: &RecordDerive) -> TokenStream {
    let vc_record_path = record.meta.vc_record_path();
    let record_ = crate::path::record_(vc_record_path);
    let record_info_ = crate::path::record_info_(vc_record_path);
    let arity_ = crate::path::arity_(vc_record_path);

    let type_name = record.meta.type_name();
    let max_fields = Literal::usize_unsuffixed(record.meta.max_fields());

    let info_tokens = match record.base() {
        Some(base) => {
            let base_ty = base.ty();
            let own = Literal::usize_unsuffixed(record.field_count() - 1);
            quote! {
                #record_info_::new(
                    #type_name,
                    #ModulePathFP,
                    #arity_::inherit(<#base_ty as #record_>::INFO.arity(), #own, #max_fields),
                )
                .with_base()
            }
        }
        None => {
            let count = Literal::usize_unsuffixed(record.field_count());
            let names = if record.is_namable() {
                let names = record.field_names();
                quote! { .with_field_names(&[#(#names),*]) }
            } else {
                crate::utils::empty()
            };
            quote! {
                #record_info_::new(#type_name, #ModulePathFP, #arity_::probe(#count, #max_fields))
                #names
            }
        }
    };

    let impl_header = record.meta.impl_header(record_);

    quote! {
        #impl_header {
            const INFO: #record_info_ = #info_tokens;
        }
    }
}
