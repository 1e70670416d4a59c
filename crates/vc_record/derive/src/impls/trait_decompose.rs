use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::RecordDerive;

/// Generate implementation code for `Decompose`.
pub(crate) fn impl_trait_decompose(record: &RecordDerive) -> TokenStream {
    let decompose_ = crate::path::decompose_(record.meta.vc_record_path());

    let count = Literal::usize_unsuffixed(record.field_count());
    let tys = record.fields.iter().map(|field| field.ty()).collect::<Vec<_>>();
    let members = record.fields.iter().map(|field| field.member()).collect::<Vec<_>>();

    let impl_header = record.meta.impl_header(decompose_);

    quote! {
        #impl_header {
            const FIELD_COUNT: usize = #count;

            type Tuple = (#(#tys,)*);

            type Refs<'__a> = (#(&'__a #tys,)*)
            where
                Self: '__a;

            type Muts<'__a> = (#(&'__a mut #tys,)*)
            where
                Self: '__a;

            #[inline]
            fn as_refs(&self) -> Self::Refs<'_> {
                (#(&self.#members,)*)
            }

            #[inline]
            fn as_muts(&mut self) -> Self::Muts<'_> {
                (#(&mut self.#members,)*)
            }

            #[inline]
            fn into_tuple(self) -> Self::Tuple {
                (#(self.#members,)*)
            }
        }
    }
}
