use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, WherePredicate, parse_quote};

use crate::derive_data::RecordDerive;
use crate::path::fp::ControlFlowFP;

/// Generate implementation code for `Traverse`, `TraverseMut` and `TraversePair`.
///
/// Every field is handed to the visitor in declaration order; a `Break`
/// returns immediately. Similar to following:
///
/// ```ignore
/// impl<__V> Traverse<__V> for Foo
/// where
///     __V: Visit<u8> + Visit<String>,
/// {
///     fn traverse(&self, __visitor: &mut __V) -> ControlFlow<()> {
///         if let ControlFlow::Break(()) = <__V as Visit<u8>>::visit(__visitor, 0, &self.a) {
///             return ControlFlow::Break(());
///         }
///         // ..
///         ControlFlow::Continue(())
///     }
/// }
/// ```
pub(crate) fn impl_trait_traverse(record: &RecordDerive) -> TokenStream {
    let traverse_ = crate::path::traverse_(record.meta.vc_record_path());
    let visitor = Ident::new("__V", Span::call_site());

    let bounds = |protocol: TokenStream| -> Vec<WherePredicate> {
        record
            .fields
            .iter()
            .map(|field| {
                let ty = field.ty();
                parse_quote!(#visitor: #traverse_::#protocol<#ty>)
            })
            .collect()
    };

    let traverse_header = record.meta.impl_header_with(
        quote! { #traverse_::Traverse<#visitor> },
        &visitor,
        bounds(quote! { Visit }),
    );
    let traverse_mut_header = record.meta.impl_header_with(
        quote! { #traverse_::TraverseMut<#visitor> },
        &visitor,
        bounds(quote! { VisitMut }),
    );
    let traverse_pair_header = record.meta.impl_header_with(
        quote! { #traverse_::TraversePair<#visitor> },
        &visitor,
        bounds(quote! { VisitPair }),
    );

    let visits = record.fields.iter().map(|field| {
        let (ty, index, member) = (field.ty(), field.index_lit(), field.member());
        quote! {
            if let #ControlFlowFP::Break(()) = <#visitor as #traverse_::Visit<#ty>>::visit(
                __visitor,
                #index,
                &self.#member,
            ) {
                return #ControlFlowFP::Break(());
            }
        }
    });
    let visits_mut = record.fields.iter().map(|field| {
        let (ty, index, member) = (field.ty(), field.index_lit(), field.member());
        quote! {
            if let #ControlFlowFP::Break(()) = <#visitor as #traverse_::VisitMut<#ty>>::visit_mut(
                __visitor,
                #index,
                &mut self.#member,
            ) {
                return #ControlFlowFP::Break(());
            }
        }
    });
    let visits_pair = record.fields.iter().map(|field| {
        let (ty, index, member) = (field.ty(), field.index_lit(), field.member());
        quote! {
            if let #ControlFlowFP::Break(()) = <#visitor as #traverse_::VisitPair<#ty>>::visit_pair(
                __visitor,
                #index,
                &self.#member,
                &__other.#member,
            ) {
                return #ControlFlowFP::Break(());
            }
        }
    });

    quote! {
        #traverse_header {
            fn traverse(&self, __visitor: &mut #visitor) -> #ControlFlowFP<()> {
                #(#visits)*
                #ControlFlowFP::Continue(())
            }
        }

        #traverse_mut_header {
            fn traverse_mut(&mut self, __visitor: &mut #visitor) -> #ControlFlowFP<()> {
                #(#visits_mut)*
                #ControlFlowFP::Continue(())
            }
        }

        #traverse_pair_header {
            fn traverse_pair(&self, __other: &Self, __visitor: &mut #visitor) -> #ControlFlowFP<()> {
                #(#visits_pair)*
                #ControlFlowFP::Continue(())
            }
        }
    }
}
