//! Paths into `vc_record` used by the generated code.
//!
//! Kept in one place so a change in the `vc_record` layout only touches
//! this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_record` crate.
///
/// 1. For crates that depend on `vc_record`, `::vc_record` is returned here.
/// 2. For crates that depend on `vc_fields`, `::vc_fields::record` is returned here.
/// 3. For other situations, `::vc_record` is returned here, but this may be incorrect.
///
/// Reading the manifest is relatively expensive, so the path is obtained once
/// per derive and passed around.
pub(crate) fn vc_record() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_record"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn record_(vc_record_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_record_path::Record
    }
}

#[inline(always)]
pub(crate) fn record_info_(vc_record_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_record_path::RecordInfo
    }
}

#[inline(always)]
pub(crate) fn arity_(vc_record_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_record_path::Arity
    }
}

#[inline(always)]
pub(crate) fn decompose_(vc_record_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_record_path::Decompose
    }
}

#[inline(always)]
pub(crate) fn field_at_(vc_record_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_record_path::FieldAt
    }
}

#[inline(always)]
pub(crate) fn named_fields_(vc_record_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_record_path::NamedFields
    }
}

#[inline(always)]
pub(crate) fn traverse_(vc_record_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_record_path::traverse
    }
}
