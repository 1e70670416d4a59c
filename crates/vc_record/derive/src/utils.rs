use proc_macro2::TokenStream;

/// An empty token stream, for impls that are skipped.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
