//! Fully qualified paths of `core` items, usable directly in `quote!`.
//!
//! Generated code must not depend on what the caller has imported or shadowed,
//! so every prelude item is spelled with its absolute path.
//!
//! ```
//! use quote::quote;
//! use vc_macro_utils::full_path::ControlFlowFP;
//!
//! let tokens = quote!( #ControlFlowFP::Continue(()) );
//! assert_eq!(tokens.to_string().replace(' ', ""), "::core::ops::ControlFlow::Continue(())");
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => { $($path:tt)* })*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!( $($path)* ));
                }
            }
        )*
    };
}

define_full_path! {
    /// `::core::ops::ControlFlow`
    ControlFlowFP => { ::core::ops::ControlFlow }
    /// `::core::module_path!()`
    ModulePathFP => { ::core::module_path!() }
}
