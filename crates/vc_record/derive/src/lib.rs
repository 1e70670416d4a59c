//! See [`Record`](derive_record).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

/// Default field cap, equal to `vc_record::MAX_FIELDS`.
const DEFAULT_MAX_FIELDS: usize = 100;

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` inspects a struct once and implements, depending on its
/// classification:
///
/// | trait | condition |
/// |---|---|
/// | `Record` | always |
/// | `Decompose`, `FieldAt<I>` per field | field count within the cap, no base |
/// | `Traverse<V>`, `TraverseMut<V>`, `TraversePair<V>` | same as `Decompose` |
/// | `NamedFields` | same as `Decompose`, plus named fields, at least one field and no reference fields |
///
/// Named, tuple and unit structs are supported. Enums and unions are rejected.
///
/// ## Field cap
///
/// By default a record may declare up to 100 fields. Larger records still
/// implement `Record` (reporting `Arity::Unreflectable`) and nothing else.
/// The cap can be changed per type:
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[record(max_fields = 8)]
/// struct Small { /* ... */ }
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Base records
///
/// A struct may embed a parent record as its first field and mark it with
/// `base`. The field count then includes the base's fields, and the record
/// is classified as has-base: it can be counted but not decomposed, named or
/// traversed.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Derived {
///     #[record(base)]
///     base: Base,
///     extra: u8,
/// }
/// ```
///
/// The field type must derive `Record` itself. This attribute can only be
/// applied to the first field.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_record_impls(&ast)
}
