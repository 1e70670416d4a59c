// -----------------------------------------------------------------------------
// Modules

mod match_record;

mod trait_decompose;
mod trait_field_at;
mod trait_named;
mod trait_record;
mod trait_traverse;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_record::match_record_impls;

use trait_decompose::impl_trait_decompose;
use trait_field_at::impl_trait_field_at;
use trait_named::impl_trait_named;
use trait_record::impl_trait_record;
use trait_traverse::impl_trait_traverse;
