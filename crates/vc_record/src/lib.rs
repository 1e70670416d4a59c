#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to this crate as `::vc_record`, which also has to
// resolve inside the crate's own tests.
extern crate self as vc_record;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod decompose;
pub mod fmt;
pub mod name;
pub mod probe;
pub mod serde;
pub mod traverse;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use decompose::{Decompose, FieldAt, FieldType};
pub use error::RecordError;
pub use name::NamedFields;
pub use probe::{Arity, MAX_FIELDS, Record, RecordInfo};
pub use traverse::{FieldSlot, Traverse, TraverseMut, TraversePair};
pub use vc_record_derive as derive;
