//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod record_derive;
mod record_field;
mod record_meta;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use record_derive::RecordDerive;
pub(crate) use record_field::RecordField;
pub(crate) use record_meta::RecordMeta;
