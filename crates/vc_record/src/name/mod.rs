//! Declared field names.
//!
//! Names are available for records that are decomposable, declare named
//! fields, declare at least one field and have no field of reference type.
//! For any other record the name queries do not compile:
//!
//! ```compile_fail
//! use vc_record::derive::Record;
//!
//! #[derive(Record)]
//! struct View<'a> {
//!     data: &'a [u8],
//!     len: usize,
//! }
//!
//! let _ = vc_record::name::field_name::<View<'static>, 1>();
//! ```
//!
//! Type names are handled by [`signature`].

// -----------------------------------------------------------------------------
// Modules

pub mod signature;

// -----------------------------------------------------------------------------
// Exports

pub use signature::{try_type_name_of, type_name_of};

use crate::{Decompose, FieldAt, RecordError};

// -----------------------------------------------------------------------------
// NamedFields

/// A decomposable record whose fields can be named.
///
/// `FIELD_NAMES[i]` is the identifier of field `i` as written in the
/// declaration, with any `r#` prefix removed.
pub trait NamedFields: Decompose {
    const FIELD_NAMES: &'static [&'static str];
}

/// Name of field `I`, resolved at compile time.
///
/// ```
/// use vc_record::{derive::Record, name::field_name};
///
/// #[derive(Record)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// const Y: &str = field_name::<Point, 1>();
/// assert_eq!(Y, "y");
/// ```
#[inline]
pub const fn field_name<T: NamedFields + FieldAt<I>, const I: usize>() -> &'static str {
    T::FIELD_NAMES[I]
}

/// All field names of `T`, in declaration order.
#[inline]
pub const fn field_names<T: NamedFields>() -> &'static [&'static str] {
    T::FIELD_NAMES
}

/// Name of the field at a runtime index.
///
/// Works for any decomposable record; records without names report
/// [`RecordError::NameUnavailable`].
pub fn field_name_at<T: Decompose>(index: usize) -> Result<&'static str, RecordError> {
    let type_name = T::INFO.type_name();
    if index >= T::FIELD_COUNT {
        return Err(RecordError::IndexOutOfBounds {
            type_name,
            index,
            len: T::FIELD_COUNT,
        });
    }
    match T::INFO.field_names() {
        Some(names) => Ok(names[index]),
        None => {
            log::debug!("`{}` rejected: field {index} has no name", type_name_of::<T>());
            Err(RecordError::NameUnavailable { type_name, index })
        }
    }
}

/// Index of the field called `name`.
pub fn field_index<T: NamedFields>(name: &str) -> Option<usize> {
    T::FIELD_NAMES.iter().position(|field| *field == name)
}

// -----------------------------------------------------------------------------
// Tests
