//! Arity probing and record classification.
//!
//! A record type sits on one of four levels:
//!
//! | level | requirement | trait |
//! |---|---|---|
//! | countable | derives `Record` | [`Record`] |
//! | reflectable | field count within the cap | `INFO.is_reflectable()` |
//! | decomposable | reflectable and no `#[record(base)]` | [`Decompose`] |
//! | nameable | decomposable, named, non-empty, no reference fields | [`NamedFields`](crate::NamedFields) |
//!
//! Operations of a higher level simply do not exist for types below it:
//!
//! ```compile_fail
//! use vc_record::derive::Record;
//!
//! #[derive(Record)]
//! struct Base { a: i32, b: i32 }
//!
//! #[derive(Record)]
//! struct Derived {
//!     #[record(base)]
//!     base: Base,
//!     c: i32,
//! }
//!
//! // `Derived` is countable but not decomposable.
//! let _ = vc_record::probe::field_count::<Derived>();
//! ```
//!
//! The functions here answer the same questions for code that is generic over
//! [`Record`] and wants a value instead of a compile error.

// -----------------------------------------------------------------------------
// Modules

mod arity;
mod record;

// -----------------------------------------------------------------------------
// Exports

pub use arity::{Arity, MAX_FIELDS};
pub use record::{Record, RecordInfo};

use crate::name::type_name_of;
use crate::{Decompose, RecordError};

// -----------------------------------------------------------------------------
// Classification

/// Field count of a decomposable record, checked at compile time.
///
/// ```
/// use vc_record::derive::Record;
///
/// #[derive(Record)]
/// struct Empty;
///
/// #[derive(Record)]
/// struct Pair(u8, u16);
///
/// assert_eq!(vc_record::probe::field_count::<Empty>(), 0);
/// assert_eq!(vc_record::probe::field_count::<Pair>(), 2);
/// ```
#[inline]
pub const fn field_count<T: Decompose>() -> usize {
    T::FIELD_COUNT
}

/// Field count of any record, or [`RecordError::Unreflectable`].
///
/// Records embedding a base still report the flattened count.
pub fn probe_arity<T: Record>() -> Result<usize, RecordError> {
    match T::INFO.arity() {
        Arity::Fields(count) => Ok(count),
        Arity::Unreflectable { max_fields } => {
            log::debug!(
                "`{}` rejected: more than {max_fields} fields",
                type_name_of::<T>()
            );
            Err(RecordError::Unreflectable {
                type_name: T::INFO.type_name(),
                max_fields,
            })
        }
    }
}

/// Field count of a record that can be decomposed, or the reason it cannot.
pub fn ensure_decomposable<T: Record>() -> Result<usize, RecordError> {
    let count = probe_arity::<T>()?;
    if T::INFO.has_base() {
        log::debug!("`{}` rejected: embeds a base record", type_name_of::<T>());
        return Err(RecordError::HasBase {
            type_name: T::INFO.type_name(),
        });
    }
    Ok(count)
}

#[inline]
pub const fn is_reflectable<T: Record>() -> bool {
    T::INFO.is_reflectable()
}

#[inline]
pub const fn is_decomposable<T: Record>() -> bool {
    T::INFO.is_decomposable()
}

#[inline]
pub const fn is_namable<T: Record>() -> bool {
    T::INFO.is_namable()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;
    use crate::derive::Record;

    #[derive(Record)]
    struct Sample {
        i: i32,
        d: f64,
        hello: alloc::string::String,
    }

    #[derive(Record)]
    struct Borrowing<'a> {
        i: &'a i32,
        d: &'a f64,
    }

    #[derive(Record)]
    struct Nested {
        inner: Sample,
    }

    #[derive(Record)]
    struct WithBase {
        #[record(base)]
        base: Sample,
    }

    #[derive(Record)]
    struct WithBaseAndField {
        #[record(base)]
        base: Sample,
        extra: u8,
    }

    #[derive(Record)]
    struct Markers<T> {
        unit: (),
        marker: PhantomData<T>,
    }

    #[derive(Record)]
    #[record(max_fields = 2)]
    struct Capped {
        a: u8,
        b: u8,
        c: u8,
    }

    #[derive(Record)]
    struct Unit;

    #[derive(Record)]
    struct Tuple(u8, i64);

    #[test]
    fn counts() {
        assert_eq!(field_count::<Sample>(), 3);
        assert_eq!(field_count::<Borrowing<'_>>(), 2);
        assert_eq!(field_count::<Nested>(), 1);
        assert_eq!(field_count::<Unit>(), 0);
        assert_eq!(field_count::<Tuple>(), 2);
        // zero-sized fields still count
        assert_eq!(field_count::<Markers<u64>>(), 2);
        assert_eq!(size_of::<Markers<u64>>(), 0);
    }

    #[test]
    fn base_is_flattened() {
        assert_eq!(probe_arity::<WithBase>(), Ok(3));
        assert_eq!(probe_arity::<WithBaseAndField>(), Ok(4));
        assert!(WithBase::INFO.has_base());
        assert!(is_reflectable::<WithBase>());
        assert!(!is_decomposable::<WithBase>());
        assert!(!is_namable::<WithBaseAndField>());
        assert_eq!(
            ensure_decomposable::<WithBase>(),
            Err(RecordError::HasBase {
                type_name: "WithBase"
            })
        );
    }

    #[test]
    fn configured_cap() {
        assert!(!is_reflectable::<Capped>());
        assert_eq!(
            probe_arity::<Capped>(),
            Err(RecordError::Unreflectable {
                type_name: "Capped",
                max_fields: 2
            })
        );
        assert_eq!(Capped::INFO.field_names(), None);
    }

    #[test]
    fn classification_table() {
        assert!(is_decomposable::<Sample>() && is_namable::<Sample>());
        assert!(is_decomposable::<Borrowing<'_>>() && !is_namable::<Borrowing<'_>>());
        assert!(is_decomposable::<Nested>() && is_namable::<Nested>());
        assert!(is_decomposable::<Unit>() && !is_namable::<Unit>());
        assert!(is_decomposable::<Tuple>() && !is_namable::<Tuple>());
        assert_eq!(ensure_decomposable::<Sample>(), Ok(3));
    }

    #[test]
    fn info_paths() {
        assert_eq!(Sample::INFO.type_name(), "Sample");
        assert_eq!(Sample::INFO.module_path(), "vc_record::probe::tests");
        assert_eq!(Markers::<u8>::INFO.type_name(), "Markers");
        // rejections are logged with the full generic name
        assert_eq!(type_name_of::<Markers<u8>>(), "Markers<u8>");
        assert_eq!(type_name_of::<WithBase>(), "WithBase");
    }

    // Generated at the cap and one past it.
    macro_rules! wide_record {
        ($name:ident: $($ty:ty),* $(,)?) => {
            #[derive(Record)]
            struct $name($($ty),*);
        };
    }

    wide_record!(Wide100:
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
    );

    wide_record!(Wide101:
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        u8,
    );

    #[test]
    fn default_cap_boundary() {
        assert_eq!(field_count::<Wide100>(), MAX_FIELDS);
        assert!(is_decomposable::<Wide100>());
        assert!(!is_reflectable::<Wide101>());
        assert_eq!(Wide101::INFO.arity(), Arity::Unreflectable { max_fields: MAX_FIELDS });
    }
}
