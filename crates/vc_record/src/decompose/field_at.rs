use crate::Decompose;

/// Access to the `I`-th field of a record.
///
/// One impl is generated per field, so an index past the last field is a
/// missing impl and fails to compile:
///
/// ```compile_fail
/// use vc_record::{Decompose, derive::Record};
///
/// #[derive(Record)]
/// struct Pair(u8, u16);
///
/// let pair = Pair(1, 2);
/// let _ = pair.field::<2>();
/// ```
pub trait FieldAt<const I: usize>: Decompose {
    /// The declared type of the field.
    type Type;

    fn get(&self) -> &Self::Type;

    fn get_mut(&mut self) -> &mut Self::Type;

    /// Moves the field out, dropping the rest of the record.
    fn take(self) -> Self::Type;
}

/// Declared type of field `I` of `T`.
///
/// ```
/// use vc_record::{FieldType, derive::Record};
///
/// #[derive(Record)]
/// struct Entry<'a> {
///     key: &'a str,
///     hits: u64,
/// }
///
/// let hits: FieldType<Entry<'static>, 1> = 5_u64;
/// let key: FieldType<Entry<'_>, 0> = "cache";
/// assert_eq!((key, hits), ("cache", 5));
/// ```
pub type FieldType<T, const I: usize> = <T as FieldAt<I>>::Type;
