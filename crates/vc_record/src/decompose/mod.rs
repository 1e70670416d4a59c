//! Decomposition of a record into its fields.
//!
//! A decomposable record can be viewed as a tuple in three ways, one per
//! access mode:
//!
//! | access | method | result |
//! |---|---|---|
//! | `&T` | [`Decompose::as_refs`] | `(&F0, &F1, ..)` pointing into the record |
//! | `&mut T` | [`Decompose::as_muts`] | `(&mut F0, &mut F1, ..)` |
//! | `T` | [`Decompose::into_tuple`] | `(F0, F1, ..)` moved out of the record |
//!
//! [`Decompose::to_tuple`] copies the fields out of a borrowed record instead.
//! Single fields are reached through [`FieldAt`], usually via the provided
//! [`Decompose::field`], [`Decompose::field_mut`] and [`Decompose::into_field`].
//!
//! A record without fields decomposes into `()` in every mode.

// -----------------------------------------------------------------------------
// Modules

mod field_at;

// -----------------------------------------------------------------------------
// Exports

pub use field_at::{FieldAt, FieldType};

use crate::Record;

// -----------------------------------------------------------------------------
// Decompose

/// A record that can be split into its fields, in declaration order.
///
/// Implemented by `#[derive(Record)]` for records within the field cap that do
/// not embed a base.
///
/// # Examples
///
/// ```
/// use vc_record::{Decompose, derive::Record};
///
/// #[derive(Record, Clone)]
/// struct Account {
///     id: u32,
///     owner: String,
/// }
///
/// let mut account = Account { id: 7, owner: "ada".into() };
///
/// let (id, owner) = account.as_muts();
/// *id += 1;
/// owner.push_str(" lovelace");
///
/// assert_eq!(account.as_refs(), (&8, &String::from("ada lovelace")));
/// assert_eq!(account.field::<1>(), "ada lovelace");
///
/// let copied = account.to_tuple();
/// assert_eq!(copied, account.into_tuple());
/// ```
pub trait Decompose: Record + Sized {
    /// Number of fields, equal to `INFO.field_count()`.
    const FIELD_COUNT: usize;

    /// `(F0, F1, ..)`
    type Tuple;

    /// `(&'a F0, &'a F1, ..)`
    type Refs<'a>
    where
        Self: 'a;

    /// `(&'a mut F0, &'a mut F1, ..)`
    type Muts<'a>
    where
        Self: 'a;

    fn as_refs(&self) -> Self::Refs<'_>;

    fn as_muts(&mut self) -> Self::Muts<'_>;

    fn into_tuple(self) -> Self::Tuple;

    /// Copies every field out of a borrowed record.
    ///
    /// The values are equal to the record's fields but live independently.
    #[inline]
    fn to_tuple(&self) -> Self::Tuple
    where
        Self: Clone,
    {
        self.clone().into_tuple()
    }

    /// Reference to field `I`.
    #[inline]
    fn field<const I: usize>(&self) -> &FieldType<Self, I>
    where
        Self: FieldAt<I>,
    {
        FieldAt::<I>::get(self)
    }

    /// Mutable reference to field `I`.
    #[inline]
    fn field_mut<const I: usize>(&mut self) -> &mut FieldType<Self, I>
    where
        Self: FieldAt<I>,
    {
        FieldAt::<I>::get_mut(self)
    }

    /// Moves field `I` out of the record, dropping the others.
    #[inline]
    fn into_field<const I: usize>(self) -> FieldType<Self, I>
    where
        Self: FieldAt<I>,
    {
        FieldAt::<I>::take(self)
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// Reference to field `I` of `record`.
///
/// ```
/// use vc_record::{decompose::get_field, derive::Record};
///
/// #[derive(Record)]
/// struct Pair(u8, &'static str);
///
/// let pair = Pair(1, "one");
/// assert!(core::ptr::eq(get_field::<_, 1>(&pair), &pair.1));
/// ```
#[inline]
pub fn get_field<T: FieldAt<I>, const I: usize>(record: &T) -> &FieldType<T, I> {
    record.get()
}

/// Mutable reference to field `I` of `record`.
#[inline]
pub fn get_field_mut<T: FieldAt<I>, const I: usize>(record: &mut T) -> &mut FieldType<T, I> {
    record.get_mut()
}

/// Field `I` moved out of `record`.
#[inline]
pub fn take_field<T: FieldAt<I>, const I: usize>(record: T) -> FieldType<T, I> {
    record.take()
}

/// Copies of every field of `record`.
#[inline]
pub fn to_tuple<T: Decompose + Clone>(record: &T) -> T::Tuple {
    record.to_tuple()
}

/// Every field of `record`, moved out.
#[inline]
pub fn into_tuple<T: Decompose>(record: T) -> T::Tuple {
    record.into_tuple()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use core::ptr;

    use super::*;
    use crate::derive::Record;

    #[derive(Record, Clone, PartialEq, Debug)]
    struct Sample {
        i: i32,
        d: f64,
        hello: String,
        arr: [u64; 3],
        map: BTreeMap<String, i32>,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self {
                i: 287,
                d: 1.5,
                hello: String::from("Hello World"),
                arr: [1, 2, 3],
                map: BTreeMap::from([(String::from("one"), 1), (String::from("two"), 2)]),
            }
        }
    }

    #[derive(Record)]
    struct Borrowing<'a> {
        i: &'a mut i32,
        d: &'a f64,
    }

    #[derive(Record)]
    struct Pointer {
        p: *const i32,
    }

    #[derive(Record, Default)]
    struct Empty {}

    #[derive(Record, Clone, Debug, PartialEq)]
    struct Generic<T, const N: usize> {
        items: [T; N],
        len: usize,
    }

    #[test]
    fn refs_point_into_record() {
        let sample = Sample::default();
        let (i, d, hello, arr, map) = sample.as_refs();
        assert!(ptr::eq(i, &sample.i));
        assert!(ptr::eq(d, &sample.d));
        assert!(ptr::eq(hello, &sample.hello));
        assert!(ptr::eq(arr, &sample.arr));
        assert!(ptr::eq(map, &sample.map));
    }

    #[test]
    fn field_access_in_declaration_order() {
        let mut sample = Sample::default();
        assert!(ptr::eq(sample.field::<0>(), &sample.i));
        assert!(ptr::eq(sample.field::<2>(), &sample.hello));
        assert!(ptr::eq(get_field::<_, 4>(&sample), &sample.map));

        *sample.field_mut::<0>() = 1;
        get_field_mut::<_, 3>(&mut sample)[0] = 10;
        assert_eq!(sample.i, 1);
        assert_eq!(sample.arr, [10, 2, 3]);
    }

    #[test]
    fn muts_write_through() {
        let mut sample = Sample::default();
        let addrs = (
            &raw const sample.i,
            &raw const sample.d,
            &raw const sample.hello,
            &raw const sample.arr,
            &raw const sample.map,
        );
        let (i, d, hello, arr, map) = sample.as_muts();
        assert!(ptr::eq(&*i, addrs.0));
        assert!(ptr::eq(&*d, addrs.1));
        assert!(ptr::eq(&*hello, addrs.2));
        assert!(ptr::eq(&*arr, addrs.3));
        assert!(ptr::eq(&*map, addrs.4));

        *i += 1;
        hello.clear();
        map.insert(String::from("three"), 3);

        assert_eq!(sample.i, 288);
        assert!(sample.hello.is_empty());
        assert_eq!(sample.map.len(), 3);
    }

    #[test]
    fn values_equal_but_independent() {
        let sample = Sample::default();
        let copied = to_tuple(&sample);
        assert_eq!(copied.0, sample.i);
        assert_eq!(copied.2, sample.hello);
        assert!(!ptr::eq(&copied.2, &sample.hello));

        let moved = into_tuple(Sample::default());
        let fresh = Sample::default();
        assert_eq!(moved.1, fresh.d);
        assert_eq!(moved.3, fresh.arr);
        assert_eq!(moved.4, fresh.map);
    }

    #[test]
    fn take_single_field() {
        let hello: String = Sample::default().into_field::<2>();
        assert_eq!(hello, "Hello World");
        assert_eq!(take_field::<_, 1>(Sample::default()), 1.5);
    }

    #[test]
    fn reference_fields() {
        let mut i = 1;
        let d = 2.5;
        let mut borrowing = Borrowing { i: &mut i, d: &d };

        **borrowing.field_mut::<0>() += 1;
        assert_eq!(**borrowing.field::<1>(), 2.5);

        let (i_ref, d_ref) = borrowing.into_tuple();
        assert!(ptr::eq(d_ref, &d));
        assert_eq!(*i_ref, 2);
    }

    #[test]
    fn pointer_field() {
        let value = 3;
        let record = Pointer { p: &value };
        assert!(ptr::eq(*record.field::<0>(), &value));
    }

    #[test]
    fn empty_record() {
        let mut empty = Empty::default();
        let () = empty.as_refs();
        let () = empty.as_muts();
        let () = empty.into_tuple();
        assert_eq!(Empty::FIELD_COUNT, 0);
    }

    #[test]
    fn generic_record() {
        let record = Generic::<u8, 2> { items: [1, 2], len: 2 };
        assert_eq!(record.to_tuple(), ([1, 2], 2));
        assert_eq!(Generic::<u8, 2>::FIELD_COUNT, 2);
    }
}
