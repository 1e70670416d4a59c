use super::adapters::{AllOf, AnyOf, ForEach};
use super::{Traverse, TraverseMut, TraversePair};
use crate::name::type_name_of;
use crate::{NamedFields, Record};

#[inline]
fn enter<T: Record>(op: &'static str) {
    log::trace!("{op} over `{}`", type_name_of::<T>());
}

// -----------------------------------------------------------------------------
// Single record

/// Calls `visitor` on every field of `record`, in declaration order.
///
/// Pass `&mut visitor` to keep the visitor's state afterwards.
pub fn for_each<T, V>(record: &T, visitor: V)
where
    T: Traverse<ForEach<V>>,
{
    enter::<T>("for_each");
    let _ = record.traverse(&mut ForEach::new(visitor, T::INFO.field_names()));
}

/// Calls `visitor` on every field of `record` by mutable reference.
pub fn for_each_mut<T, V>(record: &mut T, visitor: V)
where
    T: TraverseMut<ForEach<V>>,
{
    enter::<T>("for_each_mut");
    let _ = record.traverse_mut(&mut ForEach::new(visitor, T::INFO.field_names()));
}

/// `true` if `predicate` holds for every field; `true` for records without fields.
pub fn all_of<T, P>(record: &T, predicate: P) -> bool
where
    T: Traverse<AllOf<P>>,
{
    enter::<T>("all_of");
    record
        .traverse(&mut AllOf::new(predicate, T::INFO.field_names()))
        .is_continue()
}

/// `true` if `predicate` holds for some field; `false` for records without fields.
pub fn any_of<T, P>(record: &T, predicate: P) -> bool
where
    T: Traverse<AnyOf<P>>,
{
    enter::<T>("any_of");
    record
        .traverse(&mut AnyOf::new(predicate, T::INFO.field_names()))
        .is_break()
}

// -----------------------------------------------------------------------------
// Pairs

/// Calls `visitor` on field `i` of `lhs` and `rhs` together, for every `i`.
pub fn for_each_pair<T, V>(lhs: &T, rhs: &T, visitor: V)
where
    T: TraversePair<ForEach<V>>,
{
    enter::<T>("for_each_pair");
    let _ = lhs.traverse_pair(rhs, &mut ForEach::new(visitor, T::INFO.field_names()));
}

pub fn all_of_pair<T, P>(lhs: &T, rhs: &T, predicate: P) -> bool
where
    T: TraversePair<AllOf<P>>,
{
    enter::<T>("all_of_pair");
    lhs.traverse_pair(rhs, &mut AllOf::new(predicate, T::INFO.field_names()))
        .is_continue()
}

pub fn any_of_pair<T, P>(lhs: &T, rhs: &T, predicate: P) -> bool
where
    T: TraversePair<AnyOf<P>>,
{
    enter::<T>("any_of_pair");
    lhs.traverse_pair(rhs, &mut AnyOf::new(predicate, T::INFO.field_names()))
        .is_break()
}

// -----------------------------------------------------------------------------
// Named

/// [`for_each`] restricted to nameable records: every slot has a name.
pub fn for_each_named<T, V>(record: &T, visitor: V)
where
    T: NamedFields + Traverse<ForEach<V>>,
{
    enter::<T>("for_each_named");
    let _ = record.traverse(&mut ForEach::new(visitor, Some(T::FIELD_NAMES)));
}

/// [`for_each_pair`] restricted to nameable records.
pub fn for_each_pair_named<T, V>(lhs: &T, rhs: &T, visitor: V)
where
    T: NamedFields + TraversePair<ForEach<V>>,
{
    enter::<T>("for_each_pair_named");
    let _ = lhs.traverse_pair(rhs, &mut ForEach::new(visitor, Some(T::FIELD_NAMES)));
}

/// [`all_of`] restricted to nameable records.
pub fn all_of_named<T, P>(record: &T, predicate: P) -> bool
where
    T: NamedFields + Traverse<AllOf<P>>,
{
    enter::<T>("all_of_named");
    record
        .traverse(&mut AllOf::new(predicate, Some(T::FIELD_NAMES)))
        .is_continue()
}

/// [`any_of`] restricted to nameable records.
pub fn any_of_named<T, P>(record: &T, predicate: P) -> bool
where
    T: NamedFields + Traverse<AnyOf<P>>,
{
    enter::<T>("any_of_named");
    record
        .traverse(&mut AnyOf::new(predicate, Some(T::FIELD_NAMES)))
        .is_break()
}

pub fn all_of_pair_named<T, P>(lhs: &T, rhs: &T, predicate: P) -> bool
where
    T: NamedFields + TraversePair<AllOf<P>>,
{
    enter::<T>("all_of_pair_named");
    lhs.traverse_pair(rhs, &mut AllOf::new(predicate, Some(T::FIELD_NAMES)))
        .is_continue()
}

pub fn any_of_pair_named<T, P>(lhs: &T, rhs: &T, predicate: P) -> bool
where
    T: NamedFields + TraversePair<AnyOf<P>>,
{
    enter::<T>("any_of_pair_named");
    lhs.traverse_pair(rhs, &mut AnyOf::new(predicate, Some(T::FIELD_NAMES)))
        .is_break()
}
