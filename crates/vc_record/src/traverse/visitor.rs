use core::any::Any;

use super::FieldSlot;

// -----------------------------------------------------------------------------
// Visitor traits

/// Visits fields of type `F`.
pub trait FieldVisitor<F> {
    fn visit_field(&mut self, slot: FieldSlot, field: &F);
}

/// Visits fields of type `F` mutably.
pub trait FieldVisitorMut<F> {
    fn visit_field_mut(&mut self, slot: FieldSlot, field: &mut F);
}

/// Visits the same field of two records.
pub trait PairVisitor<F> {
    fn visit_pair(&mut self, slot: FieldSlot, lhs: &F, rhs: &F);
}

/// Tests fields of type `F`.
pub trait FieldPredicate<F> {
    fn test_field(&mut self, slot: FieldSlot, field: &F) -> bool;
}

/// Tests the same field of two records.
pub trait PairPredicate<F> {
    fn test_pair(&mut self, slot: FieldSlot, lhs: &F, rhs: &F) -> bool;
}

impl<F, V: FieldVisitor<F> + ?Sized> FieldVisitor<F> for &mut V {
    #[inline]
    fn visit_field(&mut self, slot: FieldSlot, field: &F) {
        (**self).visit_field(slot, field);
    }
}

impl<F, V: FieldVisitorMut<F> + ?Sized> FieldVisitorMut<F> for &mut V {
    #[inline]
    fn visit_field_mut(&mut self, slot: FieldSlot, field: &mut F) {
        (**self).visit_field_mut(slot, field);
    }
}

impl<F, V: PairVisitor<F> + ?Sized> PairVisitor<F> for &mut V {
    #[inline]
    fn visit_pair(&mut self, slot: FieldSlot, lhs: &F, rhs: &F) {
        (**self).visit_pair(slot, lhs, rhs);
    }
}

impl<F, P: FieldPredicate<F> + ?Sized> FieldPredicate<F> for &mut P {
    #[inline]
    fn test_field(&mut self, slot: FieldSlot, field: &F) -> bool {
        (**self).test_field(slot, field)
    }
}

impl<F, P: PairPredicate<F> + ?Sized> PairPredicate<F> for &mut P {
    #[inline]
    fn test_pair(&mut self, slot: FieldSlot, lhs: &F, rhs: &F) -> bool {
        (**self).test_pair(slot, lhs, rhs)
    }
}

// -----------------------------------------------------------------------------
// DynFn

/// A closure receiving every field as `&dyn Any`.
///
/// Accepts any `'static` field type. Build it with [`visit_fn`],
/// [`visit_mut_fn`], [`pair_fn`], [`predicate_fn`] or [`pair_predicate_fn`],
/// which also pin down the closure's argument types.
#[derive(Debug, Clone, Copy)]
pub struct DynFn<C>(pub C);

impl<F: Any, C: FnMut(FieldSlot, &dyn Any)> FieldVisitor<F> for DynFn<C> {
    #[inline]
    fn visit_field(&mut self, slot: FieldSlot, field: &F) {
        (self.0)(slot, field);
    }
}

impl<F: Any, C: FnMut(FieldSlot, &mut dyn Any)> FieldVisitorMut<F> for DynFn<C> {
    #[inline]
    fn visit_field_mut(&mut self, slot: FieldSlot, field: &mut F) {
        (self.0)(slot, field);
    }
}

impl<F: Any, C: FnMut(FieldSlot, &dyn Any, &dyn Any)> PairVisitor<F> for DynFn<C> {
    #[inline]
    fn visit_pair(&mut self, slot: FieldSlot, lhs: &F, rhs: &F) {
        (self.0)(slot, lhs, rhs);
    }
}

impl<F: Any, C: FnMut(FieldSlot, &dyn Any) -> bool> FieldPredicate<F> for DynFn<C> {
    #[inline]
    fn test_field(&mut self, slot: FieldSlot, field: &F) -> bool {
        (self.0)(slot, field)
    }
}

impl<F: Any, C: FnMut(FieldSlot, &dyn Any, &dyn Any) -> bool> PairPredicate<F> for DynFn<C> {
    #[inline]
    fn test_pair(&mut self, slot: FieldSlot, lhs: &F, rhs: &F) -> bool {
        (self.0)(slot, lhs, rhs)
    }
}

#[inline]
pub fn visit_fn<C: FnMut(FieldSlot, &dyn Any)>(f: C) -> DynFn<C> {
    DynFn(f)
}

#[inline]
pub fn visit_mut_fn<C: FnMut(FieldSlot, &mut dyn Any)>(f: C) -> DynFn<C> {
    DynFn(f)
}

#[inline]
pub fn pair_fn<C: FnMut(FieldSlot, &dyn Any, &dyn Any)>(f: C) -> DynFn<C> {
    DynFn(f)
}

#[inline]
pub fn predicate_fn<C: FnMut(FieldSlot, &dyn Any) -> bool>(f: C) -> DynFn<C> {
    DynFn(f)
}

#[inline]
pub fn pair_predicate_fn<C: FnMut(FieldSlot, &dyn Any, &dyn Any) -> bool>(f: C) -> DynFn<C> {
    DynFn(f)
}
