//! Generic traversal over the fields of one or two records.
//!
//! ## Layers
//!
//! `#[derive(Record)]` implements [`Traverse`], [`TraverseMut`] and
//! [`TraversePair`] for every decomposable record. The generated code calls a
//! field protocol ([`Visit`], [`VisitMut`], [`VisitPair`]) once per field, in
//! declaration order, and stops as soon as a call returns
//! [`ControlFlow::Break`].
//!
//! The operations in this module wrap a user visitor into an adapter that
//! speaks this protocol:
//!
//! | operation | user trait | stops early |
//! |---|---|---|
//! | [`for_each`], [`for_each_mut`], [`for_each_pair`] | [`FieldVisitor`], [`FieldVisitorMut`], [`PairVisitor`] | never |
//! | [`all_of`], [`all_of_pair`] | [`FieldPredicate`], [`PairPredicate`] | at the first `false` |
//! | [`any_of`], [`any_of_pair`] | [`FieldPredicate`], [`PairPredicate`] | at the first `true` |
//!
//! The `_named` variants additionally require [`NamedFields`](crate::NamedFields),
//! so every [`FieldSlot`] they produce carries a name.
//!
//! ## Visitors
//!
//! A visitor implements the user trait once per field type it accepts. A
//! field type without an impl is a compile error. For visitors that accept
//! anything `'static`, the closure adaptors ([`visit_fn`], [`predicate_fn`], ..)
//! pass each field as `&dyn Any`.
//!
//! ```
//! use core::any::Any;
//! use vc_record::derive::Record;
//! use vc_record::traverse::{self, FieldSlot};
//!
//! #[derive(Record)]
//! struct Limits {
//!     min: u32,
//!     max: u32,
//!     name: &'static str,
//! }
//!
//! let limits = Limits { min: 1, max: 10, name: "io" };
//!
//! let has_zero = traverse::any_of(&limits, traverse::predicate_fn(|_, field: &dyn Any| {
//!     field.downcast_ref::<u32>() == Some(&0)
//! }));
//! assert!(!has_zero);
//! ```
//!
//! Pair operations take two records of the same type; anything else is
//! rejected before a field is visited:
//!
//! ```compile_fail
//! use vc_record::derive::Record;
//! use vc_record::traverse;
//!
//! #[derive(Record)]
//! struct A { x: u8 }
//!
//! #[derive(Record)]
//! struct B { x: u8 }
//!
//! traverse::for_each_pair(&A { x: 1 }, &B { x: 1 }, traverse::pair_fn(|_, _, _| {}));
//! ```
//!
//! Records embedding a base cannot be traversed:
//!
//! ```compile_fail
//! use vc_record::derive::Record;
//! use vc_record::traverse;
//!
//! #[derive(Record)]
//! struct Base { a: u8 }
//!
//! #[derive(Record)]
//! struct Derived {
//!     #[record(base)]
//!     base: Base,
//!     b: u8,
//! }
//!
//! let derived = Derived { base: Base { a: 1 }, b: 2 };
//! traverse::for_each(&derived, traverse::visit_fn(|_, _| {}));
//! ```

use core::ops::ControlFlow;

// -----------------------------------------------------------------------------
// Modules

mod adapters;
mod ops;
mod visitor;

// -----------------------------------------------------------------------------
// Exports

pub use adapters::{AllOf, AnyOf, ForEach};
pub use ops::{
    all_of, all_of_named, all_of_pair, all_of_pair_named, any_of, any_of_named, any_of_pair,
    any_of_pair_named, for_each, for_each_mut, for_each_named, for_each_pair,
    for_each_pair_named,
};
pub use visitor::{
    DynFn, FieldPredicate, FieldVisitor, FieldVisitorMut, PairPredicate, PairVisitor,
    pair_fn, pair_predicate_fn, predicate_fn, visit_fn, visit_mut_fn,
};

use crate::Decompose;

// -----------------------------------------------------------------------------
// FieldSlot

/// Position of a visited field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSlot {
    index: usize,
    name: Option<&'static str>,
}

impl FieldSlot {
    #[inline]
    pub const fn new(index: usize, name: Option<&'static str>) -> Self {
        Self { index, name }
    }

    /// Index in declaration order.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Declared name, `None` for records that are not nameable.
    #[inline]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }
}

// -----------------------------------------------------------------------------
// Field protocol

/// Receives one field of type `F` by reference.
pub trait Visit<F> {
    fn visit(&mut self, index: usize, field: &F) -> ControlFlow<()>;
}

/// Receives one field of type `F` by mutable reference.
pub trait VisitMut<F> {
    fn visit_mut(&mut self, index: usize, field: &mut F) -> ControlFlow<()>;
}

/// Receives the same field of two records.
pub trait VisitPair<F> {
    fn visit_pair(&mut self, index: usize, lhs: &F, rhs: &F) -> ControlFlow<()>;
}

/// Feeds every field of a record to `V`, in declaration order.
///
/// Implemented by `#[derive(Record)]` when `V` implements [`Visit`] for every
/// field type.
pub trait Traverse<V>: Decompose {
    fn traverse(&self, visitor: &mut V) -> ControlFlow<()>;
}

/// Mutable counterpart of [`Traverse`].
pub trait TraverseMut<V>: Decompose {
    fn traverse_mut(&mut self, visitor: &mut V) -> ControlFlow<()>;
}

/// Feeds the fields of `self` and `other` to `V` side by side.
pub trait TraversePair<V>: Decompose {
    fn traverse_pair(&self, other: &Self, visitor: &mut V) -> ControlFlow<()>;
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::Any;
    use core::ops::ControlFlow;

    use super::*;
    use crate::derive::Record;

    #[derive(Record, Clone)]
    struct Sample {
        a: u8,
        b: u8,
        c: String,
    }

    #[derive(Record)]
    struct Empty;

    #[derive(Record)]
    struct Borrowing<'a> {
        value: &'a u8,
        other: &'a u8,
    }

    #[derive(Record)]
    struct Tuple(u8, u16);

    fn sample() -> Sample {
        Sample {
            a: 1,
            b: 2,
            c: String::from("three"),
        }
    }

    /// Counts calls and holds a predicate over `u8` fields.
    struct Counting {
        calls: usize,
        threshold: u8,
    }

    impl FieldPredicate<u8> for Counting {
        fn test_field(&mut self, _: FieldSlot, field: &u8) -> bool {
            self.calls += 1;
            *field >= self.threshold
        }
    }

    impl FieldPredicate<String> for Counting {
        fn test_field(&mut self, _: FieldSlot, field: &String) -> bool {
            self.calls += 1;
            field.len() as u8 >= self.threshold
        }
    }

    impl PairPredicate<u8> for Counting {
        fn test_pair(&mut self, _: FieldSlot, lhs: &u8, rhs: &u8) -> bool {
            self.calls += 1;
            lhs == rhs
        }
    }

    impl PairPredicate<String> for Counting {
        fn test_pair(&mut self, _: FieldSlot, lhs: &String, rhs: &String) -> bool {
            self.calls += 1;
            lhs == rhs
        }
    }

    fn counting(threshold: u8) -> Counting {
        Counting {
            calls: 0,
            threshold,
        }
    }

    #[test]
    fn visits_in_declaration_order() {
        let mut seen = Vec::new();
        for_each(
            &sample(),
            visit_fn(|slot, _| seen.push((slot.index(), slot.name()))),
        );
        assert_eq!(seen, [(0, Some("a")), (1, Some("b")), (2, Some("c"))]);

        let mut indices = Vec::new();
        for_each(&Tuple(1, 2), visit_fn(|slot, _| indices.push((slot.index(), slot.name()))));
        assert_eq!(indices, [(0, None), (1, None)]);
    }

    #[test]
    fn mutable_visit_writes_through() {
        let mut record = sample();
        for_each_mut(
            &mut record,
            visit_mut_fn(|_, field: &mut dyn Any| {
                if let Some(value) = field.downcast_mut::<u8>() {
                    *value *= 10;
                }
            }),
        );
        assert_eq!((record.a, record.b), (10, 20));
    }

    #[test]
    fn empty_records() {
        assert!(all_of(&Empty, predicate_fn(|_, _| false)));
        assert!(!any_of(&Empty, predicate_fn(|_, _| true)));
        assert!(all_of_pair(&Empty, &Empty, pair_predicate_fn(|_, _, _| false)));
        assert!(!any_of_pair(&Empty, &Empty, pair_predicate_fn(|_, _, _| true)));

        let mut calls = 0;
        for_each(&Empty, visit_fn(|_, _| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn all_of_stops_at_first_false() {
        let mut predicate = counting(2);
        assert!(!all_of(&sample(), &mut predicate));
        assert_eq!(predicate.calls, 1);

        let mut predicate = counting(1);
        assert!(all_of(&sample(), &mut predicate));
        assert_eq!(predicate.calls, 3);
    }

    #[test]
    fn any_of_stops_at_first_true() {
        let mut predicate = counting(2);
        assert!(any_of(&sample(), &mut predicate));
        assert_eq!(predicate.calls, 2);

        let mut predicate = counting(200);
        assert!(!any_of(&sample(), &mut predicate));
        assert_eq!(predicate.calls, 3);
    }

    #[test]
    fn pairs() {
        let lhs = sample();
        let mut rhs = sample();
        rhs.b = 7;

        let mut predicate = counting(0);
        assert!(!all_of_pair(&lhs, &rhs, &mut predicate));
        assert_eq!(predicate.calls, 2);

        assert!(any_of_pair(&lhs, &rhs, pair_predicate_fn(|_, l: &dyn Any, r: &dyn Any| {
            l.downcast_ref::<u8>() != r.downcast_ref::<u8>()
        })));

        let mut differing = Vec::new();
        for_each_pair(
            &lhs,
            &rhs,
            pair_fn(|slot, l: &dyn Any, r: &dyn Any| {
                if let (Some(l), Some(r)) = (l.downcast_ref::<u8>(), r.downcast_ref::<u8>())
                    && l != r
                {
                    differing.push(slot.name());
                }
            }),
        );
        assert_eq!(differing, [Some("b")]);
    }

    #[test]
    fn named_variants() {
        let record = sample();
        let mut names = Vec::new();
        for_each_named(&record, visit_fn(|slot, _| names.extend(slot.name())));
        assert_eq!(names, ["a", "b", "c"]);

        assert!(all_of_named(&record, predicate_fn(|slot, _| slot.name().is_some())));
        assert!(any_of_named(&record, predicate_fn(|slot, _| slot.name() == Some("c"))));
        assert!(all_of_pair_named(&record, &record.clone(), pair_predicate_fn(|slot, _, _| {
            slot.name().is_some()
        })));
        assert!(!any_of_pair_named(&record, &record, pair_predicate_fn(|_, _, _| false)));

        let mut count = 0;
        for_each_pair_named(&record, &record, pair_fn(|_, _, _| count += 1));
        assert_eq!(count, 3);
    }

    /// Typed visitor for records with reference fields.
    struct Sum(u32);

    impl FieldVisitor<&u8> for Sum {
        fn visit_field(&mut self, _: FieldSlot, field: &&u8) {
            self.0 += u32::from(**field);
        }
    }

    #[test]
    fn reference_fields() {
        let (x, y) = (4, 5);
        let record = Borrowing { value: &x, other: &y };
        let mut sum = Sum(0);
        for_each(&record, &mut sum);
        assert_eq!(sum.0, 9);
    }

    #[test]
    fn raw_protocol() {
        struct FirstOnly(usize);

        impl<F> Visit<F> for FirstOnly {
            fn visit(&mut self, _: usize, _: &F) -> ControlFlow<()> {
                self.0 += 1;
                ControlFlow::Break(())
            }
        }

        let mut visitor = FirstOnly(0);
        assert!(sample().traverse(&mut visitor).is_break());
        assert_eq!(visitor.0, 1);
        assert!(Empty.traverse(&mut visitor).is_continue());
    }
}
