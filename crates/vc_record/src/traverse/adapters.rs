use core::ops::ControlFlow;

use super::visitor::{FieldPredicate, FieldVisitor, FieldVisitorMut, PairPredicate, PairVisitor};
use super::{FieldSlot, Visit, VisitMut, VisitPair};

type Names = Option<&'static [&'static str]>;

#[inline]
fn slot(names: Names, index: usize) -> FieldSlot {
    FieldSlot::new(index, names.and_then(|names| names.get(index).copied()))
}

// -----------------------------------------------------------------------------
// ForEach

/// Passes every field to a visitor, never stopping early.
pub struct ForEach<V> {
    visitor: V,
    names: Names,
}

impl<V> ForEach<V> {
    #[inline]
    pub const fn new(visitor: V, names: Names) -> Self {
        Self { visitor, names }
    }
}

impl<F, V: FieldVisitor<F>> Visit<F> for ForEach<V> {
    #[inline]
    fn visit(&mut self, index: usize, field: &F) -> ControlFlow<()> {
        self.visitor.visit_field(slot(self.names, index), field);
        ControlFlow::Continue(())
    }
}

impl<F, V: FieldVisitorMut<F>> VisitMut<F> for ForEach<V> {
    #[inline]
    fn visit_mut(&mut self, index: usize, field: &mut F) -> ControlFlow<()> {
        self.visitor.visit_field_mut(slot(self.names, index), field);
        ControlFlow::Continue(())
    }
}

impl<F, V: PairVisitor<F>> VisitPair<F> for ForEach<V> {
    #[inline]
    fn visit_pair(&mut self, index: usize, lhs: &F, rhs: &F) -> ControlFlow<()> {
        self.visitor.visit_pair(slot(self.names, index), lhs, rhs);
        ControlFlow::Continue(())
    }
}

// -----------------------------------------------------------------------------
// AllOf

/// Stops at the first field the predicate rejects.
pub struct AllOf<P> {
    predicate: P,
    names: Names,
}

impl<P> AllOf<P> {
    #[inline]
    pub const fn new(predicate: P, names: Names) -> Self {
        Self { predicate, names }
    }
}

impl<F, P: FieldPredicate<F>> Visit<F> for AllOf<P> {
    #[inline]
    fn visit(&mut self, index: usize, field: &F) -> ControlFlow<()> {
        if self.predicate.test_field(slot(self.names, index), field) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

impl<F, P: PairPredicate<F>> VisitPair<F> for AllOf<P> {
    #[inline]
    fn visit_pair(&mut self, index: usize, lhs: &F, rhs: &F) -> ControlFlow<()> {
        if self.predicate.test_pair(slot(self.names, index), lhs, rhs) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

// -----------------------------------------------------------------------------
// AnyOf

/// Stops at the first field the predicate accepts.
pub struct AnyOf<P> {
    predicate: P,
    names: Names,
}

impl<P> AnyOf<P> {
    #[inline]
    pub const fn new(predicate: P, names: Names) -> Self {
        Self { predicate, names }
    }
}

impl<F, P: FieldPredicate<F>> Visit<F> for AnyOf<P> {
    #[inline]
    fn visit(&mut self, index: usize, field: &F) -> ControlFlow<()> {
        if self.predicate.test_field(slot(self.names, index), field) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<F, P: PairPredicate<F>> VisitPair<F> for AnyOf<P> {
    #[inline]
    fn visit_pair(&mut self, index: usize, lhs: &F, rhs: &F) -> ControlFlow<()> {
        if self.predicate.test_pair(slot(self.names, index), lhs, rhs) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
