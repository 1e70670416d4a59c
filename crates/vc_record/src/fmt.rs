//! `Debug` output built from field traversal.

use core::fmt;

use crate::traverse::{self, FieldSlot, FieldVisitor, ForEach, Traverse};

/// Formats a record field by field, without a `Debug` impl on the record.
///
/// Nameable records print like `#[derive(Debug)]` on a struct with named
/// fields, every other record prints in tuple form.
///
/// ```
/// use vc_record::{derive::Record, fmt::DebugFields};
///
/// #[derive(Record)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// #[derive(Record)]
/// struct Wrapper<'a>(&'a str);
///
/// assert_eq!(format!("{:?}", DebugFields(&Point { x: 1, y: 2 })), "Point { x: 1, y: 2 }");
/// assert_eq!(format!("{:?}", DebugFields(&Wrapper("w"))), r#"Wrapper("w")"#);
/// ```
pub struct DebugFields<'a, T>(pub &'a T);

/// Forwards every field to a formatting callback.
pub struct DebugSink<'f> {
    sink: &'f mut dyn FnMut(FieldSlot, &dyn fmt::Debug),
}

impl<F: fmt::Debug> FieldVisitor<F> for DebugSink<'_> {
    #[inline]
    fn visit_field(&mut self, slot: FieldSlot, field: &F) {
        (self.sink)(slot, field);
    }
}

impl<T> fmt::Debug for DebugFields<'_, T>
where
    T: for<'f> Traverse<ForEach<DebugSink<'f>>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = T::INFO.type_name();

        if T::INFO.is_namable() {
            let mut builder = f.debug_struct(type_name);
            traverse::for_each(
                self.0,
                DebugSink {
                    sink: &mut |slot: FieldSlot, value: &dyn fmt::Debug| {
                        builder.field(slot.name().unwrap_or_default(), value);
                    },
                },
            );
            builder.finish()
        } else {
            let mut builder = f.debug_tuple(type_name);
            traverse::for_each(
                self.0,
                DebugSink {
                    sink: &mut |_: FieldSlot, value: &dyn fmt::Debug| {
                        builder.field(value);
                    },
                },
            );
            builder.finish()
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
