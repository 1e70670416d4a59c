//! Serialization built from field traversal.
//!
//! [`SerializeFields`] serializes a nameable record as a struct, field by
//! field, provided every field type implements `Serialize`. The record type
//! itself needs no serde impl.

use serde_core::ser::SerializeStruct;
use serde_core::{Serialize, Serializer};

use crate::NamedFields;
use crate::traverse::{self, AllOf, FieldPredicate, FieldSlot, Traverse};

/// Serializes the wrapped record as a struct of its named fields.
///
/// Serialization stops at the first field that fails; that error is returned.
///
/// ```
/// use vc_record::{derive::Record, serde::SerializeFields};
///
/// #[derive(Record)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let json = serde_json::to_string(&SerializeFields(&Point { x: 1, y: -1 })).unwrap();
/// assert_eq!(json, r#"{"x":1,"y":-1}"#);
/// ```
pub struct SerializeFields<'a, T>(pub &'a T);

/// Hands every field to a serialization callback; a `false` result stops
/// the traversal.
pub struct SerializeSink<'s> {
    sink: &'s mut dyn FnMut(&'static str, &dyn erased_serde::Serialize) -> bool,
}

impl<F: Serialize> FieldPredicate<F> for SerializeSink<'_> {
    #[inline]
    fn test_field(&mut self, slot: FieldSlot, field: &F) -> bool {
        (self.sink)(slot.name().unwrap_or_default(), field)
    }
}

impl<T> Serialize for SerializeFields<'_, T>
where
    T: NamedFields + for<'s> Traverse<AllOf<SerializeSink<'s>>>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct(T::INFO.type_name(), T::FIELD_COUNT)?;
        let mut error = None;

        traverse::all_of_named(
            self.0,
            SerializeSink {
                sink: &mut |name: &'static str, value: &dyn erased_serde::Serialize| {
                    match state.serialize_field(name, value) {
                        Ok(()) => true,
                        Err(err) => {
                            error = Some(err);
                            false
                        }
                    }
                },
            },
        );

        match error {
            Some(err) => Err(err),
            None => state.end(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::Cell;

    use super::SerializeFields;
    use crate::derive::Record;

    #[derive(Record, serde::Serialize)]
    struct Sample {
        id: u32,
        name: String,
        scores: Vec<f32>,
        parent: Option<u32>,
        tags: BTreeMap<String, bool>,
    }

    #[derive(Record, serde::Serialize)]
    struct Outer {
        r#type: u8,
        inner: Sample,
    }

    fn sample() -> Sample {
        Sample {
            id: 9,
            name: String::from("root"),
            scores: [0.5, 1.5].into(),
            parent: None,
            tags: BTreeMap::from([(String::from("hot"), true)]),
        }
    }

    #[test]
    fn matches_derived_serialize() {
        let sample = sample();
        assert_eq!(
            serde_json::to_string(&SerializeFields(&sample)).unwrap(),
            serde_json::to_string(&sample).unwrap()
        );

        let outer = Outer {
            r#type: 2,
            inner: sample,
        };
        assert_eq!(
            serde_json::to_value(SerializeFields(&outer)).unwrap(),
            serde_json::to_value(&outer).unwrap()
        );
    }

    /// Counts how often it is serialized.
    struct Tracked<'c>(&'c Cell<usize>);

    impl serde::Serialize for Tracked<'_> {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.0.set(self.0.get() + 1);
            serializer.serialize_unit()
        }
    }

    #[derive(Record)]
    struct Failing<'c> {
        before: Tracked<'c>,
        bad: BTreeMap<(u8, u8), u8>,
        after: Tracked<'c>,
    }

    #[test]
    fn first_error_stops() {
        let calls = Cell::new(0);
        let record = Failing {
            before: Tracked(&calls),
            bad: BTreeMap::from([((1, 2), 3)]),
            after: Tracked(&calls),
        };

        let err = serde_json::to_string(&SerializeFields(&record)).unwrap_err();
        assert!(err.to_string().contains("key must be a string"));
        assert_eq!(calls.get(), 1);
    }
}
