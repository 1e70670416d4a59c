use crate::Arity;

// -----------------------------------------------------------------------------
// RecordInfo

/// Compile-time description of a record type.
///
/// Built in a `const` by `#[derive(Record)]`; the builder methods are `const fn`
/// so the whole value is available during constant evaluation.
///
/// # Examples
///
/// ```
/// use vc_record::{Record, derive::Record};
///
/// #[derive(Record)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// let info = Point::INFO;
/// assert_eq!(info.type_name(), "Point");
/// assert_eq!(info.field_count(), Some(2));
/// assert_eq!(info.field_names(), Some(&["x", "y"][..]));
/// assert!(info.is_decomposable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordInfo {
    type_name: &'static str,
    module_path: &'static str,
    arity: Arity,
    has_base: bool,
    field_names: Option<&'static [&'static str]>,
}

impl RecordInfo {
    /// Creates the description of a record without base and without names.
    #[inline]
    pub const fn new(type_name: &'static str, module_path: &'static str, arity: Arity) -> Self {
        Self {
            type_name,
            module_path,
            arity,
            has_base: false,
            field_names: None,
        }
    }

    /// Marks the record as embedding a base record.
    #[inline]
    pub const fn with_base(mut self) -> Self {
        self.has_base = true;
        self
    }

    /// Attaches the declared field names, in declaration order.
    #[inline]
    pub const fn with_field_names(mut self, names: &'static [&'static str]) -> Self {
        self.field_names = Some(names);
        self
    }

    /// The type's identifier, without module path or generics.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The module the type is declared in, as given by `module_path!()`.
    #[inline]
    pub const fn module_path(&self) -> &'static str {
        self.module_path
    }

    #[inline]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    #[inline]
    pub const fn field_count(&self) -> Option<usize> {
        self.arity.get()
    }

    #[inline]
    pub const fn has_base(&self) -> bool {
        self.has_base
    }

    /// Declared names, present only for nameable records.
    #[inline]
    pub const fn field_names(&self) -> Option<&'static [&'static str]> {
        self.field_names
    }

    #[inline]
    pub const fn is_reflectable(&self) -> bool {
        self.arity.is_reflectable()
    }

    /// Reflectable and without base: the record can be split into fields.
    #[inline]
    pub const fn is_decomposable(&self) -> bool {
        self.is_reflectable() && !self.has_base
    }

    #[inline]
    pub const fn is_namable(&self) -> bool {
        self.field_names.is_some()
    }
}

// -----------------------------------------------------------------------------
// Record

/// A type whose field structure is known at compile time.
///
/// This is the weakest level of the classification: every type deriving
/// `Record` implements it, including records above the field cap and records
/// embedding a base. Stronger capabilities are separate traits:
///
/// - [`Decompose`](crate::Decompose): reflectable and without base.
/// - [`NamedFields`](crate::NamedFields): decomposable with resolvable names.
/// - [`Traverse`](crate::Traverse) and its siblings: decomposable, visited in order.
///
/// Implement it with `#[derive(Record)]`; manual implementations must keep
/// [`INFO`](Record::INFO) consistent with the other traits.
pub trait Record {
    const INFO: RecordInfo;
}
