use core::fmt;

/// Default upper bound on the number of fields a record may declare.
///
/// Types above the cap stay countable (they implement [`Record`](crate::Record))
/// but receive no decomposition, naming or traversal support. The cap can be
/// changed per type with `#[record(max_fields = N)]`.
pub const MAX_FIELDS: usize = 100;

/// The field count of a record type.
///
/// # Examples
///
/// ```
/// use vc_record::Arity;
///
/// assert_eq!(Arity::probe(5, 100), Arity::Fields(5));
/// assert_eq!(Arity::probe(100, 100).get(), Some(100));
/// assert!(!Arity::probe(101, 100).is_reflectable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// A reflectable record with this many top-level fields.
    Fields(usize),
    /// The count could not be established within `max_fields`.
    Unreflectable { max_fields: usize },
}

impl Arity {
    /// Classify a declared field count against a cap.
    ///
    /// The derive reads the declared count straight from the struct
    /// definition, so no candidate counts are tried; only the cap is checked.
    pub const fn probe(declared: usize, max_fields: usize) -> Self {
        if declared <= max_fields {
            Self::Fields(declared)
        } else {
            Self::Unreflectable { max_fields }
        }
    }

    /// Count of a record embedding `base`, followed by `own` declared fields.
    ///
    /// The base's fields are flattened into the count, so the result describes
    /// the full member layout. An unreflectable base makes the record
    /// unreflectable too.
    ///
    /// ```
    /// use vc_record::Arity;
    ///
    /// assert_eq!(Arity::inherit(Arity::Fields(5), 1, 100), Arity::Fields(6));
    /// assert_eq!(
    ///     Arity::inherit(Arity::Unreflectable { max_fields: 4 }, 0, 100),
    ///     Arity::Unreflectable { max_fields: 100 },
    /// );
    /// ```
    pub const fn inherit(base: Arity, own: usize, max_fields: usize) -> Self {
        match base {
            Self::Fields(count) => Self::probe(count + own, max_fields),
            Self::Unreflectable { .. } => Self::Unreflectable { max_fields },
        }
    }

    /// Returns the field count, or `None` if unreflectable.
    #[inline]
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Fields(count) => Some(count),
            Self::Unreflectable { .. } => None,
        }
    }

    /// Returns `true` if the count is known.
    #[inline]
    pub const fn is_reflectable(self) -> bool {
        matches!(self, Self::Fields(_))
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(count) => write!(f, "{count} fields"),
            Self::Unreflectable { max_fields } => write!(f, "unreflectable (> {max_fields} fields)"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Arity, MAX_FIELDS};

    #[test]
    fn empty_record() {
        assert_eq!(Arity::probe(0, MAX_FIELDS), Arity::Fields(0));
        assert_eq!(Arity::probe(0, 0), Arity::Fields(0));
    }

    #[test]
    fn cap_boundary() {
        assert_eq!(Arity::probe(MAX_FIELDS, MAX_FIELDS), Arity::Fields(MAX_FIELDS));
        assert_eq!(
            Arity::probe(MAX_FIELDS + 1, MAX_FIELDS),
            Arity::Unreflectable { max_fields: MAX_FIELDS }
        );
    }

    #[test]
    fn inherit_counts_base_fields() {
        assert_eq!(Arity::inherit(Arity::Fields(0), 0, MAX_FIELDS), Arity::Fields(0));
        assert_eq!(Arity::inherit(Arity::Fields(3), 2, 4), Arity::Unreflectable { max_fields: 4 });
    }

    #[test]
    fn usable_in_const() {
        const ARITY: Arity = Arity::probe(7, MAX_FIELDS);
        const COUNT: Option<usize> = ARITY.get();
        assert_eq!(COUNT, Some(7));
    }

    #[test]
    fn display() {
        assert_eq!(Arity::Fields(2).to_string(), "2 fields");
        assert_eq!(
            Arity::Unreflectable { max_fields: 100 }.to_string(),
            "unreflectable (> 100 fields)"
        );
    }
}
