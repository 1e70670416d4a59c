use thiserror::Error;

/// Runtime view of the build-time classification failures.
///
/// Every operation that can fail for a record type is already rejected by the
/// type checker. These values are returned by the query functions that take a
/// record type which may not qualify, such as
/// [`probe_arity`](crate::probe::probe_arity) or
/// [`field_name_at`](crate::name::field_name_at), so callers such as
/// diagnostics and tooling can explain why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    /// The field count exceeds the cap of the record type.
    #[error("`{type_name}` declares more than {max_fields} fields and cannot be reflected")]
    Unreflectable {
        type_name: &'static str,
        max_fields: usize,
    },
    /// The record embeds a base record, so its own fields cannot be told apart.
    #[error("`{type_name}` embeds a base record and cannot be decomposed")]
    HasBase { type_name: &'static str },
    /// The record has no name table (unnamed, empty, has-base or reference fields).
    #[error("field {index} of `{type_name}` has no resolvable name")]
    NameUnavailable {
        type_name: &'static str,
        index: usize,
    },
    /// A runtime index past the last field.
    #[error("field index {index} is out of bounds for `{type_name}` with {len} fields")]
    IndexOutOfBounds {
        type_name: &'static str,
        index: usize,
        len: usize,
    },
    /// The compiler's type signature could not be sliced.
    #[error("type signature `{signature}` cannot be sliced: {reason}")]
    MalformedSignature {
        signature: &'static str,
        reason: &'static str,
    },
}
