//! Type names recovered from the compiler's type signatures.
//!
//! [`core::any::type_name`] renders a type with every path spelled out, and
//! its exact format is not guaranteed. The functions here calibrate against a
//! sentinel type of known name before slicing any real signature, and strip
//! the module path from every segment:
//!
//! ```
//! use vc_record::name::type_name_of;
//!
//! struct Pair<A, B>(A, B);
//!
//! assert_eq!(type_name_of::<Pair<String, i32>>(), "Pair<String, i32>");
//! assert_eq!(type_name_of::<Option<Vec<u8>>>(), "Option<Vec<u8>>");
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use core::any::type_name;
use core::marker::PhantomData;

use crate::RecordError;

// -----------------------------------------------------------------------------
// Probe

const SENTINEL: &str = "Dummy";

#[allow(dead_code, reason = "only named in type signatures")]
struct Dummy;

#[allow(dead_code, reason = "only named in type signatures")]
struct Probe<T: ?Sized>(PhantomData<T>);

/// Signature of `Probe<T>`.
#[inline]
fn probe_signature<T: ?Sized>() -> &'static str {
    type_name::<Probe<T>>()
}

/// Where a type's own text sits inside a probe signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Calibration {
    /// Text before the probed type, up to and including the generic opener.
    prefix: &'static str,
    /// Text after the probed type.
    suffix: &'static str,
    /// Scope separator seen right before the sentinel's name.
    separator: &'static str,
}

fn malformed(signature: &'static str, reason: &'static str) -> RecordError {
    RecordError::MalformedSignature { signature, reason }
}

impl Calibration {
    fn from_sentinel(signature: &'static str) -> Result<Self, RecordError> {
        let at = signature
            .rfind(SENTINEL)
            .ok_or_else(|| malformed(signature, "sentinel name not found"))?;
        let open = signature[..at]
            .find('<')
            .ok_or_else(|| malformed(signature, "no generic argument list"))?;
        let prefix = &signature[..=open];
        let suffix = &signature[at + SENTINEL.len()..];

        let separator = match signature[..at].chars().next_back() {
            Some(':') if signature[..at].ends_with("::") => "::",
            Some('<') => "",
            _ => return Err(malformed(signature, "unknown boundary before sentinel")),
        };

        if !suffix.starts_with('>') {
            return Err(malformed(signature, "sentinel not closed by the probe"));
        }
        Ok(Self {
            prefix,
            suffix,
            separator,
        })
    }

    fn current() -> Result<Self, RecordError> {
        Self::from_sentinel(probe_signature::<Dummy>())
    }

    /// The probed type's text inside `signature`.
    fn slice(&self, signature: &'static str) -> Result<&'static str, RecordError> {
        let begin = self.prefix.len();
        let end = signature.len().saturating_sub(self.suffix.len());
        if !signature.starts_with(self.prefix) || !signature.ends_with(self.suffix) {
            return Err(malformed(signature, "probe pattern does not match"));
        }
        if begin >= end {
            return Err(malformed(signature, "empty type name"));
        }
        Ok(&signature[begin..end])
    }
}

// -----------------------------------------------------------------------------
// Shortening

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Removes the path in front of every segment of `full`.
fn shorten(full: &str, separator: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = 0;
    let mut rest = full;

    while let Some(c) = rest.chars().next() {
        if !separator.is_empty() && rest.starts_with(separator) {
            out.truncate(segment);
            rest = &rest[separator.len()..];
            continue;
        }
        out.push(c);
        if !is_ident_char(c) {
            segment = out.len();
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

// -----------------------------------------------------------------------------
// API

/// Short name of `T`, or [`RecordError::MalformedSignature`] if the compiler's
/// signature format is not understood.
///
/// ```
/// use vc_record::name::try_type_name_of;
///
/// assert_eq!(try_type_name_of::<[String; 2]>().unwrap(), "[String; 2]");
/// ```
pub fn try_type_name_of<T: ?Sized>() -> Result<Cow<'static, str>, RecordError> {
    let calibration = Calibration::current()?;
    let text = calibration.slice(probe_signature::<T>())?;
    if calibration.separator.is_empty() {
        return Ok(Cow::Borrowed(text));
    }
    Ok(Cow::Owned(shorten(text, calibration.separator)))
}

/// Short name of `T`, falling back to [`core::any::type_name`].
pub fn type_name_of<T: ?Sized>() -> Cow<'static, str> {
    match try_type_name_of::<T>() {
        Ok(name) => name,
        Err(err) => {
            log::warn!("{err}; using the full type name");
            Cow::Borrowed(type_name::<T>())
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
