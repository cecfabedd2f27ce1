//! Tagged results for table lookups that can fall back to an approximation.

/// A value read from an embedded table, tagged with whether the table
/// actually covered the query.
///
/// `OutOfRange` still carries a usable value (an identity or nearest-rule
/// approximation) so callers can proceed, but must be surfaced as reduced
/// confidence rather than consumed as exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup<T> {
    /// The query was inside the table; the value is exact.
    Found(T),
    /// The query was outside the table; the value is an approximation.
    OutOfRange(T),
}

impl<T> Lookup<T> {
    /// Borrow the carried value regardless of the tag.
    pub fn value(&self) -> &T {
        match self {
            Self::Found(v) | Self::OutOfRange(v) => v,
        }
    }

    /// Take the carried value regardless of the tag.
    pub fn into_inner(self) -> T {
        match self {
            Self::Found(v) | Self::OutOfRange(v) => v,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// `Some` only for an exact value.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::OutOfRange(_) => None,
        }
    }

    /// Transform the value, keeping the tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(v) => Lookup::Found(f(v)),
            Self::OutOfRange(v) => Lookup::OutOfRange(f(v)),
        }
    }
}
