//! Error types for the lrulist library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when the slot pool or the recency chain is
//!   inconsistent (`check_invariants` methods).
//! - [`ConfigError`]: Returned when list construction parameters are invalid
//!   (zero capacity).
//!
//! Lookup misses are not errors: `remove` reports them as `None` and `touch`
//! as `false`, and a full list absorbs inserts by evicting its LRU entry.
//!
//! ## Example Usage
//!
//! ```
//! use lrulist::error::ConfigError;
//! use lrulist::list::LruList;
//!
//! // Fallible constructor for user-configurable parameters
//! let list: Result<LruList<&str>, ConfigError> = LruList::try_new(8);
//! assert!(list.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = LruList::<&str>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal list invariants are violated.
///
/// Produced by `check_invariants` methods on the pool and list types
/// (e.g. [`LruList::check_invariants`](crate::list::LruList::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when list construction parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LruList::try_new`](crate::list::LruList::try_new) and
/// [`ListBuilder::try_build`](crate::builder::ListBuilder::try_build).
///
/// # Example
///
/// ```
/// use lrulist::list::IndexedLruList;
///
/// let err = IndexedLruList::<u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    pub(crate) fn check_capacity(capacity: usize) -> Result<usize, Self> {
        if capacity == 0 {
            return Err(Self::new("capacity must be > 0"));
        }
        Ok(capacity)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("free chain visits slot 3 twice");
        assert_eq!(err.to_string(), "free chain visits slot 3 twice");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("bad capacity");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad capacity"));
    }

    #[test]
    fn config_check_capacity() {
        assert_eq!(ConfigError::check_capacity(8), Ok(8));
        let err = ConfigError::check_capacity(0).unwrap_err();
        assert!(err.message().contains("capacity"));
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }
}
