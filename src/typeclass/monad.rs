//! Monad type class - sequencing computations that may produce no value.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::from_nullable(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let parsed = Optional::some("42").flat_map(parse_positive);
//! assert_eq!(parsed, Optional::some(42));
//!
//! let rejected = Optional::some("-1").flat_map(parse_positive);
//! assert!(rejected.is_empty());
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// A type class for applicatives whose computations can depend on earlier
/// results.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Monad;
    ///
    /// let w = Monad::flat_map(Optional::some(5), |n| if n > 10 { Optional::some(n) } else { Optional::none() });
    /// assert!(w.is_empty());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` is absent, absence propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Monad;
    ///
    /// assert_eq!(Optional::some(5).then(Optional::some("hello")), Optional::some("hello"));
    /// assert_eq!(Optional::<i32>::none().then(Optional::some("hello")), Optional::none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        // Inherent method
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}
