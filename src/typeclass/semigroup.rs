//! Semigroup type class - types with an associative binary operation.
//!
//! For optional values the semigroup lifts the element's operation: two
//! present values are combined, and an absent side is ignored.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Semigroup;
//!
//! let greeting = Optional::some(String::from("Hello, "));
//! let name = Optional::some(String::from("World!"));
//! assert_eq!(greeting.combine(name), Optional::some(String::from("Hello, World!")));
//!
//! let missing: Optional<String> = Optional::none();
//! assert_eq!(missing.combine(Optional::some(String::from("x"))), Optional::some(String::from("x")));
//! ```

use crate::optional::Optional;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `Absent` if the iterator is empty. For a version that returns
    /// the identity element instead, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Semigroup;
    ///
    /// let parts = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(parts), Optional::some(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), Optional::none());
    /// ```
    fn reduce_all<I>(iterator: I) -> Optional<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(Self::combine)
            .into()
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Optional<T> Implementation
// =============================================================================

impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (present @ Self::Present(_), Self::Absent) | (Self::Absent, present) => present,
        }
    }
}
