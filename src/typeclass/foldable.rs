//! Foldable type class - folding zero or one values to a summary.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Foldable;
//!
//! assert_eq!(Optional::some(10).fold_left(5, |accumulator, element| accumulator + element), 15);
//! assert_eq!(Optional::<i32>::none().fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::optional::Optional;

/// A type class for data structures that can be folded to a summary value.
///
/// Only `fold_left` and `fold_right` are required; the rest are derived.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Foldable;
    ///
    /// let text: String = Optional::some(42).fold_map(|n| n.to_string());
    /// assert_eq!(text, "42");
    ///
    /// let text: String = Optional::<i32>::none().fold_map(|n| n.to_string());
    /// assert_eq!(text, "");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    fn find<P>(self, mut predicate: P) -> Optional<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Optional::Absent, |accumulator, element| {
            if accumulator.is_present() {
                accumulator
            } else if predicate(&element) {
                Optional::Present(element)
            } else {
                Optional::Absent
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_present()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// An empty structure satisfies every predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Optional<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Present(value) => function(init, value),
            Self::Absent => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Present(value) => function(value, init),
            Self::Absent => init,
        }
    }

    fn length(&self) -> usize {
        usize::from(self.is_present())
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}
