//! Monoid type class - semigroups with an identity element.
//!
//! `Absent` is the identity for `Optional<T>` whenever `T` is a semigroup,
//! which makes any semigroup into a monoid by wrapping it.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Monoid;
//!
//! let words = vec![
//!     Optional::some(String::from("a")),
//!     Optional::none(),
//!     Optional::some(String::from("b")),
//! ];
//! assert_eq!(Optional::combine_all(words), Optional::some(String::from("ab")));
//! ```

use super::semigroup::Semigroup;
use crate::optional::Optional;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Monoid;
    ///
    /// assert_eq!(<String as Monoid>::empty(), "");
    /// assert!(<Optional<String> as Monoid>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<T: Semigroup> Monoid for Optional<T> {
    fn empty() -> Self {
        Self::Absent
    }
}
