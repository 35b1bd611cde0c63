//! Alternative type class - choosing the first present value.
//!
//! # Laws
//!
//! ```text
//! empty().alt(x) == x
//! x.alt(empty()) == x
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Alternative;
//!
//! let first: Optional<i32> = Optional::none();
//! assert_eq!(first.alt(Optional::some(42)), Optional::some(42));
//! assert_eq!(Optional::some(1).alt(Optional::some(2)), Optional::some(1));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// A type class for applicatives with a failure value and a choice operation.
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Alternative;
    ///
    /// let empty: Optional<i32> = <Optional<()> as Alternative>::empty();
    /// assert!(empty.is_empty());
    /// ```
    fn empty<A>() -> Self::WithType<A>;

    /// Returns `self` if it holds a value, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` if `condition` holds, otherwise fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::{Alternative, Functor};
    ///
    /// fn positive(n: i32) -> Optional<i32> {
    ///     <Optional<()>>::guard(n > 0).fmap(move |()| n)
    /// }
    ///
    /// assert_eq!(positive(5), Optional::some(5));
    /// assert!(positive(-3).is_empty());
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Turns failure into a successful `Absent` result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Alternative;
    ///
    /// assert_eq!(Optional::some(42).optional(), Optional::some(Optional::some(42)));
    /// assert_eq!(Optional::<i32>::none().optional(), Optional::some(Optional::none()));
    /// ```
    fn optional(self) -> Self::WithType<Optional<Self::Inner>>
    where
        Self: Sized;

    /// Returns the first alternative that holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Alternative;
    ///
    /// let candidates = vec![Optional::none(), Optional::some(1), Optional::some(2)];
    /// assert_eq!(Optional::choice(candidates), Optional::some(1));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Optional<A> {
    #[inline]
    fn empty<B>() -> Optional<B> {
        Optional::Absent
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Optional<Self> {
        Optional::Present(self)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_present)
            .unwrap_or(Self::Absent)
    }
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Option<Optional<A>> {
        Some(Optional::from_nullable(self))
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}
