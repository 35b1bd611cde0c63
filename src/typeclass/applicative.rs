//! Applicative type class - lifting values and combining independent optionals.
//!
//! For optional types, combining succeeds only when every input is present;
//! the combining function is never called otherwise.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Applicative;
//!
//! let x: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(x, Optional::some(42));
//!
//! let sum = Optional::some(3).map2(Optional::some(4), |x, y| x + y);
//! assert_eq!(sum, Optional::some(7));
//! ```

use super::functor::Functor;
use crate::optional::Optional;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Applicative;
    ///
    /// let x: Optional<&str> = <Optional<()>>::pure("hello");
    /// assert_eq!(x, Optional::some("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Applicative;
    ///
    /// let joined = Optional::some(42).map2(Optional::some("hello"), |a, b| format!("{a}-{b}"));
    /// assert_eq!(joined, Optional::some("42-hello".to_string()));
    ///
    /// let missing = Optional::some(42).map2(Optional::<&str>::none(), |a, b| format!("{a}-{b}"));
    /// assert!(missing.is_empty());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Requires both values, keeping the left one.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Requires both values, keeping the right one.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Applicative;
    ///
    /// let function: Optional<fn(i32) -> i32> = Optional::some(|x| x + 1);
    /// assert_eq!(function.apply(Optional::some(5)), Optional::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Optional::Present(a), Optional::Present(b), Optional::Present(c)) => {
                Optional::Present(function(a, b, c))
            }
            _ => Optional::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.zip_with(other, |function, value| function(value))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}
