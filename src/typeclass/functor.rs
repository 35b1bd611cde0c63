//! Functor type class - mapping over the contained value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::Functor;
//!
//! let transformed = Optional::some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Optional::some("5".to_string()));
//!
//! let absent: Optional<i32> = Optional::none();
//! assert_eq!(absent.fmap(|n| n.to_string()), Optional::none());
//! ```

use super::higher::TypeConstructor;
use crate::optional::Optional;

/// A type class for types that can have a function mapped over their contents.
///
/// For optional types the function runs at most once: exactly once when a
/// value is present and never when it is absent.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Functor;
    ///
    /// assert_eq!(Optional::some(5).fmap(|n| n * 2), Optional::some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Functor;
    ///
    /// let name = Optional::some("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Optional::some(5));
    /// assert!(name.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace_with<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    /// use presence::typeclass::Functor;
    ///
    /// assert_eq!(Optional::some(5).void(), Optional::some(()));
    /// assert_eq!(Optional::<i32>::none().void(), Optional::none());
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace_with(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
