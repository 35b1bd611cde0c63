//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` as a type constructor directly.
//! [`TypeConstructor`] works around this with a GAT: `Optional<A>` knows its
//! element type `A` and how to spell itself at any other element type `B`.
//!
//! # Example
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Optional<i32> = Optional::some(42);
//! let absent: Optional<String> = transform_type(present);
//! assert!(absent.is_empty());
//! ```

use crate::optional::Optional;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Optional<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Optional<i32>`, `WithType<String>` is `Optional<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
