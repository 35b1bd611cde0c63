//! Type class instances for optional values.
//!
//! This module provides the type classes (traits) that let [`Optional`]
//! take part in generic functional code, together with instances for the
//! standard library's `Option` so both can be used interchangeably:
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Lifting values and combining independent optionals
//! - [`Monad`]: Sequencing computations that may produce no value
//! - [`Alternative`]: Choosing the first present value
//! - [`Foldable`]: Folding zero or one values to a summary
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name
//! `Optional<B>` given `Optional<A>`, which is what the traits above need.
//!
//! [`Optional`]: crate::optional::Optional
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//! use presence::typeclass::{Applicative, Functor, Monad};
//!
//! let x: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(x, Optional::some(42));
//!
//! let sum = Optional::some(1).map2(Optional::some(2), |a, b| a + b);
//! assert_eq!(sum, Optional::some(3));
//!
//! let text = Optional::some(5).fmap(|n| n.to_string());
//! assert_eq!(text, Optional::some("5".to_string()));
//!
//! let next = Optional::some(5).then(Optional::some("done"));
//! assert_eq!(next, Optional::some("done"));
//! ```

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
