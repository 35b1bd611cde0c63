//! # presence
//!
//! A typed optional value with a composable combinator algebra.
//!
//! ## Overview
//!
//! [`Optional<T>`](optional::Optional) is either `Present(T)` or `Absent`.
//! It replaces null and sentinel handling with an explicit type and a small,
//! predictable set of operations:
//!
//! - **Construction**: `some`, `none`, `from_nullable`
//! - **Inspection**: `is_present`, `is_empty`, `get`, `or_else_panic`
//! - **Fallback**: `or_else`, `or_else_get`, `or`
//! - **Transformation**: `map`, `flat_map`, `filter`, `zip`
//! - **Conditional execution**: `if_present`, `if_present_or_else`
//! - **Serialization**: serde support that is transparent to the format
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor, Applicative, Monad, ... instances (default)
//! - `serde`: `Serialize`/`Deserialize` for `Optional<T>`
//! - `json`: JSON helpers returning typed errors (implies `serde`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use presence::prelude::*;
//!
//! let answer = optional::map(Optional::some(42), |x| x * 2);
//! assert_eq!(answer.to_string(), "Some(84)");
//!
//! let filtered = Optional::some(42).filter(|x| *x > 50).or_else(0);
//! assert_eq!(filtered, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the `Optional` type, its free functions (through the
/// `optional` module name) and the error types.
///
/// # Usage
///
/// ```rust
/// use presence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::EmptyValueError;
    pub use crate::optional::{self, Optional};

    #[cfg(feature = "json")]
    pub use crate::error::{DeserializationError, SerializationError};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "json")]
pub mod json;
