//! Free-function forms of the constructors and type-changing combinators.
//!
//! These mirror the methods on [`Optional`] for call sites that read better
//! with the transformation named first, e.g. `map(user, |u| u.name)`.

use super::Optional;

/// Wraps `value` in a present optional.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Creates an absent optional of element type `T`.
///
/// # Examples
///
/// ```rust
/// use presence::optional::{none, Optional};
///
/// let absent = none::<i32>();
/// assert_eq!(absent, Optional::Absent);
/// ```
#[inline]
#[must_use]
pub const fn none<T>() -> Optional<T> {
    Optional::Absent
}

/// Converts a nullable value into an optional.
#[inline]
pub fn from_nullable<T>(nullable: Option<T>) -> Optional<T> {
    Optional::from_nullable(nullable)
}

/// Transforms the value of `optional` with `mapper`.
///
/// Returns `Present(mapper(value))` for a present input. For an absent input
/// returns `Absent` without invoking `mapper`.
///
/// # Examples
///
/// ```rust
/// use presence::optional::{self, Optional};
///
/// let label = optional::map(Optional::some(42), |x| format!("Number: {x}"));
/// assert_eq!(label, Optional::some("Number: 42".to_string()));
/// ```
#[inline]
pub fn map<T, U, F>(optional: Optional<T>, mapper: F) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    optional.map(mapper)
}

/// Transforms the value of `optional` with a mapper that may itself fail.
///
/// The optional returned by `mapper` is passed through as is.
///
/// # Examples
///
/// ```rust
/// use presence::optional::{self, Optional};
///
/// let parse = |text: &str| Optional::from_nullable(text.parse::<i32>().ok());
/// assert_eq!(optional::flat_map(Optional::some("42"), parse), Optional::some(42));
/// assert_eq!(optional::flat_map(Optional::some("invalid"), parse), Optional::none());
/// ```
#[inline]
pub fn flat_map<T, U, F>(optional: Optional<T>, mapper: F) -> Optional<U>
where
    F: FnOnce(T) -> Optional<U>,
{
    optional.flat_map(mapper)
}

/// Combines two optionals with `combiner` when both are present.
///
/// `combiner` is invoked only in the both-present case.
///
/// # Examples
///
/// ```rust
/// use presence::optional::{self, Optional};
///
/// let joined = optional::zip(Optional::some(42), Optional::some("hello"), |a, b| format!("{a}-{b}"));
/// assert_eq!(joined, Optional::some("42-hello".to_string()));
///
/// let missing = optional::zip(Optional::some(42), Optional::<&str>::none(), |a, b| format!("{a}-{b}"));
/// assert!(missing.is_empty());
/// ```
#[inline]
pub fn zip<T, U, R, F>(first: Optional<T>, second: Optional<U>, combiner: F) -> Optional<R>
where
    F: FnOnce(T, U) -> R,
{
    first.zip_with(second, combiner)
}
