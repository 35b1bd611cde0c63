//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, which is either
//! `Present(T)` or `Absent`. The absent case carries no payload at all, so
//! there is nothing to read by mistake.
//!
//! Same-type refinements (`filter`, `or`, `or_else`, ...) are methods.
//! Type-changing transformations are available both as methods and as free
//! functions ([`map`], [`flat_map`], [`zip`]) parameterized over the input
//! and output element types.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::{self, Optional};
//!
//! let present = Optional::some(42);
//! let absent: Optional<i32> = Optional::none();
//!
//! assert_eq!(present.or_else(0), 42);
//! assert_eq!(absent.or_else(100), 100);
//!
//! let doubled = optional::map(present, |x| x * 2);
//! assert_eq!(doubled.to_string(), "Some(84)");
//! ```

mod functions;
mod iter;
#[cfg(feature = "serde")]
mod serialization;

pub use functions::{flat_map, from_nullable, map, none, some, zip};
pub use iter::{IntoIter, Iter};

use crate::error::{EmptyValueError, empty_value_failed};
use std::fmt;

/// A value that is either present or absent.
///
/// `Optional<T>` makes absence explicit in the type. Every combinator
/// consumes or borrows the receiver and produces a new `Optional`; the only
/// operations that change an existing instance take `&mut self` and say so
/// in their names: the interop borrows `as_mut` and `to_nullable_mut`, and the
/// deserialization target `assign_from_json`.
///
/// Equality is structural: two absent values are equal, an absent and a
/// present value are never equal, and two present values are equal iff their
/// contents are equal under `T: PartialEq`. Ordering places `Absent` before
/// every `Present` value.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use presence::optional::Optional;
///
/// let value = Optional::some(84).filter(|x| *x > 50);
/// assert_eq!(value, Optional::Present(84));
///
/// let value = Optional::some(42).filter(|x| *x > 50);
/// assert_eq!(value, Optional::Absent);
/// ```
///
/// There is no in-place take or replace; a new value is a new `Optional`:
///
/// ```compile_fail
/// use presence::optional::Optional;
///
/// let mut value = Optional::some(1);
/// let taken = value.take();
/// ```
///
/// ```compile_fail
/// use presence::optional::Optional;
///
/// let mut value = Optional::some(1);
/// for element in &mut value {
///     *element += 1;
/// }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Optional<T> {
    /// No value.
    #[default]
    Absent,
    /// A value of type `T`.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` in a present optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let value = Optional::some("hello");
    /// assert!(value.is_present());
    /// assert_eq!(value.get(), "hello");
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent optional.
    ///
    /// The element type cannot be inferred from an argument, so it has to be
    /// named or inferable from the assignment target.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let absent = Optional::<String>::none();
    /// assert!(absent.is_empty());
    ///
    /// let also_absent: Optional<u8> = Optional::none();
    /// assert!(also_absent.is_empty());
    /// ```
    ///
    /// Without a type the call is rejected:
    ///
    /// ```compile_fail
    /// use presence::optional::Optional;
    ///
    /// let absent = Optional::none();
    /// assert!(absent.is_empty());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Converts a nullable value into an optional.
    ///
    /// `None` becomes `Absent` and `Some(value)` becomes `Present(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some(42)), Optional::Present(42));
    /// assert_eq!(Optional::<i32>::from_nullable(None), Optional::Absent);
    /// ```
    #[inline]
    pub fn from_nullable(nullable: Option<T>) -> Self {
        match nullable {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Builds an owned optional from a nullable reference, cloning the referent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let name = String::from("ada");
    /// assert_eq!(Optional::from_nullable_ref(Some(&name)), Optional::some(name.clone()));
    /// assert_eq!(Optional::<String>::from_nullable_ref(None), Optional::Absent);
    /// ```
    #[inline]
    pub fn from_nullable_ref(nullable: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self::from_nullable(nullable.cloned())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert!(Optional::some(1).is_present());
    /// assert!(!Optional::<i32>::none().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// Always the negation of [`is_present`](Self::is_present).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the contained value, consuming the optional.
    ///
    /// Call this only after checking [`is_present`](Self::is_present), or when
    /// absence would be a bug.
    ///
    /// # Panics
    ///
    /// Panics with an [`EmptyValueError`] message if the optional is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::some(42).get(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use presence::optional::Optional;
    ///
    /// let absent: Optional<i32> = Optional::none();
    /// absent.get();
    /// ```
    #[inline]
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => empty_value_failed("get"),
        }
    }

    /// Returns a reference to the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an [`EmptyValueError`] message if the optional is absent.
    #[inline]
    #[track_caller]
    pub fn get_ref(&self) -> &T {
        match self {
            Self::Present(value) => value,
            Self::Absent => empty_value_failed("get_ref"),
        }
    }

    /// Returns the contained value, or an [`EmptyValueError`] if absent.
    ///
    /// # Errors
    ///
    /// Returns `EmptyValueError` when the optional is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::some(7).try_get(), Ok(7));
    /// assert!(Optional::<i32>::none().try_get().is_err());
    /// ```
    #[inline]
    pub fn try_get(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueError {
                method_name: "try_get",
            }),
        }
    }

    /// Returns the contained value, panicking with `message` if absent.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if the optional is absent.
    ///
    /// # Examples
    ///
    /// ```should_panic(expected = "user id must be set")
    /// use presence::optional::Optional;
    ///
    /// let user_id: Optional<u64> = Optional::none();
    /// user_id.or_else_panic("user id must be set");
    /// ```
    #[inline]
    #[track_caller]
    pub fn or_else_panic(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{message}"),
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns a nullable shared borrow of the contained value.
    ///
    /// The reference aliases the optional's own storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let value = Optional::some(String::from("hello"));
    /// assert_eq!(value.to_nullable().map(String::as_str), Some("hello"));
    /// assert_eq!(Optional::<String>::none().to_nullable(), None);
    /// ```
    #[inline]
    pub const fn to_nullable(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns a nullable mutable borrow of the contained value.
    ///
    /// Writing through the returned reference changes this optional. This is
    /// the interop escape hatch for APIs that fill in a value by reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut value = Optional::some(1);
    /// if let Some(slot) = value.to_nullable_mut() {
    ///     *slot = 2;
    /// }
    /// assert_eq!(value, Optional::Present(2));
    /// ```
    #[inline]
    pub const fn to_nullable_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts the optional into a standard `Option`, consuming it.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Fallback & Defaulting
    // =========================================================================

    /// Returns the contained value or `default`.
    ///
    /// `default` is evaluated eagerly by the caller; use
    /// [`or_else_get`](Self::or_else_get) to defer the work.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::some(42).or_else(0), 42);
    /// assert_eq!(Optional::<i32>::none().or_else(100), 100);
    /// ```
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one with `supplier`.
    ///
    /// `supplier` runs only when the optional is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let fallback = Optional::<String>::none().or_else_get(|| "fallback".to_string());
    /// assert_eq!(fallback, "fallback");
    /// ```
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }

    /// Returns `self` if present, otherwise `other` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::some(1).or(Optional::some(2)), Optional::Present(1));
    /// assert_eq!(Optional::none().or(Optional::some(2)), Optional::Present(2));
    /// assert_eq!(Optional::<i32>::none().or(Optional::none()), Optional::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the optional built by `supplier`.
    #[inline]
    #[must_use]
    pub fn or_else_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => supplier(),
        }
    }

    /// Returns whichever of `self` and `other` is present, if exactly one is.
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (present @ Self::Present(_), Self::Absent)
            | (Self::Absent, present @ Self::Present(_)) => present,
            _ => Self::Absent,
        }
    }

    /// Returns `other` if `self` is present, otherwise `Absent`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `mapper` to the contained value.
    ///
    /// `mapper` runs exactly once on a present value and never on an absent
    /// one. See also the free function [`map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// assert_eq!(Optional::some(21).map(|x| x * 2), Optional::Present(42));
    /// assert_eq!(Optional::<i32>::none().map(|x| x * 2), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(mapper(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies `mapper` and returns its result without re-wrapping.
    ///
    /// See also the free function [`flat_map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::some(x / 2) } else { Optional::none() };
    /// assert_eq!(Optional::some(4).flat_map(half), Optional::Present(2));
    /// assert_eq!(Optional::some(3).flat_map(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => mapper(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.flat_map(mapper)
    }

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// `predicate` is never invoked on an absent receiver.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = &self
            && predicate(value)
        {
            return self;
        }
        Self::Absent
    }

    /// Combines two present values with `combiner`.
    ///
    /// `combiner` runs only when both `self` and `other` are present. See also
    /// the free function [`zip`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let joined = Optional::some(42).zip_with(Optional::some("hello"), |a, b| format!("{a}-{b}"));
    /// assert_eq!(joined, Optional::Present("42-hello".to_string()));
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Optional<U>, combiner: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Present(left), Optional::Present(right)) => {
                Optional::Present(combiner(left, right))
            }
            _ => Optional::Absent,
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Applies `mapper` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, mapper: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => mapper(value),
            Self::Absent => default,
        }
    }

    /// Applies `mapper` to the contained value, or computes a default.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, mapper: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => mapper(value),
            Self::Absent => default(),
        }
    }

    /// Converts to `Ok(value)`, or `Err(error)` when absent.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if the optional is absent.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    /// Converts to `Ok(value)`, or `Err(error())` when absent.
    ///
    /// # Errors
    ///
    /// Returns the error built by `error` if the optional is absent.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error()),
        }
    }

    /// Calls `inspector` with a reference to the value, then returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(ref value) = self {
            inspector(value);
        }
        self
    }

    /// Returns `true` if a value is present and equal to `candidate`.
    #[inline]
    pub fn contains<U>(&self, candidate: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Self::Present(value) => candidate == value,
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Conditional Execution
    // =========================================================================

    /// Calls `consumer` with the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut seen = Vec::new();
    /// Optional::some(3).if_present(|x| seen.push(*x));
    /// Optional::<i32>::none().if_present(|x| seen.push(*x));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            consumer(value);
        }
    }

    /// Calls exactly one of `consumer` (present) or `absent_action` (absent).
    #[inline]
    pub fn if_present_or_else<F, G>(&self, consumer: F, absent_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Self::Present(value) => consumer(value),
            Self::Absent => absent_action(),
        }
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Returns `true` if both optionals are absent, or both are present with
    /// equal values.
    ///
    /// Same as `==`.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self == other
    }

    /// Compares two optionals by the rendered text of their values.
    ///
    /// Opt-in compatibility equality for payloads without a meaningful
    /// `PartialEq`. Values with different structure but identical `Display`
    /// output compare equal here, so this is an approximation, not a
    /// value-equality law.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// use std::fmt;
    ///
    /// #[derive(PartialEq)]
    /// struct Reading {
    ///     value: i32,
    ///     sensor: u8,
    /// }
    ///
    /// impl fmt::Display for Reading {
    ///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(formatter, "{}", self.value)
    ///     }
    /// }
    ///
    /// let first = Optional::some(Reading { value: 20, sensor: 1 });
    /// let second = Optional::some(Reading { value: 20, sensor: 2 });
    /// assert!(first != second);
    /// assert!(first.equals_textually(&second));
    /// assert!(Optional::<Reading>::none().equals_textually(&Optional::none()));
    /// ```
    pub fn equals_textually(&self, other: &Self) -> bool
    where
        T: fmt::Display,
    {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => left.to_string() == right.to_string(),
            (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the contained value, if any.
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.to_nullable())
    }
}

// =============================================================================
// Nested and Borrowed Optionals
// =============================================================================

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T, U> Optional<(T, U)> {
    /// Splits an optional pair into a pair of optionals.
    #[inline]
    pub fn unzip(self) -> (Optional<T>, Optional<U>) {
        match self {
            Self::Present((left, right)) => (Optional::Present(left), Optional::Present(right)),
            Self::Absent => (Optional::Absent, Optional::Absent),
        }
    }
}

impl<T: Clone> Optional<&T> {
    /// Clones the referenced value into an owned optional.
    #[inline]
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Optional<&T> {
    /// Copies the referenced value into an owned optional.
    #[inline]
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    /// Renders `Some(<value>)` when present and `None` when absent.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Some({value})"),
            Self::Absent => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    /// `Some(value)` becomes `Present(value)` and `None` becomes `Absent`.
    #[inline]
    fn from(nullable: Option<T>) -> Self {
        Self::from_nullable(nullable)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// `Present(value)` becomes `Some(value)` and `Absent` becomes `None`.
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<'a, T> From<&'a Optional<T>> for Optional<&'a T> {
    #[inline]
    fn from(optional: &'a Optional<T>) -> Self {
        optional.as_ref()
    }
}

// =============================================================================
// Collecting
// =============================================================================

impl<A, V> FromIterator<Optional<A>> for Optional<V>
where
    V: FromIterator<A>,
{
    /// Collects every present value, or returns `Absent` at the first absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let all: Optional<Vec<i32>> = vec![Optional::some(1), Optional::some(2)].into_iter().collect();
    /// assert_eq!(all, Optional::Present(vec![1, 2]));
    ///
    /// let gap: Optional<Vec<i32>> = vec![Optional::some(1), Optional::none()].into_iter().collect();
    /// assert_eq!(gap, Optional::Absent);
    /// ```
    fn from_iter<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Optional<A>>,
    {
        iterator
            .into_iter()
            .map(Optional::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// Optional<T> is exactly as thread-safe as T.
static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::cell::Cell<i32>>: Sync);
