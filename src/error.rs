//! Error types for optional values.
//!
//! Two kinds of failure exist:
//!
//! - [`EmptyValueError`]: a programmer error. Reading the value of an
//!   `Absent` optional is a precondition violation, so [`Optional::get`]
//!   panics with this error's message. [`Optional::try_get`] hands it back as
//!   a value for callers that want to branch on it instead.
//! - [`DeserializationError`] and [`SerializationError`] (feature `json`):
//!   data errors raised at the JSON boundary. These are recoverable and carry
//!   the underlying parser error unchanged as their [`source`].
//!
//! [`Optional::get`]: crate::optional::Optional::get
//! [`Optional::try_get`]: crate::optional::Optional::try_get
//! [`source`]: std::error::Error::source

/// Represents an attempt to read the value of an `Absent` optional.
///
/// # Examples
///
/// ```rust
/// use presence::error::EmptyValueError;
///
/// let error = EmptyValueError { method_name: "get" };
/// assert_eq!(
///     format!("{}", error),
///     "called `Optional::get()` on an `Absent` value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyValueError {
    /// The name of the accessor that found no value.
    pub method_name: &'static str,
}

impl std::fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "called `Optional::{}()` on an `Absent` value",
            self.method_name
        )
    }
}

impl std::error::Error for EmptyValueError {}

/// Raises the programmer-error panic for an accessor called on `Absent`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn empty_value_failed(method_name: &'static str) -> ! {
    panic!("{}", EmptyValueError { method_name })
}

/// Represents JSON input that does not describe an `Optional<T>`.
///
/// The wrapped [`serde_json::Error`] is kept intact. Its line and column are
/// available through this type, and its message through
/// [`source`](std::error::Error::source); `Display` states only what failed.
///
/// # Examples
///
/// ```rust
/// use presence::optional::Optional;
///
/// let error = Optional::<i32>::from_json("\"invalid\"").unwrap_err();
/// assert!(error.is_data());
/// assert_eq!(error.line(), 1);
/// ```
#[cfg(feature = "json")]
#[derive(Debug)]
pub struct DeserializationError {
    source: serde_json::Error,
}

#[cfg(feature = "json")]
impl DeserializationError {
    /// One-based line of the input at which the error was detected.
    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// One-based column of the input at which the error was detected.
    #[must_use]
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// Returns `true` if the input was not syntactically valid JSON.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.source.is_syntax()
    }

    /// Returns `true` if the input was valid JSON of the wrong shape for `T`.
    #[must_use]
    pub fn is_data(&self) -> bool {
        self.source.is_data()
    }

    /// Returns `true` if the input ended before a complete value was read.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Consumes the error, returning the underlying parser error.
    #[must_use]
    pub fn into_inner(self) -> serde_json::Error {
        self.source
    }
}

#[cfg(feature = "json")]
impl std::fmt::Display for DeserializationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("failed to deserialize optional value")
    }
}

#[cfg(feature = "json")]
impl std::error::Error for DeserializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for DeserializationError {
    fn from(source: serde_json::Error) -> Self {
        Self { source }
    }
}

/// Represents a contained value that could not be written as JSON.
///
/// This happens only for payloads JSON cannot express, such as maps with
/// non-string keys.
#[cfg(feature = "json")]
#[derive(Debug)]
pub struct SerializationError {
    source: serde_json::Error,
}

#[cfg(feature = "json")]
impl SerializationError {
    /// Consumes the error, returning the underlying serializer error.
    #[must_use]
    pub fn into_inner(self) -> serde_json::Error {
        self.source
    }
}

#[cfg(feature = "json")]
impl std::fmt::Display for SerializationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("failed to serialize optional value")
    }
}

#[cfg(feature = "json")]
impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for SerializationError {
    fn from(source: serde_json::Error) -> Self {
        Self { source }
    }
}
