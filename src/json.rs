//! JSON text helpers for [`Optional`].
//!
//! These wrap `serde_json` so that callers get the crate's
//! [`DeserializationError`] and [`SerializationError`] instead of a
//! format-specific error type, with the parser's diagnostics preserved.
//!
//! # Examples
//!
//! ```rust
//! use presence::json;
//! use presence::optional::Optional;
//!
//! assert_eq!(json::to_string(&Optional::some(42)).unwrap(), "42");
//! assert_eq!(json::to_string(&Optional::<i32>::none()).unwrap(), "null");
//!
//! let parsed: Optional<i32> = json::from_str("null").unwrap();
//! assert!(parsed.is_empty());
//! assert!(json::from_str::<i32>("\"invalid\"").is_err());
//! ```

use crate::error::{DeserializationError, SerializationError};
use crate::optional::Optional;
use serde::Serialize;
use serde::de::{Deserialize, DeserializeOwned};

/// Serializes `optional` as a JSON string.
///
/// # Errors
///
/// Returns `SerializationError` if the contained value cannot be expressed
/// as JSON.
pub fn to_string<T>(optional: &Optional<T>) -> Result<String, SerializationError>
where
    T: Serialize,
{
    Ok(serde_json::to_string(optional)?)
}

/// Serializes `optional` as a pretty-printed JSON string.
///
/// # Errors
///
/// Returns `SerializationError` if the contained value cannot be expressed
/// as JSON.
pub fn to_string_pretty<T>(optional: &Optional<T>) -> Result<String, SerializationError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(optional)?)
}

/// Serializes `optional` as JSON bytes.
///
/// # Errors
///
/// Returns `SerializationError` if the contained value cannot be expressed
/// as JSON.
pub fn to_vec<T>(optional: &Optional<T>) -> Result<Vec<u8>, SerializationError>
where
    T: Serialize,
{
    Ok(serde_json::to_vec(optional)?)
}

/// Parses an `Optional<T>` from JSON text.
///
/// # Errors
///
/// Returns `DeserializationError` if `text` is not valid JSON or does not
/// describe a `T` or `null`.
pub fn from_str<'a, T>(text: &'a str) -> Result<Optional<T>, DeserializationError>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(text)?)
}

/// Parses an `Optional<T>` from JSON bytes.
///
/// # Errors
///
/// Returns `DeserializationError` if `bytes` is not valid JSON or does not
/// describe a `T` or `null`.
pub fn from_slice<'a, T>(bytes: &'a [u8]) -> Result<Optional<T>, DeserializationError>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_slice(bytes)?)
}

impl<T> Optional<T>
where
    T: Serialize,
{
    /// Serializes this optional as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the contained value cannot be
    /// expressed as JSON.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        to_string(self)
    }
}

impl<T> Optional<T>
where
    T: DeserializeOwned,
{
    /// Parses an optional from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `DeserializationError` if `text` is not valid JSON or does not
    /// describe a `T` or `null`.
    pub fn from_json(text: &str) -> Result<Self, DeserializationError> {
        from_str(text)
    }

    /// Overwrites this optional with the value parsed from `text`.
    ///
    /// `null` makes the optional absent, discarding any previous value. On
    /// error the optional is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DeserializationError` if `text` is not valid JSON or does not
    /// describe a `T` or `null`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut target = Optional::some(1);
    /// target.assign_from_json("null").unwrap();
    /// assert!(target.is_empty());
    ///
    /// target.assign_from_json("7").unwrap();
    /// assert_eq!(target, Optional::some(7));
    ///
    /// assert!(target.assign_from_json("\"seven\"").is_err());
    /// assert_eq!(target, Optional::some(7));
    /// ```
    pub fn assign_from_json(&mut self, text: &str) -> Result<(), DeserializationError> {
        *self = from_str(text)?;
        Ok(())
    }
}
