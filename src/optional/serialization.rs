//! Serde support for [`Optional`].
//!
//! A present optional serializes through `serialize_some`, which
//! self-describing formats such as JSON write exactly like the bare value.
//! An absent optional serializes as the format's null literal.
//! Deserialization maps the null literal back to `Absent` and anything else
//! through `T::deserialize`, so a value of the wrong shape fails with the
//! format's own error.

use super::Optional;
use std::marker::PhantomData;

impl<T> serde::Serialize for Optional<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

struct OptionalVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> OptionalVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for OptionalVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Optional<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an optional value")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Optional::Absent)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Optional::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Optional::Present)
    }
}

impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalVisitor::new())
    }
}
