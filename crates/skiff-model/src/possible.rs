//! Tri-state optional field wrapper
//!
//! Wire payloads distinguish a field that is *absent* from a field that is
//! explicitly `null`: a PATCH body that omits `topic` leaves the topic alone,
//! while `"topic": null` clears it. `Possible` keeps that distinction as a
//! three-variant sum type instead of collapsing it into `Option`.
//!
//! Deserialization of a present field yields `Present` or `Null`; field
//! absence must go through `#[serde(default)]`, which produces `Undefined`.
//! Serialization emits the value for `Present` and a JSON null for `Null`;
//! request structs pair the field with
//! `#[serde(default, skip_serializing_if = "Possible::is_undefined")]` so
//! `Undefined` fields are omitted from the output entirely.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value that is present, explicitly null, or omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Possible<T> {
    /// The field carried a value
    Present(T),
    /// The field was an explicit JSON null
    Null,
    /// The field was absent from the payload
    Undefined,
}

impl<T> Possible<T> {
    /// Check if a value is present
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Check if the field was an explicit null
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the field was omitted
    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Map the contained value, preserving `Null` and `Undefined`
    pub fn map<U, F>(self, f: F) -> Possible<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(v) => Possible::Present(f(v)),
            Self::Null => Possible::Null,
            Self::Undefined => Possible::Undefined,
        }
    }

    /// Chain a computation that itself yields a `Possible`
    pub fn and_then<U, F>(self, f: F) -> Possible<U>
    where
        F: FnOnce(T) -> Possible<U>,
    {
        match self {
            Self::Present(v) => f(v),
            Self::Null => Possible::Null,
            Self::Undefined => Possible::Undefined,
        }
    }

    /// Collapse all three variants into a single value
    pub fn fold<U>(
        self,
        on_null: impl FnOnce() -> U,
        on_undefined: impl FnOnce() -> U,
        on_value: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Self::Present(v) => on_value(v),
            Self::Null => on_null(),
            Self::Undefined => on_undefined(),
        }
    }

    /// Get the value, or a fallback for `Null` and `Undefined`
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(v) => v,
            _ => default,
        }
    }

    /// Convert to `Option`, collapsing `Null` and `Undefined` to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Borrowing counterpart of [`into_option`](Self::into_option)
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            _ => None,
        }
    }

    /// Borrowing view of the contained value
    pub const fn as_ref(&self) -> Possible<&T> {
        match self {
            Self::Present(v) => Possible::Present(v),
            Self::Null => Possible::Null,
            Self::Undefined => Possible::Undefined,
        }
    }
}

impl<T> Default for Possible<T> {
    /// An absent field; this is what `#[serde(default)]` produces
    fn default() -> Self {
        Self::Undefined
    }
}

impl<T> From<Option<T>> for Possible<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Self::Present(v),
            None => Self::Null,
        }
    }
}

impl<T> Serialize for Possible<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Undefined fields are expected to be skipped via
            // `skip_serializing_if`; if one reaches here it becomes null.
            Self::Present(v) => v.serialize(serializer),
            Self::Null | Self::Undefined => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Possible<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A field that is present deserializes as Present or Null;
        // absence never reaches this point (serde uses Default instead).
        Option::<T>::deserialize(deserializer).map(Possible::from)
    }
}
