//! The serialized form of `Outcome` and its reconstruction.
//!
//! Class identity does not survive a serialization boundary, so an
//! `Outcome` crosses one as a plain tagged mapping:
//!
//! ```json
//! { "status": "ok", "value": 42 }
//! { "status": "error", "error": "fail" }
//! ```
//!
//! The `Serialize` impl always produces exactly this shape, and the
//! `Deserialize` impl accepts nothing else: unknown fields, missing
//! fields, duplicates, a foreign `status`, or a non-map input are all
//! errors. [`Outcome::hydrate`] is the sanctioned reconstruction entry
//! point; it collapses every such error into the `None` sentinel rather
//! than failing.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::core::Outcome;

const STATUS_OK: &str = "ok";
const STATUS_ERROR: &str = "error";
const FIELDS: &[&str] = &["status", "value", "error"];

impl<T, E> Outcome<T, E> {
    /// Reconstructs an `Outcome` from its serialized form.
    ///
    /// Returns `Some` if and only if the input is the tagged mapping
    /// described in the module documentation; any other shape yields
    /// `None`. Never panics and never surfaces a deserialization error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use serde_json::json;
    ///
    /// let revived: Option<Outcome<i32, String>> =
    ///     Outcome::hydrate(&json!({"status": "ok", "value": 42}));
    /// assert_eq!(revived, Some(Outcome::Ok(42)));
    ///
    /// let rejected: Option<Outcome<i32, String>> =
    ///     Outcome::hydrate(&json!({"foo": "bar"}));
    /// assert_eq!(rejected, None);
    /// ```
    pub fn hydrate<'de, D>(deserializer: D) -> Option<Self>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
        E: Deserialize<'de>,
    {
        Self::deserialize(deserializer).ok()
    }
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Self::Ok(value) => {
                state.serialize_field("status", STATUS_OK)?;
                state.serialize_field("value", value)?;
            }
            Self::Err(error) => {
                state.serialize_field("status", STATUS_ERROR)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

struct OutcomeVisitor<T, E> {
    marker: PhantomData<(T, E)>,
}

impl<T, E> OutcomeVisitor<T, E> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T, E> Visitor<'de> for OutcomeVisitor<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Outcome<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with status \"ok\" and a value, or status \"error\" and an error")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut status: Option<String> = None;
        let mut value: Option<T> = None;
        let mut error: Option<E> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "status" => {
                    if status.is_some() {
                        return Err(de::Error::duplicate_field("status"));
                    }
                    status = Some(map.next_value()?);
                }
                "value" => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = Some(map.next_value()?);
                }
                "error" => {
                    if error.is_some() {
                        return Err(de::Error::duplicate_field("error"));
                    }
                    error = Some(map.next_value()?);
                }
                other => return Err(de::Error::unknown_field(other, FIELDS)),
            }
        }

        match status.as_deref() {
            Some(STATUS_OK) => match (value, error) {
                (Some(value), None) => Ok(Outcome::Ok(value)),
                (None, _) => Err(de::Error::missing_field("value")),
                (Some(_), Some(_)) => Err(de::Error::unknown_field("error", FIELDS)),
            },
            Some(STATUS_ERROR) => match (value, error) {
                (None, Some(error)) => Ok(Outcome::Err(error)),
                (_, None) => Err(de::Error::missing_field("error")),
                (Some(_), Some(_)) => Err(de::Error::unknown_field("value", FIELDS)),
            },
            Some(other) => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"\"ok\" or \"error\"",
            )),
            None => Err(de::Error::missing_field("status")),
        }
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OutcomeVisitor::new())
    }
}
