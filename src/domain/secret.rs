use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::{self, Debug, Display};

/// Wraps sensitive card data so it never shows up in `Debug` or `Display` output.
///
/// The inner value is only reachable through [`Secret::reveal`], and only serialized when a field
/// opts in with `#[serde(serialize_with = "serialize_revealed")]`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret<T>
where
    T: Clone + Default,
{
    value: T,
}

impl<T: Clone + Default> Secret<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn reveal(&self) -> &T {
        &self.value
    }
}

impl<T: Clone + Default> Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl<T: Clone + Default> Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl<'de, T> Deserialize<'de> for Secret<T>
where
    T: Clone + Default + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Secret::new)
    }
}

impl From<&str> for Secret<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

pub fn serialize_revealed<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.reveal())
}
