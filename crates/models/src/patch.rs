//! Three-state field used by partial updates.
//!
//! `Missing` (key absent) leaves the column untouched, `Null` (key present with
//! `null`) asks for the value to be cleared, `Value` replaces it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(v: T) -> Self {
        Patch::Value(v)
    }
}

// Only invoked when the key is present; absent keys fall back to `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

// Pair with `#[serde(skip_serializing_if = "Patch::is_missing")]`.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(v) => serializer.serialize_some(v),
            _ => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Patch;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Deserialize, Serialize)]
    struct Body {
        #[serde(default, skip_serializing_if = "Patch::is_missing")]
        name: Patch<String>,
    }

    #[test]
    fn absent_key_is_missing() {
        let b: Body = serde_json::from_str("{}").unwrap();
        assert!(b.name.is_missing());
    }

    #[test]
    fn null_key_is_null() {
        let b: Body = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(b.name.is_null());
    }

    #[test]
    fn value_key_is_value() {
        let b: Body = serde_json::from_str(r#"{"name": "Pizza"}"#).unwrap();
        assert_eq!(b.name, Patch::Value("Pizza".to_string()));
    }

    #[test]
    fn missing_is_skipped_when_serializing() {
        let json = serde_json::to_string(&Body::default()).unwrap();
        assert_eq!(json, "{}");
        let json = serde_json::to_string(&Body { name: "Pasta".to_string().into() }).unwrap();
        assert_eq!(json, r#"{"name":"Pasta"}"#);
    }
}
