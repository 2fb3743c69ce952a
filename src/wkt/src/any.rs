// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::message::Message;

/// `Any` contains an arbitrary serialized message along with a URL that
/// describes the type of the serialized message.
///
/// # JSON
///
/// The JSON representation of an `Any` value uses the regular representation
/// of the embedded message, with an additional field `@type` which contains
/// the type URL. Example:
///
/// ```norust
///     {
///       "@type": "type.googleapis.com/google.cloud.memcache.v1beta2.Instance",
///       "name": "projects/p/locations/l/instances/i",
///       "nodeCount": 3
///     }
/// ```
///
/// If the embedded message has a custom JSON representation that is not an
/// object (e.g. [Timestamp][crate::Timestamp]), that representation is stored
/// in a `value` field:
///
/// ```norust
///     {
///       "@type": "type.googleapis.com/google.protobuf.Timestamp",
///       "value": "2025-05-16T09:46:12Z"
///     }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Any(serde_json::Map<String, serde_json::Value>);

/// Indicates a problem trying to use an [Any].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnyError {
    /// Problem serializing an object into an [Any].
    #[error("cannot serialize object into an Any, source={0}")]
    Serialization(#[source] BoxedError),

    /// Problem deserializing an object from an [Any].
    #[error("cannot deserialize from an Any, source={0}")]
    Deserialization(#[source] BoxedError),

    /// The [Any] does not contain the desired type.
    #[error("expected type {want} in Any, got {got}")]
    TypeMismatch {
        /// The type URL requested by the caller.
        want: String,
        /// The type URL stored in the `Any`.
        got: String,
    },
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = AnyError;

const TYPE_FIELD: &str = "@type";
const VALUE_FIELD: &str = "value";

impl Any {
    /// Returns the type URL stored in this `Any`, if any.
    ///
    /// # Example
    /// ```
    /// # use memcache_wkt::{Any, Empty};
    /// let any = Any::from_msg(&Empty::default())?;
    /// assert_eq!(any.type_url(), Some("type.googleapis.com/google.protobuf.Empty"));
    /// # Ok::<(), memcache_wkt::AnyError>(())
    /// ```
    pub fn type_url(&self) -> Option<&str> {
        self.0.get(TYPE_FIELD).and_then(|v| v.as_str())
    }

    /// Creates a new [Any] from a message.
    pub fn from_msg<T>(message: &T) -> Result<Self, Error>
    where
        T: Message,
    {
        use serde_json::Value;
        let value =
            serde_json::to_value(message).map_err(|e| Error::Serialization(e.into()))?;
        let mut map = match value {
            Value::Object(map) => map,
            Value::String(_) => {
                let mut map = serde_json::Map::new();
                map.insert(VALUE_FIELD.to_string(), value);
                map
            }
            _ => {
                return Err(Error::Serialization(
                    "unexpected JSON type, only Object and String are supported".into(),
                ));
            }
        };
        map.insert(
            TYPE_FIELD.to_string(),
            Value::String(T::typename().to_string()),
        );
        Ok(Self(map))
    }

    /// Extracts (if possible) a `T` value from the [Any].
    ///
    /// # Example
    /// ```
    /// # use memcache_wkt::{Any, AnyError, Empty, Timestamp};
    /// let any = Any::from_msg(&Timestamp::clamp(123, 0))?;
    /// assert_eq!(any.to_msg::<Timestamp>()?, Timestamp::clamp(123, 0));
    /// assert!(matches!(any.to_msg::<Empty>(), Err(AnyError::TypeMismatch { .. })));
    /// # Ok::<(), AnyError>(())
    /// ```
    pub fn to_msg<T>(&self) -> Result<T, Error>
    where
        T: Message,
    {
        let got = self.type_url().ok_or_else(|| {
            Error::Deserialization("@type field is missing or is not a string".into())
        })?;
        if got != T::typename() {
            return Err(Error::TypeMismatch {
                want: T::typename().to_string(),
                got: got.to_string(),
            });
        }
        let value = match self.0.get(VALUE_FIELD) {
            Some(v @ serde_json::Value::String(_)) if self.0.len() == 2 => v.clone(),
            _ => {
                let mut map = self.0.clone();
                map.remove(TYPE_FIELD);
                serde_json::Value::Object(map)
            }
        };
        serde_json::from_value::<T>(value).map_err(|e| Error::Deserialization(e.into()))
    }
}

impl serde::ser::Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Any {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Any(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Empty, FieldMask, Timestamp};
    use serde_json::json;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Stored {
        #[serde(skip_serializing_if = "String::is_empty")]
        parent: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        id: String,
    }

    impl Message for Stored {
        fn typename() -> &'static str {
            "type.googleapis.com/wkt.test.Stored"
        }
    }

    #[test]
    fn serialize_object() -> anyhow::Result<()> {
        let stored = Stored {
            parent: "parent".into(),
            id: "id".into(),
        };
        let any = Any::from_msg(&stored)?;
        let got = serde_json::to_value(&any)?;
        let want = json!({
            "@type": "type.googleapis.com/wkt.test.Stored",
            "parent": "parent",
            "id": "id",
        });
        assert_eq!(got, want);
        assert_eq!(any.to_msg::<Stored>()?, stored);
        Ok(())
    }

    #[test]
    fn serialize_string_valued() -> anyhow::Result<()> {
        let ts = Timestamp::clamp(1747388772, 0);
        let any = Any::from_msg(&ts)?;
        let got = serde_json::to_value(&any)?;
        let want = json!({
            "@type": "type.googleapis.com/google.protobuf.Timestamp",
            "value": "2025-05-16T09:46:12Z",
        });
        assert_eq!(got, want);
        assert_eq!(any.to_msg::<Timestamp>()?, ts);
        Ok(())
    }

    #[test]
    fn deserialize_from_json() -> anyhow::Result<()> {
        let input = json!({
            "@type": "type.googleapis.com/google.protobuf.FieldMask",
            "value": "a,b.c",
        });
        let any = serde_json::from_value::<Any>(input)?;
        let mask = any.to_msg::<FieldMask>()?;
        assert_eq!(mask.paths, vec!["a", "b.c"]);
        Ok(())
    }

    #[test]
    fn type_mismatch() -> anyhow::Result<()> {
        let any = Any::from_msg(&Empty::default())?;
        let got = any.to_msg::<Stored>();
        assert!(
            matches!(&got, Err(AnyError::TypeMismatch { want, got })
                if want.ends_with("Stored") && got.ends_with("Empty")),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn missing_type() -> anyhow::Result<()> {
        let any = serde_json::from_value::<Any>(json!({"parent": "p"}))?;
        let got = any.to_msg::<Stored>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");
        Ok(())
    }

    #[test]
    fn bad_payload() -> anyhow::Result<()> {
        let any = serde_json::from_value::<Any>(json!({
            "@type": "type.googleapis.com/wkt.test.Stored",
            "parent": 42,
        }))?;
        let got = any.to_msg::<Stored>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");
        Ok(())
    }
}
