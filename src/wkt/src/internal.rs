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

//! Implementation details shared by the generated clients.
//!
//! Not part of the public API. Types and functions in this module may change
//! without notice, applications should not use them.

use std::marker::PhantomData;

/// An enum value not known to this version of the client library.
///
/// Services may add new enum values at any time. The service may send them
/// as strings (the value name) or as integers.
#[derive(Clone, Debug, PartialEq)]
pub enum UnknownEnumValue {
    Integer(i32),
    String(String),
}

impl UnknownEnumValue {
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::String(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::String(n) => Some(n),
        }
    }
}

impl serde::ser::Serialize for UnknownEnumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Integer(v) => serializer.serialize_i32(*v),
            Self::String(n) => serializer.serialize_str(n),
        }
    }
}

/// Deserializes enums from either their name or their numeric value.
pub struct EnumVisitor<'a, T> {
    enum_name: &'a str,
    _enum: PhantomData<T>,
}

impl<'a, T> EnumVisitor<'a, T> {
    pub fn new(enum_name: &'a str) -> Self {
        Self {
            enum_name,
            _enum: PhantomData,
        }
    }

    fn from_i64<E: serde::de::Error>(&self, value: i64) -> Result<T, E>
    where
        T: From<i32>,
    {
        i32::try_from(value).map(T::from).map_err(|_| {
            E::custom(format!(
                "enum value {value} for {} is out of range",
                self.enum_name
            ))
        })
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<'_, T>
where
    T: From<i32> + for<'s> From<&'s str>,
{
    type Value = T;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "a {} value, as a string or an integer", self.enum_name)
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<T, E> {
        Ok(T::from(value))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<T, E> {
        self.from_i64(value)
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<T, E> {
        let value = i64::try_from(value).unwrap_or(i64::MAX);
        self.from_i64(value)
    }
}

/// Used with `skip_serializing_if` to omit fields with default values.
pub fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// Formats an enum using its name, or its value if the name is not known.
pub fn display_enum(
    f: &mut std::fmt::Formatter<'_>,
    name: Option<&str>,
    value: Option<i32>,
) -> std::fmt::Result {
    match (name, value) {
        (Some(n), _) => f.write_str(n),
        (None, Some(v)) => write!(f, "{v}"),
        (None, None) => f.write_str("<unknown>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Clone, Debug, PartialEq)]
    enum Tier {
        Basic,
        Standard,
        UnknownValue(UnknownEnumValue),
    }

    impl From<i32> for Tier {
        fn from(value: i32) -> Self {
            match value {
                1 => Self::Basic,
                3 => Self::Standard,
                v => Self::UnknownValue(UnknownEnumValue::Integer(v)),
            }
        }
    }

    impl From<&str> for Tier {
        fn from(value: &str) -> Self {
            match value {
                "BASIC" => Self::Basic,
                "STANDARD_HA" => Self::Standard,
                n => Self::UnknownValue(UnknownEnumValue::String(n.to_string())),
            }
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Tier {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(EnumVisitor::new(".test.Tier"))
        }
    }

    #[test]
    fn defaults() {
        assert!(is_default(&0_i32));
        assert!(!is_default(&1_i32));
        assert!(is_default(&false));
        assert!(!is_default(&String::from("a")));
    }

    #[test]
    fn unknown_value() -> anyhow::Result<()> {
        let u = UnknownEnumValue::Integer(7);
        assert_eq!((u.value(), u.name()), (Some(7), None));
        assert_eq!(serde_json::to_value(&u)?, json!(7));

        let u = UnknownEnumValue::String("PREMIUM".into());
        assert_eq!((u.value(), u.name()), (None, Some("PREMIUM")));
        assert_eq!(serde_json::to_value(&u)?, json!("PREMIUM"));
        Ok(())
    }

    #[test_case(json!("BASIC"), Tier::Basic)]
    #[test_case(json!("STANDARD_HA"), Tier::Standard)]
    #[test_case(json!(1), Tier::Basic)]
    #[test_case(json!(3), Tier::Standard)]
    #[test_case(json!("PREMIUM"), Tier::UnknownValue(UnknownEnumValue::String("PREMIUM".into())))]
    #[test_case(json!(42), Tier::UnknownValue(UnknownEnumValue::Integer(42)))]
    #[test_case(json!(-1), Tier::UnknownValue(UnknownEnumValue::Integer(-1)))]
    fn visitor(input: serde_json::Value, want: Tier) -> anyhow::Result<()> {
        let got = serde_json::from_value::<Tier>(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!(i64::MAX))]
    #[test_case(json!(i64::MIN))]
    #[test_case(json!(u64::MAX))]
    #[test_case(json!(true))]
    fn visitor_errors(input: serde_json::Value) {
        let got = serde_json::from_value::<Tier>(input);
        assert!(got.is_err(), "{got:?}");
    }
}
