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

/// `FieldMask` represents a set of symbolic field paths.
///
/// Update RPCs use a field mask to select the fields of the resource that are
/// modified. For example, to change only the display name and the labels of
/// an instance use `["displayName", "labels"]`.
///
/// # JSON Mapping
///
/// In JSON, a field mask is encoded as a single string where paths are
/// separated by a comma.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the paths.
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|p| p.into()).collect();
        self
    }
}

impl crate::message::Message for FieldMask {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.FieldMask"
    }
}

impl From<&FieldMask> for String {
    fn from(value: &FieldMask) -> Self {
        value.paths.join(",")
    }
}

impl serde::ser::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&String::from(self))
    }
}

impl<'de> serde::de::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let paths = value
            .split(',')
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self { paths })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(vec![], ""; "empty")]
    #[test_case(vec!["displayName"], "displayName"; "single")]
    #[test_case(vec!["displayName", "labels", "nodeConfig.cpuCount"], "displayName,labels,nodeConfig.cpuCount"; "multiple")]
    fn json(paths: Vec<&str>, want: &str) -> anyhow::Result<()> {
        let mask = FieldMask::default().set_paths(paths);
        let got = serde_json::to_value(&mask)?;
        assert_eq!(got, json!(want));
        let back = serde_json::from_value::<FieldMask>(got)?;
        assert_eq!(back, mask);
        Ok(())
    }
}
