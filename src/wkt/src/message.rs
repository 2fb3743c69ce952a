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

//! Define the trait required of all messages stored in an [Any][crate::Any].

/// A trait that must be implemented by all messages.
///
/// Long-running operations wrap their results and metadata in
/// [Any][crate::Any]. `Any` uses a `@type` field to encode the type name, and
/// validates extraction and insertion against the value returned by
/// [typename][Message::typename].
pub trait Message: serde::ser::Serialize + serde::de::DeserializeOwned {
    /// The fully qualified type URL of this message.
    fn typename() -> &'static str;
}
