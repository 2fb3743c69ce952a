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

//! Well-known types used by the Memcache client libraries.
//!
//! Google Cloud APIs use a number of well-known types. These have a custom
//! JSON encoding, and the types in this crate implement it. Only the types
//! used by the Cloud Memcache API and the long-running operations API are
//! included.

mod any;
pub use crate::any::*;
mod empty;
pub use crate::empty::*;
mod field_mask;
pub use crate::field_mask::*;
mod timestamp;
pub use crate::timestamp::*;
pub mod message;

#[doc(hidden)]
pub mod internal;
