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

//! Errors returned by the Memcache client libraries.
//!
//! The client libraries distinguish between errors detected while trying to
//! send a request (e.g. cannot open a connection), errors returned by the
//! service, long-running operations that completed with an error, and local
//! conditions such as a wait timing out or being cancelled. All of them are
//! represented by [Error], which offers predicates to classify them.

mod core_error;
mod credentials;
pub use core_error::*;
pub use credentials::CredentialsError;

/// Error details returned by Google Cloud services.
pub mod rpc;
