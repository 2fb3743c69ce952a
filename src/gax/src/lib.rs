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

//! Google APIs helpers for the Memcache client libraries.
//!
//! This crate contains the types and functions shared by the Memcache client
//! libraries: the error type, the request options, the retry and backoff
//! policies, the HTTP+JSON transport, and the paginator for list RPCs.
//!
//! Applications rarely need to use this crate directly, other than to
//! configure the clients, or to examine the errors returned by them.

/// An alias of [std::result::Result] where the error is always [Error][crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod api_header;
pub mod backoff_policy;
pub mod blocking;
pub mod client_builder;
pub mod credentials;
pub mod error;
pub mod exponential_backoff;
pub mod http_client;
pub mod options;
pub mod paginator;
pub mod polling_backoff_policy;
pub mod retry_loop_internal;
pub mod retry_policy;
pub mod retry_result;
