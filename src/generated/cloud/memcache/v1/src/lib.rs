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

//! Google Cloud Client Libraries for Rust - Cloud Memorystore for Memcached API
//!
//! This crate contains traits, types, and functions to interact with the
//! Cloud Memorystore for Memcached API. Most applications will use the
//! structs defined in the [client] module. More specifically:
//!
//! * [CloudMemcache](client/struct.CloudMemcache.html)
//!
//! Applications that cannot use an asynchronous runtime may use the
//! [blocking] module instead.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> google_cloud_memcache_v1::Result<()> {
//! use google_cloud_memcache_v1::client::CloudMemcache;
//! let client = CloudMemcache::builder()
//!     .build()
//!     .await
//!     .map_err(google_cloud_memcache_v1::Error::io)?;
//! let parent = CloudMemcache::location_path("my-project", "us-central1");
//! let mut items = client.list_instances(parent).by_item();
//! while let Some(instance) = items.next().await {
//!     println!("{:?}", instance?);
//! }
//! # Ok(()) }
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

/// Clients for applications without an asynchronous runtime.
pub mod blocking;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://memcache.googleapis.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gax::api_header::XGoogApiClient {
                name:          NAME,
                version:       VERSION,
                library_type:  gax::api_header::GAPIC,
            };
            ac.rest_header_value()
        };
    }
}
