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

//! Formats the `x-goog-api-client` header.
//!
//! Google Cloud services use this header to track the versions of the
//! language runtime and the client libraries in use.

#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

/// The library type for generated clients.
pub const GAPIC: &str = "gapic";

mod build_info {
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// The header value for clients using the REST transport.
    pub fn rest_header_value(&self) -> String {
        let rustc_version = build_info::RUSTC_VERSION;
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{rustc_version} gax/{gax_version} rest/{gax_version}-reqwest {}/{}",
            self.library_type, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_header_value() {
        let header = XGoogApiClient {
            name: "memcache-test",
            library_type: GAPIC,
            version: "1.2.3",
        };
        let got = header.rest_header_value();
        assert!(got.starts_with("gl-rust/"), "{got}");
        assert!(got.contains(&format!("gax/{}", build_info::PKG_VERSION)), "{got}");
        assert!(got.contains("-reqwest "), "{got}");
        assert!(got.ends_with(" gapic/1.2.3"), "{got}");
        assert!(!got.contains("rustc "), "{got}");
    }
}
