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

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Represents an error creating or using credentials.
///
/// Credentials may fail to produce the authentication headers for a request.
/// Some of these failures are transient, e.g. the token endpoint is
/// temporarily unavailable, and it is safe to retry the request because it
/// never left the client.
#[derive(thiserror::Error, Debug)]
#[error("cannot create the authentication headers (transient: {is_transient}): {source}")]
pub struct CredentialsError {
    is_transient: bool,
    #[source]
    source: BoxError,
}

impl CredentialsError {
    /// Creates a new error.
    pub fn new<T: Into<BoxError>>(is_transient: bool, source: T) -> Self {
        Self {
            is_transient,
            source: source.into(),
        }
    }

    /// Creates a new error from a message.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        let message: String = message.into();
        Self::new(is_transient, message)
    }

    /// If true, retrying the request may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}
