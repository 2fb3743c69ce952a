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

//! Credentials used to authenticate requests.
//!
//! Discovering credentials from the environment is out of scope for this
//! crate. Applications either use [anonymous] credentials, typically with
//! emulators and test servers, provide an OAuth2 access token with
//! [access_token], or implement [CredentialsProvider] for their own token
//! source.

use crate::error::CredentialsError;
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, CredentialsError>;

/// An implementation of [CredentialsProvider], shared across clients.
///
/// # Example
/// ```
/// # use memcache_gax::credentials::access_token;
/// # tokio_test::block_on(async {
/// let credentials = access_token::Builder::new("test-only-token").build();
/// let headers = credentials.headers().await?;
/// assert_eq!(
///     headers.get(http::header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
///     Some("Bearer test-only-token"));
/// # Ok::<(), memcache_gax::error::CredentialsError>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    // Clients are `Clone`, and may be used from many threads.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to authenticate a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

impl Default for Credentials {
    fn default() -> Self {
        anonymous::Builder::new().build()
    }
}

/// Provides the authentication headers for each request.
///
/// Implementations should cache and refresh tokens as needed. Errors
/// flagged as transient may be retried by the client, the request was never
/// sent.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the authentication headers.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A dyn-compatible version of [CredentialsProvider][super::CredentialsProvider].
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Credentials that add no headers.
pub mod anonymous {
    use super::{Credentials, CredentialsProvider, Result};
    use http::HeaderMap;

    #[derive(Debug)]
    struct AnonymousCredentials;

    impl CredentialsProvider for AnonymousCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }

    #[derive(Debug, Default)]
    pub struct Builder {}

    impl Builder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn build(self) -> Credentials {
            Credentials::from(AnonymousCredentials)
        }
    }
}

/// Credentials using a fixed OAuth2 access token.
///
/// The token is sent as-is, the application is responsible for creating a
/// new client when the token expires.
pub mod access_token {
    use super::{Credentials, CredentialsProvider, Result};
    use crate::error::CredentialsError;
    use http::HeaderMap;
    use http::header::{AUTHORIZATION, HeaderValue};

    struct AccessTokenCredentials {
        token: String,
    }

    impl std::fmt::Debug for AccessTokenCredentials {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("AccessTokenCredentials")
                .field("token", &"[censored]")
                .finish()
        }
    }

    impl CredentialsProvider for AccessTokenCredentials {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|e| CredentialsError::new(false, e))?;
            value.set_sensitive(true);
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            Ok(headers)
        }
    }

    #[derive(Debug)]
    pub struct Builder {
        token: String,
    }

    impl Builder {
        pub fn new<T: Into<String>>(token: T) -> Self {
            Self {
                token: token.into(),
            }
        }

        pub fn build(self) -> Credentials {
            Credentials::from(AccessTokenCredentials { token: self.token })
        }
    }
}
