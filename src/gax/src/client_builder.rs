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

//! Configures and creates clients.
//!
//! Each generated client exposes a `builder()` function returning a
//! [ClientBuilder]. The defaults work for most applications, but some need
//! to change the endpoint, the credentials, the HTTP client, or the retry
//! and polling policies.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::credentials::Credentials;
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The errors reported while creating a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not initialize the credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize the transport client")]
    Transport(#[source] BoxError),
}

/// A generic builder for clients.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates the client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint, e.g. to use a private endpoint or a test server.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client logs each RPC through the [tracing] framework. Setting
    /// the `GOOGLE_CLOUD_RUST_LOGGING` environment variable to `true` has the
    /// same effect.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Sets the credentials used to authenticate each request.
    ///
    /// The default is anonymous credentials.
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Uses an application-provided HTTP client.
    ///
    /// The client provides connection pooling and the TLS configuration. The
    /// credentials are still applied to each request.
    pub fn with_http_client(mut self, v: reqwest::Client) -> Self {
        self.config.http_client = Some(v);
        self
    }

    /// Sets the retry policy for all requests.
    ///
    /// ```
    /// # use memcache_gax::client_builder::ClientBuilder;
    /// use memcache_gax::retry_policy::{Aip194Strict, RetryPolicyExt};
    /// fn configure<F>(builder: ClientBuilder<F>) -> ClientBuilder<F> {
    ///     builder.with_retry_policy(Aip194Strict.with_attempt_limit(3))
    /// }
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Sets the backoff policy between retry attempts.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Sets the backoff policy between polls of long-running operations.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    /// Creates a client from its configuration.
    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The configuration for a client.
    #[derive(Clone, Debug, Default)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub cred: Option<Credentials>,
        pub http_client: Option<reqwest::Client>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    }

    const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

    impl ClientConfig {
        /// Tracing is enabled by the builder, or by the environment.
        pub fn tracing_enabled(&self) -> bool {
            self.tracing
                || std::env::var(LOGGING_VAR)
                    .map(|v| v == "true")
                    .unwrap_or(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::credentials::access_token;
    use crate::exponential_backoff::ExponentialBackoff;
    use crate::retry_policy::{Aip194Strict, RetryPolicyExt};
    use serial_test::serial;

    struct FakeClient(ClientConfig);
    struct FakeFactory;
    impl ClientFactory for FakeFactory {
        type Client = FakeClient;
        async fn build(self, config: ClientConfig) -> Result<Self::Client> {
            Ok(FakeClient(config))
        }
    }

    fn builder() -> ClientBuilder<FakeFactory> {
        new_builder(FakeFactory)
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let config = builder().build().await?.0;
        assert!(config.endpoint.is_none(), "{config:?}");
        assert!(config.cred.is_none(), "{config:?}");
        assert!(config.http_client.is_none(), "{config:?}");
        assert!(!config.tracing, "{config:?}");
        assert!(config.retry_policy.is_none(), "{config:?}");
        assert!(config.backoff_policy.is_none(), "{config:?}");
        assert!(config.polling_backoff_policy.is_none(), "{config:?}");
        Ok(())
    }

    #[tokio::test]
    async fn with_everything() -> anyhow::Result<()> {
        let config = builder()
            .with_endpoint("http://localhost:8080")
            .with_tracing()
            .with_credentials(access_token::Builder::new("test-token").build())
            .with_http_client(reqwest::Client::new())
            .with_retry_policy(Aip194Strict.with_attempt_limit(3))
            .with_backoff_policy(ExponentialBackoff::default())
            .with_polling_backoff_policy(ExponentialBackoff::default())
            .build()
            .await?
            .0;
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080"));
        assert!(config.tracing, "{config:?}");
        assert!(config.cred.is_some(), "{config:?}");
        assert!(config.http_client.is_some(), "{config:?}");
        assert!(config.retry_policy.is_some(), "{config:?}");
        assert!(config.backoff_policy.is_some(), "{config:?}");
        assert!(config.polling_backoff_policy.is_some(), "{config:?}");
        Ok(())
    }

    #[test]
    #[serial]
    fn tracing_from_environment() {
        let config = ClientConfig::default();
        // SAFETY: the test is serialized with other tests changing the environment.
        unsafe { std::env::remove_var("GOOGLE_CLOUD_RUST_LOGGING") };
        assert!(!config.tracing_enabled(), "{config:?}");
        unsafe { std::env::set_var("GOOGLE_CLOUD_RUST_LOGGING", "true") };
        assert!(config.tracing_enabled(), "{config:?}");
        unsafe { std::env::set_var("GOOGLE_CLOUD_RUST_LOGGING", "yes") };
        assert!(!config.tracing_enabled(), "{config:?}");
        unsafe { std::env::remove_var("GOOGLE_CLOUD_RUST_LOGGING") };
    }

    #[test]
    fn errors() {
        let e = Error::cred("missing key");
        assert!(e.is_credentials() && !e.is_transport(), "{e:?}");
        let e = Error::transport("no TLS roots");
        assert!(e.is_transport() && !e.is_credentials(), "{e:?}");
        assert!(e.to_string().contains("transport"), "{e}");
    }
}
