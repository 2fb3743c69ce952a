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

//! Client and request options.
//!
//! Applications can override the defaults for a single request using
//! [RequestOptionsBuilder]. Every request builder in the generated clients
//! implements this trait.
//!
//! ```
//! # use memcache_gax::options::RequestOptionsBuilder;
//! # use memcache_gax::options::RequestOptions;
//! # use memcache_gax::options::internal::RequestBuilder;
//! use memcache_gax::retry_policy::{Aip194Strict, RetryPolicyExt};
//! use std::time::Duration;
//! fn configure<B: RequestOptionsBuilder>(builder: B) -> B {
//!     builder
//!         .with_attempt_timeout(Duration::from_secs(10))
//!         .with_retry_policy(Aip194Strict.with_attempt_limit(3))
//! }
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// The per-request options.
///
/// Any option left unset uses the client configuration, or the default for
/// the RPC.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl RequestOptions {
    /// Gets the idempotency, if set.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treats the RPC as idempotent, or not.
    ///
    /// Retry policies typically retry [idempotent] RPCs under more error
    /// conditions. The client libraries derive a default from the HTTP
    /// method of each RPC.
    ///
    /// [idempotent]: https://en.wikipedia.org/wiki/Idempotence
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Sets the idempotency unless it is already set.
    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for each attempt.
    ///
    /// The retry policy controls the overall time for the request.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().0);
    }

    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().0);
    }

    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }

    /// Sets the delay between polls of long-running operations.
    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling_backoff_policy = Some(v.into().0);
    }
}

/// Configures [RequestOptions] in request builders.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the RPC as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Sets the user agent prefix.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for each attempt.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the retry policy.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy between retry attempts.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy between polls of a long-running operation.
    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details for the generated clients. Applications should
    //! not use these types, they may change without notice.
    use super::RequestOptions;

    /// Provides access to the options stored in a request builder.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::{Aip194Strict, NeverRetry, RetryPolicyExt};

    #[derive(Debug, Default)]
    struct FakeBuilder {
        options: RequestOptions,
    }
    impl RequestBuilder for FakeBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn setters() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.idempotent(), None);
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert!(opts.retry_policy().is_none(), "{opts:?}");
        assert!(opts.backoff_policy().is_none(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_none(), "{opts:?}");

        opts.set_idempotency(false);
        assert_eq!(opts.idempotent(), Some(false));
        opts.set_user_agent("memcache-test/1.0");
        assert_eq!(opts.user_agent().as_deref(), Some("memcache-test/1.0"));
        opts.set_attempt_timeout(Duration::from_secs(60));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(60)));
        opts.set_retry_policy(NeverRetry);
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        opts.set_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        opts.set_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn default_idempotency() {
        let opts = set_default_idempotency(RequestOptions::default(), true);
        assert_eq!(opts.idempotent(), Some(true));
        let opts = set_default_idempotency(opts, false);
        assert_eq!(opts.idempotent(), Some(true));

        let mut opts = RequestOptions::default();
        opts.set_idempotency(false);
        let opts = set_default_idempotency(opts, true);
        assert_eq!(opts.idempotent(), Some(false));
    }

    #[test]
    fn builder() -> anyhow::Result<()> {
        let mut builder = FakeBuilder::default()
            .with_idempotency(true)
            .with_user_agent("memcache-test/1.0")
            .with_attempt_timeout(Duration::from_secs(5))
            .with_retry_policy(Aip194Strict.with_attempt_limit(2))
            .with_backoff_policy(ExponentialBackoffBuilder::new().build()?)
            .with_polling_backoff_policy(ExponentialBackoffBuilder::new().build()?);
        let opts = builder.request_options();
        assert_eq!(opts.idempotent(), Some(true));
        assert_eq!(opts.user_agent().as_deref(), Some("memcache-test/1.0"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(5)));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
        Ok(())
    }
}
