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

//! Defines the trait for retry policies and some common implementations.
//!
//! The client libraries automatically retry requests that fail with
//! transient errors, as long as the retry policy allows it. The policy
//! decides whether an error is transient, and how long the retry loop may
//! continue.
//!
//! The Memcache service configuration does not retry any RPC, so the default
//! policy is [NeverRetry]. Applications can opt into retries, typically
//! with [Aip194Strict] and some limits:
//!
//! ```
//! # use memcache_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = Aip194Strict
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(30));
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Determines how errors are handled in the retry loop.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Queries the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts, including the one that
    ///   just failed.
    /// * `idempotent` - if `true` the request is safe to repeat.
    /// * `error` - the error from the last attempt.
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy, if it is time based.
    ///
    /// The retry loop uses this value to shorten the attempt timeout.
    fn remaining_time(&self, _loop_start: Instant, _attempt_count: u32) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T> From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Self {
        value.0
    }
}

/// Extension methods to decorate retry policies with limits.
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Stops the retry loop after `maximum_duration` has elapsed.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Stops the retry loop after `maximum_attempts` attempts.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// Never retries. Every error stops the retry loop.
#[derive(Clone, Debug, Default)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _: Instant, _: u32, _: bool, error: Error) -> RetryResult {
        RetryResult::Permanent(error)
    }
}

/// Retries transient errors following [AIP-194].
///
/// Only `UNAVAILABLE` service errors are retried, and only when the request
/// is idempotent. Transport errors without a service status are treated the
/// same way. Transient authentication errors are always retried, the request
/// never left the client.
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug, Default)]
pub struct Aip194Strict;

impl RetryPolicy for Aip194Strict {
    fn on_error(&self, _: Instant, _: u32, idempotent: bool, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if !idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() {
            return RetryResult::Continue(error);
        }
        match error.status().map(|s| s.code) {
            Some(Code::Unavailable) if error.is_service() => RetryResult::Continue(error),
            _ if error.is_transport() && error.http_status_code() == Some(503) => {
                RetryResult::Continue(error)
            }
            _ => RetryResult::Permanent(error),
        }
    }
}

/// Decorates a policy to stop after some time has elapsed.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict> {
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a [Aip194Strict] policy limited to `maximum_duration`.
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(Aip194Strict, maximum_duration)
    }
}

impl<P: RetryPolicy> LimitedElapsedTime<P> {
    /// Decorates `inner` with a time limit.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn on_error_now(
        &self,
        now: Instant,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if now >= loop_start + self.maximum_duration => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }
}

impl<P: RetryPolicy> RetryPolicy for LimitedElapsedTime<P> {
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        self.on_error_now(Instant::now(), loop_start, attempt_count, idempotent, error)
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let remaining =
            (loop_start + self.maximum_duration).saturating_duration_since(Instant::now());
        match self.inner.remaining_time(loop_start, attempt_count) {
            Some(inner) => Some(inner.min(remaining)),
            None => Some(remaining),
        }
    }
}

/// Decorates a policy to stop after a number of attempts.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict> {
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a [Aip194Strict] policy limited to `maximum_attempts`.
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(Aip194Strict, maximum_attempts)
    }
}

impl<P: RetryPolicy> LimitedAttemptCount<P> {
    /// Decorates `inner` with an attempt limit.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P: RetryPolicy> RetryPolicy for LimitedAttemptCount<P> {
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            result => result,
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use crate::error::rpc::Status;
    use http::HeaderMap;

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    fn permission_denied() -> Error {
        Error::service(Status::default().set_code(Code::PermissionDenied))
    }

    #[test]
    fn never_retry() {
        let p = NeverRetry;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, unavailable()).is_permanent());
        assert!(p.on_error(now, 1, false, unavailable()).is_permanent());
        assert!(p.on_error(now, 1, true, Error::io("err")).is_permanent());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn aip194_strict() {
        let p = Aip194Strict;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, unavailable()).is_continue());
        assert!(p.on_error(now, 1, false, unavailable()).is_permanent());
        assert!(p.on_error(now, 1, true, permission_denied()).is_permanent());

        assert!(p.on_error(now, 1, true, Error::io("err")).is_continue());
        assert!(p.on_error(now, 1, false, Error::io("err")).is_permanent());

        let http_503 = || Error::http(503, HeaderMap::new(), bytes::Bytes::new());
        assert!(p.on_error(now, 1, true, http_503()).is_continue());
        assert!(p.on_error(now, 1, false, http_503()).is_permanent());
        let http_400 = Error::http(400, HeaderMap::new(), bytes::Bytes::new());
        assert!(p.on_error(now, 1, true, http_400).is_permanent());

        let transient = || Error::authentication(CredentialsError::from_msg(true, "err"));
        assert!(p.on_error(now, 1, true, transient()).is_continue());
        assert!(p.on_error(now, 1, false, transient()).is_continue());
        let permanent = Error::authentication(CredentialsError::from_msg(false, "err"));
        assert!(p.on_error(now, 1, true, permanent).is_permanent());

        assert!(p.on_error(now, 1, true, Error::deser("err")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::timeout("err")).is_permanent());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn attempt_limit() {
        let p = Aip194Strict.with_attempt_limit(3);
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, unavailable()).is_continue());
        assert!(p.on_error(now, 2, true, unavailable()).is_continue());
        assert!(p.on_error(now, 3, true, unavailable()).is_exhausted());
        assert!(p.on_error(now, 1, true, permission_denied()).is_permanent());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn time_limit() {
        let p = LimitedElapsedTime::new(Duration::from_secs(10));
        let start = Instant::now();
        let early = start + Duration::from_secs(5);
        let late = start + Duration::from_secs(11);
        assert!(p.on_error_now(early, start, 1, true, unavailable()).is_continue());
        assert!(p.on_error_now(late, start, 1, true, unavailable()).is_exhausted());
        assert!(p.on_error_now(late, start, 1, true, permission_denied()).is_permanent());

        let remaining = p.remaining_time(start, 1);
        assert!(remaining.is_some_and(|d| d <= Duration::from_secs(10)), "{remaining:?}");
        let expired = p.remaining_time(start - Duration::from_secs(20), 1);
        assert_eq!(expired, Some(Duration::ZERO));
    }

    #[test]
    fn nested_limits() {
        let p = Aip194Strict
            .with_time_limit(Duration::from_secs(60))
            .with_attempt_limit(2);
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, unavailable()).is_continue());
        assert!(p.on_error(now, 2, true, unavailable()).is_exhausted());
        assert!(p.remaining_time(now, 1).is_some());
    }

    #[test]
    fn policy_arg() {
        let arg = RetryPolicyArg::from(NeverRetry);
        let policy: Arc<dyn RetryPolicy> = arg.into();
        assert!(policy.on_error(Instant::now(), 1, true, unavailable()).is_permanent());
    }
}
