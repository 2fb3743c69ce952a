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

//! The retry loop shared by all the RPCs.

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::options::RequestOptions;
use crate::retry_policy::RetryPolicy;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Runs `inner` until it succeeds, or the retry policy stops the loop.
///
/// `inner` receives the time remaining in the retry policy, if any, which
/// it should use to bound the attempt. `sleep` is called with the backoff
/// delay between attempts.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    let mut attempt_count = 0_u32;
    loop {
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        attempt_count += 1;
        let error = match inner(remaining_time).await {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };
        let error = match retry_policy.on_error(loop_start, attempt_count, idempotent, error) {
            RetryResult::Permanent(e) => return Err(e),
            RetryResult::Exhausted(e) => return Err(Error::exhausted(e)),
            RetryResult::Continue(e) => e,
        };
        let delay = backoff_policy.on_failure(loop_start, attempt_count);
        if retry_policy
            .remaining_time(loop_start, attempt_count)
            .is_some_and(|remaining| remaining < delay)
        {
            return Err(Error::exhausted(error));
        }
        tracing::debug!("retrying attempt {attempt_count} after {delay:?}: {error}");
        sleep(delay).await;
    }
}

/// The timeout for the next attempt.
///
/// This is the smaller of the attempt timeout in the request options, and
/// the time remaining in the retry policy.
pub fn effective_timeout(
    options: &RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (*options.attempt_timeout(), remaining_time) {
        (Some(a), Some(r)) => Some(a.min(r)),
        (a, r) => a.or(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::{Code, Status};
    use crate::retry_policy::{Aip194Strict, NeverRetry, RetryPolicyExt};
    use std::sync::Mutex;
    use std::time::Instant;
    use test_case::test_case;

    #[test_case(None, None, None)]
    #[test_case(Some(Duration::from_secs(4)), Some(Duration::from_secs(4)), None)]
    #[test_case(Some(Duration::from_secs(4)), None, Some(Duration::from_secs(4)))]
    #[test_case(Some(Duration::from_secs(2)), Some(Duration::from_secs(2)), Some(Duration::from_secs(4)))]
    #[test_case(Some(Duration::from_secs(2)), Some(Duration::from_secs(4)), Some(Duration::from_secs(2)))]
    fn effective_timeouts(
        want: Option<Duration>,
        remaining: Option<Duration>,
        attempt: Option<Duration>,
    ) {
        let mut options = RequestOptions::default();
        if let Some(t) = attempt {
            options.set_attempt_timeout(t);
        }
        assert_eq!(effective_timeout(&options, remaining), want);
    }

    #[derive(Debug)]
    struct FixedBackoff;
    impl BackoffPolicy for FixedBackoff {
        fn on_failure(&self, _: Instant, attempt_count: u32) -> Duration {
            Duration::from_millis(100 * attempt_count as u64)
        }
    }

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    fn permission_denied() -> Error {
        Error::service(Status::default().set_code(Code::PermissionDenied))
    }

    // Returns the responses in order, recording the sleeps.
    async fn run(
        responses: Vec<Result<String>>,
        retry_policy: Arc<dyn RetryPolicy>,
        idempotent: bool,
    ) -> (Result<String>, usize, Vec<Duration>) {
        let mut responses = std::collections::VecDeque::from(responses);
        let calls = Arc::new(Mutex::new(0_usize));
        let sleeps = Arc::new(Mutex::new(Vec::new()));
        let counter = calls.clone();
        let inner = async move |_remaining: Option<Duration>| {
            *counter.lock().unwrap() += 1;
            responses
                .pop_front()
                .unwrap_or_else(|| Err(Error::io("no more responses")))
        };
        let recorder = sleeps.clone();
        let sleep = async move |d: Duration| recorder.lock().unwrap().push(d);
        let result = retry_loop(
            inner,
            sleep,
            idempotent,
            retry_policy,
            Arc::new(FixedBackoff),
        )
        .await;
        let calls = *calls.lock().unwrap();
        let sleeps = sleeps.lock().unwrap().clone();
        (result, calls, sleeps)
    }

    #[tokio::test]
    async fn immediate_success() {
        let (result, calls, sleeps) =
            run(vec![Ok("ok".to_string())], Arc::new(Aip194Strict), true).await;
        assert_eq!(result.ok().as_deref(), Some("ok"));
        assert_eq!(calls, 1);
        assert!(sleeps.is_empty(), "{sleeps:?}");
    }

    #[tokio::test]
    async fn never_retry_stops_on_transient() {
        let (result, calls, sleeps) =
            run(vec![Err(unavailable())], Arc::new(NeverRetry), true).await;
        let err = result.unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(calls, 1);
        assert!(sleeps.is_empty(), "{sleeps:?}");
    }

    #[tokio::test]
    async fn success_after_transients() {
        let responses = vec![Err(unavailable()), Err(unavailable()), Ok("ok".to_string())];
        let (result, calls, sleeps) = run(responses, Arc::new(Aip194Strict), true).await;
        assert_eq!(result.ok().as_deref(), Some("ok"));
        assert_eq!(calls, 3);
        assert_eq!(
            sleeps,
            vec![Duration::from_millis(100), Duration::from_millis(200)]
        );
    }

    #[tokio::test]
    async fn permanent_error() {
        let responses = vec![Err(unavailable()), Err(permission_denied())];
        let (result, calls, _) = run(responses, Arc::new(Aip194Strict), true).await;
        let err = result.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn not_idempotent() {
        let (result, calls, _) = run(vec![Err(unavailable())], Arc::new(Aip194Strict), false).await;
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn exhausted() {
        let responses = (0..5).map(|_| Err(unavailable())).collect();
        let policy = Aip194Strict.with_attempt_limit(3);
        let (result, calls, sleeps) = run(responses, Arc::new(policy), true).await;
        let err = result.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(calls, 3);
        assert_eq!(sleeps.len(), 2, "{sleeps:?}");
    }

    #[tokio::test]
    async fn exhausted_by_time_before_sleep() {
        let responses = (0..5).map(|_| Err(unavailable())).collect();
        // The backoff (100ms) is longer than the remaining time.
        let policy = Aip194Strict.with_time_limit(Duration::from_millis(10));
        let (result, calls, sleeps) = run(responses, Arc::new(policy), true).await;
        let err = result.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(calls, 1);
        assert!(sleeps.is_empty(), "{sleeps:?}");
    }
}
