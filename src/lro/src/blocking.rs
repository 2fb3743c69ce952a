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

//! Operation handles for blocking clients.

use gax::Result;
use gax::blocking::Runtime;
use gax::error::rpc::Status;
use gax::polling_backoff_policy::PollingBackoffPolicyArg;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A blocking version of [OperationHandle][crate::OperationHandle].
///
/// Each function that queries the service blocks the calling thread until the
/// RPCs complete. Do not use this type from an asynchronous context.
#[derive(Debug)]
pub struct OperationHandle<R, M> {
    runtime: Runtime,
    inner: crate::OperationHandle<R, M>,
}

impl<R, M> OperationHandle<R, M>
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    pub fn new(runtime: Runtime, inner: crate::OperationHandle<R, M>) -> Self {
        Self { runtime, inner }
    }

    /// See [crate::OperationHandle::with_polling_backoff_policy].
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.inner = self.inner.with_polling_backoff_policy(v);
        self
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn done(&self) -> bool {
        self.inner.done()
    }

    pub fn metadata(&self) -> Option<M> {
        self.inner.metadata()
    }

    pub fn response(&self) -> Option<R> {
        self.inner.response()
    }

    pub fn error(&self) -> Option<&Status> {
        self.inner.error()
    }

    pub fn operation(&self) -> &longrunning::model::Operation {
        self.inner.operation()
    }

    /// See [crate::OperationHandle::poll_once].
    pub fn poll_once(&mut self) -> Result<bool> {
        self.runtime.block_on(self.inner.poll_once())
    }

    /// See [crate::OperationHandle::wait].
    pub fn wait(&mut self, timeout: Duration) -> Result<()> {
        self.runtime.block_on(self.inner.wait(timeout))
    }

    /// See [crate::OperationHandle::wait_with_cancellation].
    ///
    /// Trigger `cancel` from another thread to stop the wait.
    pub fn wait_with_cancellation(
        &mut self,
        timeout: Duration,
        cancel: CancellationToken,
    ) -> Result<()> {
        self.runtime
            .block_on(self.inner.wait_with_cancellation(timeout, cancel))
    }

    /// See [crate::OperationHandle::result].
    pub fn result(&mut self) -> Result<R> {
        self.runtime.block_on(self.inner.result())
    }

    /// Returns the asynchronous handle.
    pub fn into_inner(self) -> crate::OperationHandle<R, M> {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{failure, pending, replay, success};
    use gax::exponential_backoff::ExponentialBackoffBuilder;

    #[test]
    fn wait_and_result() -> anyhow::Result<()> {
        let (inner, count) = replay(pending(1)?, vec![Ok(pending(2)?), Ok(success()?)]);
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .build()?;
        let mut handle = OperationHandle::new(Runtime::new()?, inner)
            .with_polling_backoff_policy(policy);
        assert_eq!(handle.name(), "test-only-name");
        assert!(!handle.poll_once()?);
        assert_eq!(handle.metadata(), Some(wkt::Timestamp::clamp(2, 0)));
        handle.wait(Duration::from_secs(10))?;
        assert!(handle.done());
        let response = handle.result()?;
        assert_eq!(response.paths, ["a", "b"]);
        assert_eq!(handle.response(), Some(response));
        assert_eq!(*count.lock().unwrap(), 2);
        Ok(())
    }

    #[test]
    fn failed_operation() -> anyhow::Result<()> {
        let (inner, _) = replay(pending(1)?, vec![Ok(failure())]);
        let mut handle = OperationHandle::new(Runtime::new()?, inner);
        let err = handle.result().unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        assert_eq!(handle.error().map(|s| s.message.as_str()), Some("denied"));
        assert!(handle.operation().done);
        Ok(())
    }

    #[test]
    fn cancelled() -> anyhow::Result<()> {
        let (inner, _) = replay(pending(1)?, vec![]);
        let mut handle = OperationHandle::new(Runtime::new()?, inner);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = handle
            .wait_with_cancellation(Duration::from_secs(10), cancel)
            .unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        assert!(!handle.done());
        let inner = handle.into_inner();
        assert_eq!(inner.metadata(), Some(wkt::Timestamp::clamp(1, 0)));
        Ok(())
    }
}
