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

//! Types and functions to make LROs easier to use and to require less boilerplate.
//!
//! Mutating RPCs return a long-running operation (LRO). The client wraps the
//! operation in an [OperationHandle], which knows how to query the service for
//! the latest status of the operation and how to decode its results.
//!
//! ```no_run
//! # use memcache_lro::OperationHandle;
//! # use std::time::Duration;
//! # async fn sample(mut handle: OperationHandle<wkt::Empty, wkt::Empty>) -> gax::Result<()> {
//! handle.wait(Duration::from_secs(600)).await?;
//! let response = handle.result().await?;
//! println!("operation {} completed with {response:?}", handle.name());
//! # Ok(()) }
//! ```

use gax::Result;
use gax::error::Error;
use gax::error::rpc::Status;
use gax::exponential_backoff::ExponentialBackoff;
use gax::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub mod blocking;
mod details;

/// The default timeout for [OperationHandle::result].
///
/// Matches the timeout for mutating RPCs in the Memcache service.
pub const DEFAULT_RESULT_TIMEOUT: Duration = Duration::from_secs(20 * 60);

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
/// * `M` - the metadata type. While operations are in progress the LRO may
///   return values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// Not all errors indicate that the operation failed. For example, this
    /// may fail because it was not possible to connect to Google Cloud. The
    /// operation continues on the service, and a new handle created from the
    /// operation name may observe its completion.
    PollingError(Error),
}

type PollFuture = Pin<Box<dyn Future<Output = Result<longrunning::model::Operation>> + Send>>;
type PollFn = Arc<dyn Fn(String) -> PollFuture + Send + Sync>;

/// A handle to a long-running operation with typed responses and metadata.
///
/// The handle holds the last observed state of the operation. That state only
/// changes when the handle polls the service: [poll_once][Self::poll_once],
/// [wait][Self::wait] and [result][Self::result] query the service, all other
/// functions inspect the cached state. Once the operation is done the handle
/// never issues another RPC. Dropping the handle does not cancel the
/// operation.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   long-running operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the long-running operation is still in progress.
pub struct OperationHandle<R, M> {
    operation: longrunning::model::Operation,
    poll: PollFn,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    _types: PhantomData<fn() -> (R, M)>,
}

impl<R, M> OperationHandle<R, M>
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    /// Creates a handle from the operation returned by the service.
    ///
    /// Generated clients create handles, applications should have no need to
    /// call this function.
    ///
    /// # Parameters
    /// * `operation` - the operation as returned by the mutating RPC.
    /// * `poll` - queries the latest status of an operation, given its name.
    ///   Typically this closure captures a client stub and the request options.
    pub fn new<P, F>(operation: longrunning::model::Operation, poll: P) -> Self
    where
        P: Fn(String) -> F + Send + Sync + 'static,
        F: Future<Output = Result<longrunning::model::Operation>> + Send + 'static,
    {
        let poll: PollFn = Arc::new(move |name| Box::pin(poll(name)));
        Self {
            operation,
            poll,
            polling_backoff_policy: Arc::new(ExponentialBackoff::default()),
            _types: PhantomData,
        }
    }

    /// Changes the policy that controls the delay between polls in
    /// [wait][Self::wait].
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.polling_backoff_policy = v.into().into();
        self
    }

    /// The server-assigned name of the operation.
    pub fn name(&self) -> &str {
        &self.operation.name
    }

    /// Returns true if the operation reached a terminal state.
    pub fn done(&self) -> bool {
        self.operation.done
    }

    /// The last observed metadata.
    ///
    /// Returns `None` if the service did not include metadata, or if the
    /// metadata is not of type `M`.
    pub fn metadata(&self) -> Option<M> {
        details::as_metadata(&self.operation)
    }

    /// The response of a successful operation.
    ///
    /// Returns `None` while the operation is in progress, if it failed, or if
    /// the response is not of type `R`. Use [result][Self::result] to find out
    /// why a completed operation has no response.
    pub fn response(&self) -> Option<R> {
        self.operation.response().and_then(|a| a.to_msg::<R>().ok())
    }

    /// The error status of a failed operation.
    pub fn error(&self) -> Option<&Status> {
        self.operation.error()
    }

    /// The last observed state of the operation, as returned by the service.
    pub fn operation(&self) -> &longrunning::model::Operation {
        &self.operation
    }

    /// Queries the service once for the latest status of the operation.
    ///
    /// Returns whether the operation is done. If the operation was already
    /// done this does not make an RPC. If the query fails the error is returned
    /// unchanged and the handle keeps its previous state.
    pub async fn poll_once(&mut self) -> Result<bool> {
        if self.operation.done {
            return Ok(true);
        }
        let operation = (self.poll)(self.operation.name.clone()).await?;
        tracing::debug!(
            name = %operation.name,
            done = operation.done,
            "polled long-running operation"
        );
        self.operation = operation;
        if self.operation.done {
            match self.operation.error() {
                Some(status) => tracing::debug!(
                    name = %self.operation.name,
                    code = %status.code,
                    "long-running operation failed"
                ),
                None => tracing::debug!(
                    name = %self.operation.name,
                    "long-running operation succeeded"
                ),
            }
        }
        Ok(self.operation.done)
    }

    /// Polls the operation until it is done, or until `timeout` elapses.
    ///
    /// The delay between polls is controlled by the polling backoff policy.
    /// The default policy starts at 1 second and doubles the delay up to 60
    /// seconds.
    ///
    /// Returns an error satisfying [Error::is_deadline_exceeded] if the
    /// operation is not done before the timeout. The handle keeps the last
    /// observed metadata. Any polling error stops the loop and is returned
    /// unchanged.
    pub async fn wait(&mut self, timeout: Duration) -> Result<()> {
        let loop_start = std::time::Instant::now();
        let deadline = tokio::time::Instant::now() + timeout;
        let mut attempt_count = 0_u32;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() && !self.done() {
                return Err(Error::deadline_exceeded(timeout));
            }
            attempt_count += 1;
            let done = tokio::time::timeout(remaining, self.poll_once())
                .await
                .map_err(|_| Error::deadline_exceeded(timeout))??;
            if done {
                return Ok(());
            }
            let delay = self
                .polling_backoff_policy
                .wait_period(loop_start, attempt_count);
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if delay >= remaining {
                tokio::time::sleep(remaining).await;
                return Err(Error::deadline_exceeded(timeout));
            }
            tokio::time::sleep(delay).await;
        }
    }

    /// Like [wait][Self::wait], but stops early when `cancel` is triggered.
    ///
    /// On cancellation returns an error satisfying [Error::is_cancelled]. Any
    /// in-flight poll is abandoned and its result discarded, so the handle
    /// keeps its previous state and may be polled again.
    pub async fn wait_with_cancellation(
        &mut self,
        timeout: Duration,
        cancel: CancellationToken,
    ) -> Result<()> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::cancelled()),
            r = self.wait(timeout) => r,
        }
    }

    /// Waits for the operation to complete and returns its response.
    ///
    /// If the operation is not done this waits up to
    /// [DEFAULT_RESULT_TIMEOUT]. Use [wait][Self::wait] first to change the
    /// timeout.
    ///
    /// A failed operation returns an error satisfying
    /// [Error::is_operation_failed], with the status reported by the service.
    pub async fn result(&mut self) -> Result<R> {
        if !self.done() {
            self.wait(DEFAULT_RESULT_TIMEOUT).await?;
        }
        details::as_result(&self.operation)
    }

    /// Converts the handle into a stream of polling results.
    ///
    /// The stream polls the service each time it is polled, sleeping between
    /// RPCs according to the polling backoff policy. It yields
    /// [PollingResult::InProgress] for each poll that finds the operation still
    /// running, and ends after yielding [PollingResult::Completed] or
    /// [PollingResult::PollingError].
    pub fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Send
    where
        R: Send,
        M: Send,
    {
        use futures::stream::unfold;
        let loop_start = std::time::Instant::now();
        unfold(Some((self, 0_u32)), move |state| async move {
            let (mut handle, attempt_count) = state?;
            if attempt_count > 0 {
                let delay = handle
                    .polling_backoff_policy
                    .wait_period(loop_start, attempt_count);
                tokio::time::sleep(delay).await;
            }
            match handle.poll_once().await {
                Err(e) => Some((PollingResult::PollingError(e), None)),
                Ok(true) => {
                    let result = details::as_result(&handle.operation);
                    Some((PollingResult::Completed(result), None))
                }
                Ok(false) => {
                    let metadata = handle.metadata();
                    Some((
                        PollingResult::InProgress(metadata),
                        Some((handle, attempt_count + 1)),
                    ))
                }
            }
        })
    }
}

impl<R, M> std::fmt::Debug for OperationHandle<R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationHandle")
            .field("operation", &self.operation)
            .field("polling_backoff_policy", &self.polling_backoff_policy)
            .finish()
    }
}
