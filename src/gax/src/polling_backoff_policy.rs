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

//! Defines the trait for polling backoff policies.
//!
//! Long-running operations are polled until they complete. The time between
//! two polls is controlled by a [PollingBackoffPolicy]. Unlike the backoff
//! between retry attempts, polling does not benefit from jitter, the
//! operation is expected to make progress between polls.

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Computes the delay between two polls of a long-running operation.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay before the next poll.
    ///
    /// # Parameters
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of polls so far, always at least 1.
    fn wait_period(&self, loop_start: Instant, attempt_count: u32) -> Duration;
}

/// A helper type to use [PollingBackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct PollingBackoffPolicyArg(pub(crate) Arc<dyn PollingBackoffPolicy>);

impl<T> From<T> for PollingBackoffPolicyArg
where
    T: PollingBackoffPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingBackoffPolicy>> for PollingBackoffPolicyArg {
    fn from(value: Arc<dyn PollingBackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingBackoffPolicyArg> for Arc<dyn PollingBackoffPolicy> {
    fn from(value: PollingBackoffPolicyArg) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;

    #[test]
    fn from_exponential() {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(2))
            .with_maximum_delay(Duration::from_secs(2))
            .clamp();
        let arg = PollingBackoffPolicyArg::from(policy);
        let delay = arg.0.wait_period(Instant::now(), 3);
        assert_eq!(delay, Duration::from_secs(2));
    }

    #[test]
    fn from_arc() {
        let policy: Arc<dyn PollingBackoffPolicy> =
            Arc::new(ExponentialBackoffBuilder::new().clamp());
        let arg = PollingBackoffPolicyArg::from(policy.clone());
        let back: Arc<dyn PollingBackoffPolicy> = arg.into();
        assert!(Arc::ptr_eq(&policy, &back));
    }
}
