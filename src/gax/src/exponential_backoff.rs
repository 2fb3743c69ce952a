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

//! Implements exponential backoff for retry loops and polling loops.
//!
//! The delay starts at an initial value, and grows by a scaling factor on
//! each attempt, until it reaches a maximum value. When used between retry
//! attempts the delay is randomized ("full jitter"), so many clients failing
//! at the same time do not retry in lockstep. When used between polls of a
//! long-running operation the delay is used as-is.
//!
//! The defaults are 1 second initial delay, 60 seconds maximum delay, and a
//! scaling factor of 2.0.

use crate::backoff_policy::BackoffPolicy;
use crate::polling_backoff_policy::PollingBackoffPolicy;
use std::time::{Duration, Instant};

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(60);
const DEFAULT_SCALING: f64 = 2.0;

/// The errors detected by [ExponentialBackoffBuilder::build].
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor ({0}) must be at least 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) must be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error("the maximum delay ({maximum:?}) is smaller than the initial delay ({initial:?})")]
    EmptyRange { maximum: Duration, initial: Duration },
}

/// Configures an [ExponentialBackoff].
///
/// # Example
/// ```
/// # use memcache_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
/// use std::time::Duration;
/// let policy = ExponentialBackoffBuilder::new()
///     .with_initial_delay(Duration::from_millis(250))
///     .with_maximum_delay(Duration::from_secs(10))
///     .with_scaling(3.0)
///     .build()?;
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Creates a builder with the default parameters.
    pub fn new() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
        }
    }

    /// Sets the delay after the first attempt.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Sets the upper bound for the delay.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Sets the growth factor between two consecutive delays.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Validates the parameters and creates the policy.
    ///
    /// # Example
    /// ```
    /// # use memcache_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
    /// # use memcache_gax::polling_backoff_policy::PollingBackoffPolicy;
    /// use std::time::{Duration, Instant};
    /// let policy = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::from_secs(2))
    ///     .with_maximum_delay(Duration::from_secs(5))
    ///     .build()?;
    /// assert_eq!(policy.wait_period(Instant::now(), 1), Duration::from_secs(2));
    /// assert_eq!(policy.wait_period(Instant::now(), 2), Duration::from_secs(4));
    /// assert_eq!(policy.wait_period(Instant::now(), 3), Duration::from_secs(5));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        // NaN fails this comparison too.
        if !(self.scaling >= 1.0) {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
        })
    }

    /// Creates the policy, forcing the parameters into usable ranges.
    ///
    /// The maximum delay is clamped to `[1s, 24h]`, then the initial delay is
    /// clamped to `[1ms, maximum delay]`, and the scaling factor is clamped to
    /// `[1.0, 32.0]`.
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = if self.scaling.is_nan() {
            DEFAULT_SCALING
        } else {
            self.scaling.clamp(1.0, 32.0)
        };
        let maximum_delay = self
            .maximum_delay
            .clamp(Duration::from_secs(1), Duration::from_secs(24 * 60 * 60));
        let initial_delay = self
            .initial_delay
            .clamp(Duration::from_millis(1), maximum_delay);
        ExponentialBackoff {
            initial_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A backoff policy with exponentially growing delays.
///
/// Use [ExponentialBackoffBuilder] to create instances with non-default
/// parameters.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    /// The delay after `attempt_count` attempts, without jitter.
    fn delay(&self, attempt_count: u32) -> Duration {
        let exponent = attempt_count.saturating_sub(1).min(i32::MAX as u32) as i32;
        let factor = self.scaling.powi(exponent);
        // Avoid overflows in `mul_f64()`, the factor may be infinite.
        if factor >= self.maximum_delay.div_duration_f64(self.initial_delay) {
            return self.maximum_delay;
        }
        self.initial_delay.mul_f64(factor)
    }

    fn delay_with_jitter<R: rand::Rng>(&self, attempt_count: u32, rng: &mut R) -> Duration {
        let delay = self.delay(attempt_count);
        rng.random_range(Duration::ZERO..=delay)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().clamp()
    }
}

impl BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        self.delay_with_jitter(attempt_count, &mut rand::rng())
    }
}

impl PollingBackoffPolicy for ExponentialBackoff {
    fn wait_period(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        self.delay(attempt_count)
    }
}
