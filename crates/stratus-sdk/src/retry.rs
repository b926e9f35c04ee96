// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Retry strategies for service calls.
//!
//! A [`RetryStrategy`] is plain configuration: how many attempts, how long in
//! total, how to back off between attempts and which failures are worth
//! another attempt. Operations pick it up from their own override or from the
//! client configuration; when neither supplies one the call is made once.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{Result, SdkError};

/// How randomness is mixed into a backoff delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Jitter {
    /// Exact exponential delays.
    None,
    /// Uniform in `[0, delay]`.
    Full,
    /// Half the delay plus uniform in `[0, delay / 2]`.
    #[default]
    Equal,
}

/// Exponential backoff between attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct BackoffPolicy {
    pub base: Duration,
    pub multiplier: u32,
    pub cap: Duration,
    pub jitter: Jitter,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::exponential(Duration::from_secs(1), Duration::from_secs(30))
    }
}

impl BackoffPolicy {
    /// Doubling delays starting at `base`, never above `cap`.
    pub fn exponential(base: Duration, cap: Duration) -> Self {
        Self {
            base,
            multiplier: 2,
            cap,
            jitter: Jitter::Equal,
        }
    }

    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier.max(1);
        self
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    /// Upper bound of the delay after `attempt` failed attempts.
    pub fn max_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let factor = (self.multiplier as u64).saturating_pow(exponent);
        let base_ms = self.base.as_millis() as u64;
        let cap_ms = self.cap.as_millis() as u64;
        Duration::from_millis(base_ms.saturating_mul(factor).min(cap_ms))
    }

    /// Delay to sleep after `attempt` failed attempts, jitter applied.
    pub fn delay(&self, attempt: u32) -> Duration {
        let max_ms = self.max_delay(attempt).as_millis() as u64;
        let ms = match self.jitter {
            Jitter::None => max_ms,
            Jitter::Full => rand::thread_rng().gen_range(0..=max_ms),
            Jitter::Equal => {
                let half = max_ms / 2;
                half + rand::thread_rng().gen_range(0..=max_ms - half)
            }
        };
        Duration::from_millis(ms)
    }
}

/// Decides whether a failed attempt may be retried.
#[derive(Clone, Default)]
pub enum RetryChecker {
    /// See [`is_retryable_by_default`].
    #[default]
    Default,
    Custom(Arc<dyn Fn(&SdkError) -> bool + Send + Sync>),
}

impl RetryChecker {
    pub fn custom(f: impl Fn(&SdkError) -> bool + Send + Sync + 'static) -> Self {
        RetryChecker::Custom(Arc::new(f))
    }

    pub fn is_retryable(&self, err: &SdkError) -> bool {
        match self {
            RetryChecker::Default => is_retryable_by_default(err),
            RetryChecker::Custom(f) => f(err),
        }
    }
}

impl fmt::Debug for RetryChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryChecker::Default => f.write_str("Default"),
            RetryChecker::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Transient transport failures, `409 IncorrectState`, `429` and every `5xx`
/// except `501`.
pub fn is_retryable_by_default(err: &SdkError) -> bool {
    match err {
        SdkError::Transport(e) => e.is_transient(),
        SdkError::Service(e) => match e.status {
            409 => e.code == "IncorrectState",
            429 => true,
            501 => false,
            status => status >= 500,
        },
        _ => false,
    }
}

/// Attempts, time budget, backoff and retryable-failure predicate.
#[derive(Debug, Clone)]
pub struct RetryStrategy {
    /// Total attempts including the first one. Never zero.
    pub max_attempts: u32,
    /// No retry is started once this much time has passed.
    pub max_elapsed: Duration,
    pub backoff: BackoffPolicy,
    pub checker: RetryChecker,
}

impl RetryStrategy {
    /// A single attempt.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            max_elapsed: Duration::ZERO,
            backoff: BackoffPolicy::default(),
            checker: RetryChecker::Default,
        }
    }

    /// 8 attempts within 600 s, exponential backoff from 1 s capped at 30 s
    /// with equal jitter.
    pub fn default_strategy() -> Self {
        Self {
            max_attempts: 8,
            max_elapsed: Duration::from_secs(600),
            backoff: BackoffPolicy::default(),
            checker: RetryChecker::Default,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_max_elapsed(mut self, max_elapsed: Duration) -> Self {
        self.max_elapsed = max_elapsed;
        self
    }

    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_checker(mut self, checker: RetryChecker) -> Self {
        self.checker = checker;
        self
    }

    /// Call `f` with the 1-based attempt number until it succeeds, fails with
    /// a non-retryable error, or the attempt or time budget runs out. The last
    /// error is returned unchanged.
    pub fn make_retrying_call<T, F>(&self, operation: &str, mut f: F) -> Result<T>
    where
        F: FnMut(u32) -> Result<T>,
    {
        let started = Instant::now();
        let mut attempt = 1;

        loop {
            let err = match f(attempt) {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if attempt >= self.max_attempts {
                if self.max_attempts > 1 {
                    debug!(operation, attempt, "retry attempts exhausted");
                }
                return Err(err);
            }
            if !self.checker.is_retryable(&err) {
                return Err(err);
            }

            let delay = self.backoff.delay(attempt);
            if started.elapsed() + delay > self.max_elapsed {
                debug!(operation, attempt, "retry time budget exhausted");
                return Err(err);
            }

            warn!(
                operation,
                attempt,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Retrying request"
            );
            std::thread::sleep(delay);
            attempt += 1;
        }
    }
}

/// Per-operation override first, then the client default, else a single attempt.
pub fn resolve_strategy(
    operation_override: Option<&RetryStrategy>,
    client_default: Option<&RetryStrategy>,
) -> RetryStrategy {
    operation_override
        .or(client_default)
        .cloned()
        .unwrap_or_else(RetryStrategy::none)
}
