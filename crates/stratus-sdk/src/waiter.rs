// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Polling waiters for long-running operations.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{CompositeError, CompositeResult, Result, SdkError};

/// How long and how often to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    /// Delay before the second poll. Doubles after every poll.
    pub initial_interval: Duration,
    pub max_interval: Duration,
    pub max_wait: Duration,
    /// Treat a 404 while polling as success (used when waiting for deletion).
    pub succeed_on_not_found: bool,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(30),
            max_wait: Duration::from_secs(1200),
            succeed_on_not_found: false,
        }
    }
}

impl WaitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    pub fn with_max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn with_succeed_on_not_found(mut self, succeed: bool) -> Self {
        self.succeed_on_not_found = succeed;
        self
    }
}

/// Poll `fetch` until `is_done` accepts its result.
///
/// Returns `Ok(None)` only when `succeed_on_not_found` is set and a poll
/// answered 404. Any other fetch error ends the wait immediately. When
/// `max_wait` passes first the result is [`SdkError::WaitTimeout`].
pub fn wait_until<T, F, P>(
    what: &str,
    options: &WaitOptions,
    mut fetch: F,
    mut is_done: P,
) -> Result<Option<T>>
where
    F: FnMut() -> Result<T>,
    P: FnMut(&T) -> bool,
{
    let started = Instant::now();
    let mut interval = options.initial_interval;
    let mut polls = 0u32;

    loop {
        polls += 1;
        match fetch() {
            Ok(value) if is_done(&value) => {
                debug!(what, polls, "Wait condition met");
                return Ok(Some(value));
            }
            Ok(_) => {}
            Err(err) if options.succeed_on_not_found && err.is_not_found() => {
                debug!(what, polls, "Resource gone, wait condition met");
                return Ok(None);
            }
            Err(err) => return Err(err),
        }

        let elapsed = started.elapsed();
        if elapsed >= options.max_wait {
            return Err(SdkError::WaitTimeout {
                what: what.to_string(),
                waited: elapsed,
            });
        }

        let sleep = interval.min(options.max_wait - elapsed);
        debug!(what, polls, sleep_ms = sleep.as_millis() as u64, "Waiting before next poll");
        std::thread::sleep(sleep);
        interval = interval.saturating_mul(2).min(options.max_interval);
    }
}

/// Run a mutation, then a wait that depends on its response.
///
/// A failed mutation is [`CompositeError::Operation`]; a failed wait keeps the
/// mutation response in [`CompositeError::Wait`].
pub fn compose<P, T>(
    operation: Result<P>,
    wait: impl FnOnce(&P) -> Result<T>,
) -> CompositeResult<T, P>
where
    P: fmt::Debug,
{
    let partial = operation.map_err(CompositeError::Operation)?;
    match wait(&partial) {
        Ok(value) => Ok(value),
        Err(cause) => Err(CompositeError::Wait { partial, cause }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use chrono::Utc;

    fn fast() -> WaitOptions {
        WaitOptions::new()
            .with_initial_interval(Duration::ZERO)
            .with_max_interval(Duration::ZERO)
            .with_max_wait(Duration::from_secs(5))
    }

    fn not_found() -> SdkError {
        SdkError::Service(ServiceError {
            status: 404,
            code: "NotAuthorizedOrNotFound".to_string(),
            message: "gone".to_string(),
            operation: "get_thing".to_string(),
            endpoint: "GET http://localhost/things/1".to_string(),
            request_id: None,
            timestamp: Utc::now(),
        })
    }

    #[test]
    fn test_defaults() {
        let options = WaitOptions::default();
        assert_eq!(options.max_interval, Duration::from_secs(30));
        assert_eq!(options.max_wait, Duration::from_secs(1200));
        assert!(!options.succeed_on_not_found);
    }

    #[test]
    fn test_polls_until_done() {
        let mut states = vec!["CREATING", "CREATING", "ACTIVE"].into_iter();
        let result = wait_until(
            "thing",
            &fast(),
            || Ok(states.next().unwrap_or("ACTIVE")),
            |s| *s == "ACTIVE",
        )
        .unwrap();
        assert_eq!(result, Some("ACTIVE"));
    }

    #[test]
    fn test_times_out() {
        let options = fast().with_max_wait(Duration::ZERO);
        let mut polls = 0;
        let err = wait_until(
            "thing",
            &options,
            || {
                polls += 1;
                Ok("CREATING")
            },
            |s| *s == "ACTIVE",
        )
        .unwrap_err();
        assert!(matches!(err, SdkError::WaitTimeout { .. }));
        assert_eq!(polls, 1);
    }

    #[test]
    fn test_not_found_handling() {
        let result = wait_until::<(), _, _>(
            "thing",
            &fast().with_succeed_on_not_found(true),
            || Err(not_found()),
            |_| false,
        )
        .unwrap();
        assert!(result.is_none());

        let err = wait_until::<(), _, _>("thing", &fast(), || Err(not_found()), |_| false)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_compose_keeps_partial() {
        let result: CompositeResult<(), &str> = compose(Ok("accepted"), |_| Err(not_found()));
        let err = result.unwrap_err();
        assert_eq!(err.partial(), Some(&"accepted"));
        assert!(err.cause().is_not_found());

        let result: CompositeResult<(), &str> =
            compose(Err(SdkError::Config("bad".into())), |_| Ok(()));
        assert!(matches!(result, Err(CompositeError::Operation(_))));
    }
}
