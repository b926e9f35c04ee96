// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Mock transport for testing.
//!
//! Responses are scripted up front and handed out in order; every request the
//! transport sees is recorded so tests can assert on paths, headers and bodies
//! without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{HttpError, HttpRequest, HttpResponse, HttpTransport};

type Scripted = Result<HttpResponse, HttpError>;

/// Scripted transport. Clones share the same script and request log.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn push_response(&self, response: HttpResponse) -> &Self {
        lock(&self.script).push_back(Ok(response));
        self
    }

    /// Queue a JSON response with the given status.
    pub fn push_json(&self, status: u16, body: &str) -> &Self {
        self.push_response(
            HttpResponse::new(status)
                .with_header("content-type", "application/json")
                .with_body(body),
        )
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: HttpError) -> &Self {
        lock(&self.script).push_back(Err(error));
        self
    }

    /// All requests received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Number of scripted entries not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.script).len()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        lock(&self.requests).push(request.clone());
        lock(&self.script).pop_front().unwrap_or_else(|| {
            Err(HttpError::Exhausted(format!(
                "no scripted response for {} {}",
                request.method, request.url
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    #[test]
    fn test_responses_are_returned_in_order() {
        let transport = MockTransport::new();
        transport.push_json(200, "{}").push_json(404, "{}");

        let request = HttpRequest::new(Method::Get, "https://example.com/a");
        assert_eq!(transport.send(&request).unwrap().status, 200);
        assert_eq!(transport.send(&request).unwrap().status, 404);
        assert!(matches!(
            transport.send(&request),
            Err(HttpError::Exhausted(_))
        ));
        assert_eq!(transport.request_count(), 3);
    }

    #[test]
    fn test_clones_share_state() {
        let transport = MockTransport::new();
        let handle = transport.clone();
        transport.push_error(HttpError::Connect("refused".into()));

        let request = HttpRequest::new(Method::Post, "https://example.com/b");
        assert!(handle.send(&request).is_err());
        assert_eq!(transport.last_request().unwrap().method, Method::Post);
        assert_eq!(transport.remaining(), 0);
    }
}
