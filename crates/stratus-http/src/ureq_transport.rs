// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Blocking transport backed by `ureq`.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::trace;
use ureq::ErrorKind;

use crate::{HttpError, HttpRequest, HttpResponse, HttpTransport};

/// Transport that performs real network calls through a shared `ureq::Agent`.
///
/// The agent pools connections and is cheap to clone, so one transport can be
/// shared by every client of a process.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(connect_timeout)
            .timeout_read(read_timeout)
            .build();
        Self { agent }
    }

    fn read_response(response: ureq::Response) -> Result<HttpResponse, HttpError> {
        let status = response.status();
        let mut headers = BTreeMap::new();
        for name in response.headers_names() {
            if let Some(value) = response.header(&name) {
                headers.insert(name.to_ascii_lowercase(), value.to_string());
            }
        }
        let body = response
            .into_string()
            .map_err(|e| HttpError::Io(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(10), Duration::from_secs(60))
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        trace!(method = %request.method, url = %request.url, "sending request");

        let mut call = self.agent.request(request.method.as_str(), &request.url);
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        let result = match &request.body {
            Some(body) => call.send_string(body),
            None => call.call(),
        };

        match result {
            Ok(response) => Self::read_response(response),
            // ureq reports 4xx/5xx as errors; callers want them as responses.
            Err(ureq::Error::Status(_, response)) => Self::read_response(response),
            Err(ureq::Error::Transport(transport)) => Err(map_transport_error(&transport)),
        }
    }
}

fn map_transport_error(transport: &ureq::Transport) -> HttpError {
    let message = transport.to_string();
    match transport.kind() {
        ErrorKind::Dns | ErrorKind::ConnectionFailed | ErrorKind::ProxyConnect => {
            HttpError::Connect(message)
        }
        ErrorKind::InvalidUrl
        | ErrorKind::UnknownScheme
        | ErrorKind::InvalidProxyUrl
        | ErrorKind::InsecureRequestHttpsOnly => HttpError::InvalidRequest(message),
        ErrorKind::Io if message.contains("timed out") => HttpError::Timeout(message),
        _ => HttpError::Io(message),
    }
}
