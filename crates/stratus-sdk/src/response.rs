// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Successful responses.

use std::collections::BTreeMap;

use stratus_http::HttpResponse;

use crate::error::{Result, SdkError};
use crate::model::Model;

pub const HEADER_REQUEST_ID: &str = "opc-request-id";
pub const HEADER_NEXT_PAGE: &str = "opc-next-page";
pub const HEADER_WORK_REQUEST_ID: &str = "opc-work-request-id";
pub const HEADER_ETAG: &str = "etag";

/// A 2xx response that has not been decoded yet.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    operation: &'static str,
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    pub(crate) fn new(operation: &'static str, response: HttpResponse) -> Self {
        Self {
            operation,
            status: response.status,
            headers: response.headers,
            body: response.body,
        }
    }

    /// Decode the body into a model.
    pub fn into_model<M: Model>(self) -> Result<M> {
        if self.body.trim().is_empty() {
            return Err(SdkError::UnexpectedResponse(format!(
                "{} returned an empty body, expected {}",
                self.operation,
                M::NAME
            )));
        }
        M::from_json_str(&self.body)
    }

    /// Decode the body and keep status and headers alongside it.
    pub fn into_response<M: Model>(self) -> Result<Response<M>> {
        let status = self.status;
        let headers = self.headers.clone();
        let data = self.into_model()?;
        Ok(Response {
            data,
            status,
            headers,
        })
    }

    /// Drop the body; used by delete-style operations.
    pub fn into_empty(self) -> Response<()> {
        Response {
            data: (),
            status: self.status,
            headers: self.headers,
        }
    }
}

/// A decoded response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub data: T,
    pub status: u16,
    pub headers: BTreeMap<String, String>,
}

impl<T> Response<T> {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn request_id(&self) -> Option<&str> {
        self.header(HEADER_REQUEST_ID)
    }

    pub fn etag(&self) -> Option<&str> {
        self.header(HEADER_ETAG)
    }

    /// Continuation token for list operations.
    pub fn next_page(&self) -> Option<&str> {
        self.header(HEADER_NEXT_PAGE).filter(|v| !v.is_empty())
    }

    /// Work request started by an asynchronous mutation.
    pub fn work_request_id(&self) -> Option<&str> {
        self.header(HEADER_WORK_REQUEST_ID)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            data: f(self.data),
            status: self.status,
            headers: self.headers,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_accessors() {
        let http = HttpResponse::new(202)
            .with_header("opc-request-id", "REQ1")
            .with_header("ETag", "\"v1\"")
            .with_header("opc-next-page", "")
            .with_header("opc-work-request-id", "wr1");
        let response = ApiResponse::new("delete_thing", http).into_empty();
        assert_eq!(response.status, 202);
        assert_eq!(response.request_id(), Some("REQ1"));
        assert_eq!(response.etag(), Some("\"v1\""));
        assert_eq!(response.next_page(), None);
        assert_eq!(response.work_request_id(), Some("wr1"));
    }

    #[test]
    fn test_map_keeps_headers() {
        let http = HttpResponse::new(200).with_header("opc-next-page", "p2");
        let response = ApiResponse::new("list", http).into_empty().map(|_| vec![1, 2]);
        assert_eq!(response.data, vec![1, 2]);
        assert_eq!(response.next_page(), Some("p2"));
    }
}
