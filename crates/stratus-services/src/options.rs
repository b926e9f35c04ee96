// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Per-call options shared by every service operation.

use stratus_sdk::{OperationRequest, RetryStrategy};

/// Options accepted by every operation.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Caller-supplied `opc-request-id`.
    pub opc_request_id: Option<String>,
    /// Overrides the client-level retry strategy for this call.
    pub retry_strategy: Option<RetryStrategy>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(request_id.into());
        self
    }

    pub fn with_retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = Some(strategy);
        self
    }

    pub(crate) fn apply(&self, request: OperationRequest) -> OperationRequest {
        request
            .request_id(self.opc_request_id.clone())
            .retry_strategy(self.retry_strategy.clone())
    }
}

/// Options for operations that create resources.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub opc_request_id: Option<String>,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    pub retry_strategy: Option<RetryStrategy>,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(request_id.into());
        self
    }

    pub fn with_retry_token(mut self, token: impl Into<String>) -> Self {
        self.opc_retry_token = Some(token.into());
        self
    }

    pub fn with_retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = Some(strategy);
        self
    }

    pub(crate) fn apply(&self, request: OperationRequest) -> OperationRequest {
        request
            .mutating()
            .retry_token(self.opc_retry_token.clone())
            .request_id(self.opc_request_id.clone())
            .retry_strategy(self.retry_strategy.clone())
    }
}

/// Options for update and delete operations.
#[derive(Debug, Clone, Default)]
pub struct ConditionalOptions {
    /// ETag from a previous GET; the call fails with 412 if it no longer matches.
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_strategy: Option<RetryStrategy>,
}

impl ConditionalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_if_match(mut self, etag: impl Into<String>) -> Self {
        self.if_match = Some(etag.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(request_id.into());
        self
    }

    pub fn with_retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = Some(strategy);
        self
    }

    pub(crate) fn apply(&self, request: OperationRequest) -> OperationRequest {
        request
            .if_match(self.if_match.clone())
            .request_id(self.opc_request_id.clone())
            .retry_strategy(self.retry_strategy.clone())
    }
}

/// Paging and sorting shared by list operations.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Page size, 1..=1000.
    pub limit: Option<u32>,
    /// `opc-next-page` from the previous response.
    pub page: Option<String>,
    pub sort_order: Option<stratus_sdk::SortOrder>,
    /// Must be one of the operation's sort fields.
    pub sort_by: Option<String>,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_sort_order(mut self, order: stratus_sdk::SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    pub fn with_sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    /// Check limit and sort parameters, then add them to the query.
    pub(crate) fn apply(
        &self,
        operation: &str,
        sort_by_allowed: &[&str],
        request: OperationRequest,
    ) -> stratus_sdk::Result<OperationRequest> {
        use stratus_sdk::WireEnum;
        use stratus_sdk::validation::{require_allowed, require_in_range};

        if let Some(limit) = self.limit {
            require_in_range(operation, "limit", limit, 1, 1000)?;
        }
        if let Some(sort_by) = &self.sort_by {
            require_allowed(operation, "sort_by", sort_by, sort_by_allowed)?;
        }
        if let Some(order) = &self.sort_order {
            require_allowed(
                operation,
                "sort_order",
                order.as_wire(),
                stratus_sdk::SortOrder::VALUES,
            )?;
        }

        Ok(request
            .query("limit", self.limit)
            .query("page", self.page.as_deref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("sortBy", self.sort_by.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_sdk::{Method, SdkError, SortOrder};

    fn list() -> OperationRequest {
        OperationRequest::new("list_things", Method::Get, "/things")
    }

    #[test]
    fn test_page_options_query() {
        let request = PageOptions::new()
            .with_limit(50)
            .with_page("p2")
            .with_sort_order(SortOrder::Desc)
            .with_sort_by("TIMECREATED")
            .apply("list_things", &["TIMECREATED"], list())
            .unwrap();
        assert_eq!(
            request.query_string(),
            "?limit=50&page=p2&sortOrder=DESC&sortBy=TIMECREATED"
        );
    }

    #[test]
    fn test_page_options_validation() {
        let err = PageOptions::new()
            .with_limit(0)
            .apply("list_things", &[], list())
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidParameter { .. }));

        let err = PageOptions::new()
            .with_sort_by("NAME")
            .apply("list_things", &["TIMECREATED"], list())
            .unwrap_err();
        assert!(err.to_string().contains("sort_by"));

        let err = PageOptions::new()
            .with_sort_order(SortOrder::UnknownValue("SIDEWAYS".into()))
            .apply("list_things", &[], list())
            .unwrap_err();
        assert!(err.to_string().contains("sort_order"));
    }
}
