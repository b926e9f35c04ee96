// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Waiters and composite operations driven through the client.

mod common;

use std::time::Duration;

use common::{Widget, WidgetState, client, widget_json};
use stratus_http::Method;
use stratus_http::mock::MockTransport;
use stratus_sdk::waiter::compose;
use stratus_sdk::{ClientConfig, CompositeError, OperationRequest, SdkError, WaitOptions, wait_until};

fn fast() -> WaitOptions {
    WaitOptions::new()
        .with_initial_interval(Duration::ZERO)
        .with_max_interval(Duration::ZERO)
        .with_max_wait(Duration::from_secs(5))
}

fn get(client: &stratus_sdk::ApiClient, id: &str) -> stratus_sdk::Result<Widget> {
    client
        .call_api(
            OperationRequest::new("get_widget", Method::Get, "/widgets/{widgetId}")
                .path_param("widgetId", id),
        )?
        .into_model()
}

#[test]
fn test_create_then_wait_for_active() {
    let transport = MockTransport::new();
    transport.push_json(200, &widget_json("w1", "CREATING"));
    transport.push_json(200, &widget_json("w1", "CREATING"));
    transport.push_json(200, &widget_json("w1", "ACTIVE"));
    let client = client(ClientConfig::new(), &transport);

    let created = client
        .call_api(OperationRequest::new("create_widget", Method::Post, "/widgets").mutating())
        .and_then(|r| r.into_model::<Widget>());

    let result = compose(created, |widget| {
        wait_until(
            "widget ACTIVE",
            &fast(),
            || get(&client, &widget.id),
            |w| w.lifecycle_state == Some(WidgetState::Active),
        )
    })
    .unwrap();

    assert_eq!(
        result.unwrap().lifecycle_state,
        Some(WidgetState::Active)
    );
    assert_eq!(transport.request_count(), 3);
}

#[test]
fn test_wait_failure_keeps_partial_result() {
    let transport = MockTransport::new();
    transport.push_json(200, &widget_json("w1", "CREATING"));
    transport.push_json(500, r#"{"code":"InternalServerError","message":"x"}"#);
    let client = client(ClientConfig::new(), &transport);

    let created = client
        .call_api(OperationRequest::new("create_widget", Method::Post, "/widgets").mutating())
        .and_then(|r| r.into_model::<Widget>());

    let err = compose(created, |widget| {
        wait_until("widget ACTIVE", &fast(), || get(&client, &widget.id), |_| false)
    })
    .unwrap_err();

    match err {
        CompositeError::Wait { partial, cause } => {
            assert_eq!(partial.id, "w1");
            assert_eq!(cause.status(), Some(500));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_failed_mutation_has_no_partial() {
    let transport = MockTransport::new();
    transport.push_json(400, r#"{"code":"InvalidParameter","message":"bad"}"#);
    let client = client(ClientConfig::new(), &transport);

    let created = client
        .call_api(OperationRequest::new("create_widget", Method::Post, "/widgets").mutating())
        .and_then(|r| r.into_model::<Widget>());
    let err = compose(created, |_| Ok::<_, SdkError>(())).unwrap_err();
    assert!(err.partial().is_none());
    assert_eq!(err.cause().status(), Some(400));
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn test_delete_wait_succeeds_on_not_found() {
    let transport = MockTransport::new();
    transport.push_json(200, &widget_json("w1", "DELETING"));
    transport.push_json(404, r#"{"code":"NotAuthorizedOrNotFound","message":"gone"}"#);
    let client = client(ClientConfig::new(), &transport);

    let result = wait_until(
        "widget DELETED",
        &fast().with_succeed_on_not_found(true),
        || get(&client, "w1"),
        |w| w.lifecycle_state == Some(WidgetState::Deleted),
    )
    .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_wait_times_out() {
    let transport = MockTransport::new();
    transport.push_json(200, &widget_json("w1", "CREATING"));
    let client = client(ClientConfig::new(), &transport);

    let err = wait_until(
        "widget ACTIVE",
        &fast().with_max_wait(Duration::ZERO),
        || get(&client, "w1"),
        |w| w.lifecycle_state == Some(WidgetState::Active),
    )
    .unwrap_err();
    assert!(matches!(err, SdkError::WaitTimeout { ref what, .. } if what == "widget ACTIVE"));
}
