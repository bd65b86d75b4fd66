//! Integration tests for the Edit Customer modal.

mod common;

use common::TestCtx;
use inkle_business::EditPhase;
use inkle_ui::widgets::taxes::edit_modal::MODAL_TITLE;
use kittest::Queryable;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_open_modal_loads_countries() {
    let mut ctx = TestCtx::new_app().await;
    ctx.settle().await;

    ctx.harness_mut().state_mut().state_mut().taxes.open_edit("2");
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label(MODAL_TITLE).is_some());
    let edit = &harness.state().state().taxes.edit;
    assert_eq!(edit.phase(), &EditPhase::Editing);
    assert_eq!(edit.name(), "Globex");
    assert_eq!(edit.country(), "India");
    assert_eq!(edit.countries().as_slice().len(), 3);
}

#[tokio::test]
async fn test_save_closes_modal_and_refetches() {
    let mut ctx = TestCtx::new_app().await;

    Mock::given(method("PUT"))
        .and(path("/taxes/1"))
        .and(body_partial_json(json!({
            "id": "1",
            "name": "Jane Doe",
            "country": "Canada",
            "gender": "male"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Jane Doe",
            "gender": "male",
            "requestDate": "2024-03-05",
            "country": "Canada"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;

    ctx.settle().await;
    {
        let taxes = &mut ctx.harness_mut().state_mut().state_mut().taxes;
        taxes.open_edit("1");
        taxes.edit.set_name("Jane Doe");
        taxes.edit.select_country("Canada");
        taxes.save_edit().unwrap();
    }
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(!harness.state().state().taxes.edit.is_open());
    assert!(harness.query_by_label(MODAL_TITLE).is_none());

    let requests = ctx.mock_server().received_requests().await.unwrap();
    let list_fetches = requests
        .iter()
        .filter(|request| request.method.as_str() == "GET" && request.url.path() == "/taxes")
        .count();
    assert_eq!(list_fetches, 2, "save should trigger a full re-fetch");
}

#[tokio::test]
async fn test_save_failure_keeps_modal_open() {
    let mut ctx = TestCtx::new_app().await;

    Mock::given(method("PUT"))
        .and(path("/taxes/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(ctx.mock_server())
        .await;

    ctx.settle().await;
    {
        let taxes = &mut ctx.harness_mut().state_mut().state_mut().taxes;
        taxes.open_edit("3");
        taxes.save_edit().unwrap();
    }
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label(MODAL_TITLE).is_some());
    assert!(
        harness
            .query_by_label_contains("Failed to save. Please try again.")
            .is_some()
    );
    // Retry stays possible.
    assert!(harness.state().state().taxes.edit.can_save());
}

#[tokio::test]
async fn test_cancel_closes_modal() {
    let mut ctx = TestCtx::new_app().await;
    ctx.settle().await;

    ctx.harness_mut().state_mut().state_mut().taxes.open_edit("1");
    ctx.settle().await;
    let harness = ctx.harness_mut();
    assert!(harness.query_by_label(MODAL_TITLE).is_some());

    harness.get_by_label("Cancel").click();
    harness.run_steps(3);

    assert!(!harness.state().state().taxes.edit.is_open());
    assert!(harness.query_by_label(MODAL_TITLE).is_none());
}
