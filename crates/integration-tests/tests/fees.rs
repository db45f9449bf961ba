//! Fee creation: payload shapes, form lifecycle, and submission guards.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use ismartpay_client::{ApiError, FeeDraft, FeeForm, FeeKind};
use ismartpay_integration_tests::authenticated_console;

const FEES_PATH: &str = "/api/adminFees/fees";

fn rate_draft() -> FeeDraft {
    FeeDraft {
        name: "Transfer fee".to_string(),
        description: "Per transfer".to_string(),
        fee_type: FeeKind::Rate,
        rate: "1.5".to_string(),
        applied_to: "money_transfer".to_string(),
        ..FeeDraft::default()
    }
}

#[tokio::test]
async fn create_rate_fee_sends_numeric_rate_and_null_amount() {
    let tc = authenticated_console().await;

    Mock::given(method("POST"))
        .and(path(FEES_PATH))
        .and(body_json(json!({
            "type": "rate",
            "rate": 1.5,
            "amount": Value::Null,
            "name": "Transfer fee",
            "description": "Per transfer",
            "service_id": "money_transfer",
            "status": "active",
            "channel": "all"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "fee-1"})))
        .expect(1)
        .mount(&tc.server)
        .await;

    Mock::given(method("GET"))
        .and(path(FEES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fees": [
            {"id": "fee-1", "name": "Transfer fee", "type": "rate", "rate": "1.5"}
        ]})))
        .expect(1)
        .mount(&tc.server)
        .await;

    let fees = tc.client.fees().create(&rate_draft()).await.expect("create");
    assert_eq!(fees.len(), 1);
    assert_eq!(fees.first().map(|f| f.id.as_str()), Some("fee-1"));
}

#[tokio::test]
async fn create_flat_fee_sends_string_amount_and_null_rate() {
    let tc = authenticated_console().await;

    Mock::given(method("POST"))
        .and(path(FEES_PATH))
        .and(body_json(json!({
            "type": "flat_fee",
            "rate": Value::Null,
            "amount": "5.00",
            "name": "Cash-out fee",
            "description": "Flat agent charge",
            "service_id": "",
            "status": "active",
            "channel": "all"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "fee-2"})))
        .expect(1)
        .mount(&tc.server)
        .await;

    Mock::given(method("GET"))
        .and(path(FEES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&tc.server)
        .await;

    let draft = FeeDraft {
        name: "Cash-out fee".to_string(),
        description: "Flat agent charge".to_string(),
        fee_type: FeeKind::Flat,
        amount: "5.00".to_string(),
        ..FeeDraft::default()
    };
    tc.client.fees().create(&draft).await.expect("create");
}

#[tokio::test]
async fn successful_create_resets_the_form() {
    let tc = authenticated_console().await;

    Mock::given(method("POST"))
        .and(path(FEES_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "fee-1"})))
        .expect(1)
        .mount(&tc.server)
        .await;

    Mock::given(method("GET"))
        .and(path(FEES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&tc.server)
        .await;

    let fees_api = tc.client.fees();
    let mut form = FeeForm {
        draft: rate_draft(),
        error: None,
    };

    form.submit(&fees_api).await.expect("submit");
    assert_eq!(form.draft, FeeDraft::default());
    assert!(form.error.is_none());
}

#[tokio::test]
async fn rejected_create_retains_the_form_and_skips_the_refresh() {
    let tc = authenticated_console().await;

    Mock::given(method("POST"))
        .and(path(FEES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "fee name already exists"
        })))
        .expect(1)
        .mount(&tc.server)
        .await;

    Mock::given(method("GET"))
        .and(path(FEES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&tc.server)
        .await;

    let fees_api = tc.client.fees();
    let mut form = FeeForm {
        draft: rate_draft(),
        error: None,
    };

    let err = form.submit(&fees_api).await.expect_err("rejected");
    assert_eq!(err.to_string(), "fee name already exists");
    // The typed input stays intact for retry.
    assert_eq!(form.draft, rate_draft());
    assert_eq!(form.error.as_deref(), Some("fee name already exists"));
}

#[tokio::test]
async fn invalid_draft_fails_before_any_request() {
    let tc = authenticated_console().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&tc.server)
        .await;

    let mut draft = rate_draft();
    draft.rate.clear();
    let err = tc.client.fees().create(&draft).await.expect_err("invalid");
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn concurrent_submissions_are_guarded() {
    let tc = authenticated_console().await;

    Mock::given(method("POST"))
        .and(path(FEES_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "fee-1"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&tc.server)
        .await;

    Mock::given(method("GET"))
        .and(path(FEES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&tc.server)
        .await;

    let fees_api = tc.client.fees();
    let draft = rate_draft();

    let (first, second) = tokio::join!(fees_api.create(&draft), async {
        // Give the first submission time to take the permit.
        tokio::time::sleep(Duration::from_millis(50)).await;
        fees_api.create(&draft).await
    });

    assert!(first.is_ok());
    assert!(matches!(second, Err(ApiError::SubmissionInFlight)));
}

#[tokio::test]
async fn logout_cancels_in_flight_requests() {
    let tc = authenticated_console().await;

    Mock::given(method("GET"))
        .and(path(FEES_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&tc.server)
        .await;

    let fees_api = tc.client.fees();
    let (list_result, ()) = tokio::join!(fees_api.list(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        tc.client.logout();
    });

    assert!(matches!(list_result, Err(ApiError::Cancelled)));
}
