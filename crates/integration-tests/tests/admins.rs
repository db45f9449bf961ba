//! Mutate-then-refresh behavior for the admins resource.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use ismartpay_client::ApiError;
use ismartpay_core::{AdminId, RoleId};
use ismartpay_integration_tests::{authenticated_console, console};

#[tokio::test]
async fn assign_role_mutates_then_refreshes() {
    let tc = authenticated_console().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/admins/adm-1/role"))
        .and(body_json(json!({"roleId": "r-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&tc.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"admins": [
            {"id": "adm-1", "email": "ada@x.test", "role": {"id": "r-2", "name": "Compliance"}}
        ]})))
        .expect(1)
        .mount(&tc.server)
        .await;

    let admins = tc
        .client
        .admins()
        .assign_role(&AdminId::new("adm-1"), &RoleId::new("r-2"))
        .await
        .expect("assign role");

    let role = admins
        .first()
        .and_then(|a| a.role.as_ref())
        .expect("role ref");
    assert_eq!(role.name, "Compliance");
}

#[tokio::test]
async fn delete_mutates_then_refreshes() {
    let tc = authenticated_console().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/admins/adm-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&tc.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&tc.server)
        .await;

    let admins = tc
        .client
        .admins()
        .remove(&AdminId::new("adm-1"))
        .await
        .expect("delete");
    assert!(admins.is_empty());
}

#[tokio::test]
async fn error_shaped_mutation_body_skips_the_refresh() {
    let tc = authenticated_console().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/admins/adm-1/role"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": true,
            "message": "role does not exist"
        })))
        .expect(1)
        .mount(&tc.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&tc.server)
        .await;

    let err = tc
        .client
        .admins()
        .assign_role(&AdminId::new("adm-1"), &RoleId::new("missing"))
        .await
        .expect_err("rejected");
    assert_eq!(err.to_string(), "role does not exist");
}

#[tokio::test]
async fn mutation_without_token_issues_no_request() {
    let tc = console().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&tc.server)
        .await;

    let err = tc
        .client
        .admins()
        .remove(&AdminId::new("adm-1"))
        .await
        .expect_err("no token");
    assert!(matches!(err, ApiError::NotAuthenticated));
}

#[tokio::test]
async fn non_2xx_mutation_without_message_uses_operation_fallback() {
    let tc = authenticated_console().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/admins/adm-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&tc.server)
        .await;

    let err = tc
        .client
        .admins()
        .remove(&AdminId::new("adm-1"))
        .await
        .expect_err("server error");
    assert!(matches!(
        &err,
        ApiError::Api { status: 500, message } if message == "delete admin failed"
    ));
}
