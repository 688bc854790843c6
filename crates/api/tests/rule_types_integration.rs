//! Integration tests for rule type endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, delete_request, get_request, json_request, parse_response_body,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_create_rule_type_success() {
    let app = create_test_app();

    let request = json_request(
        Method::POST,
        "/api/rule-types",
        json!({"name": "MaxConnections", "valueType": "INTEGER"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "MaxConnections");
    assert_eq!(body["valueType"], "INTEGER");
}

#[tokio::test]
async fn test_create_rule_type_rejects_unknown_value_type() {
    let app = create_test_app();

    let request = json_request(
        Method::POST,
        "/api/rule-types",
        json!({"name": "MaxConnections", "valueType": "FLOAT"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("INTEGER, BOOLEAN, STRING"));
}

#[tokio::test]
async fn test_create_rule_type_rejects_duplicate_name_case_insensitively() {
    let app = create_test_app();

    let request = json_request(
        Method::POST,
        "/api/rule-types",
        json!({"name": "MaxConnections", "valueType": "INTEGER"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = json_request(
        Method::POST,
        "/api/rule-types",
        json!({"name": "maxconnections", "valueType": "STRING"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "conflict");
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_create_rule_type_validates_name() {
    let app = create_test_app();

    // Too short.
    let request = json_request(
        Method::POST,
        "/api/rule-types",
        json!({"name": "ab", "valueType": "INTEGER"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "name");

    // No letters.
    let request = json_request(
        Method::POST,
        "/api/rule-types",
        json!({"name": "12345", "valueType": "INTEGER"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rule_type_rejects_malformed_json() {
    let app = create_test_app();

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/rule-types")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "malformed_request");
}

#[tokio::test]
async fn test_list_rule_types_empty_catalog_is_error() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(get_request("/api/rule-types"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "no_results");
    assert_eq!(body["message"], "No rule types created yet");
}

#[tokio::test]
async fn test_list_rule_types_returns_all() {
    let app = create_test_app();

    for (name, value_type) in [("MaxConnections", "INTEGER"), ("FeatureEnabled", "BOOLEAN")] {
        let request = json_request(
            Method::POST,
            "/api/rule-types",
            json!({"name": name, "valueType": value_type}),
        );
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .router
        .clone()
        .oneshot(get_request("/api/rule-types"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "MaxConnections");
    assert_eq!(body[1]["name"], "FeatureEnabled");
}

#[tokio::test]
async fn test_get_rule_type_by_id() {
    let app = create_test_app();

    let request = json_request(
        Method::POST,
        "/api/rule-types",
        json!({"name": "MaxConnections", "valueType": "INTEGER"}),
    );
    app.router.clone().oneshot(request).await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(get_request("/api/rule-types/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["id"], 1);

    let response = app
        .router
        .clone()
        .oneshot(get_request("/api/rule-types/99"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "RuleType not found with id: 99");
}

#[tokio::test]
async fn test_update_rule_type() {
    let app = create_test_app();

    for (name, value_type) in [("RuleA", "INTEGER"), ("RuleB", "STRING")] {
        let request = json_request(
            Method::POST,
            "/api/rule-types",
            json!({"name": name, "valueType": value_type}),
        );
        app.router.clone().oneshot(request).await.unwrap();
    }

    // Rename and retype rule 1.
    let request = json_request(
        Method::PUT,
        "/api/rule-types/1",
        json!({"name": "RuleARenamed", "valueType": "BOOLEAN"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "RuleARenamed");
    assert_eq!(body["valueType"], "BOOLEAN");

    // Renaming rule 1 onto rule 2's name collides.
    let request = json_request(
        Method::PUT,
        "/api/rule-types/1",
        json!({"name": "ruleb", "valueType": "BOOLEAN"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Updating a missing rule is not found.
    let request = json_request(
        Method::PUT,
        "/api/rule-types/99",
        json!({"name": "RuleX", "valueType": "STRING"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_rule_type() {
    let app = create_test_app();

    let request = json_request(
        Method::POST,
        "/api/rule-types",
        json!({"name": "MaxConnections", "valueType": "INTEGER"}),
    );
    app.router.clone().oneshot(request).await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(delete_request("/api/rule-types/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["name"], "MaxConnections");

    let response = app
        .router
        .clone()
        .oneshot(delete_request("/api/rule-types/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
