mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};

use common::{principal, send, test_app, MockAuth};

fn authed_json(method: &str, path: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::AUTHORIZATION, "Bearer test-token");

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

// These run against a lazily-connected pool: a request that reached the
// database would fail with a connection error, so a 400 also proves the
// validation fired before any store access.

#[tokio::test]
async fn blank_portfolio_name_is_rejected() -> Result<()> {
    let app = test_app(MockAuth::allowing(principal()));

    let body = json!({ "name": "   ", "description": "whitespace only" });
    let (status, response) = send(app, authed_json("POST", "/api/portfolios", Some(&body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Portfolio name is required");
    Ok(())
}

#[tokio::test]
async fn missing_body_counts_as_blank_name() -> Result<()> {
    let app = test_app(MockAuth::allowing(principal()));

    let (status, response) = send(app, authed_json("POST", "/api/portfolios", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Portfolio name is required");
    Ok(())
}

#[tokio::test]
async fn non_uuid_portfolio_id_is_rejected() -> Result<()> {
    let app = test_app(MockAuth::allowing(principal()));

    let (status, response) =
        send(app, authed_json("DELETE", "/api/portfolios/not-a-uuid", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid portfolio id");
    Ok(())
}

#[tokio::test]
async fn zero_quantity_is_rejected_before_any_write() -> Result<()> {
    let app = test_app(MockAuth::allowing(principal()));

    let body = json!({ "symbol": "TCS", "quantity": 0, "purchase_price": 100 });
    let (status, response) = send(
        app,
        authed_json(
            "POST",
            "/api/holdings/6b1f61e2-6bb5-4f0e-8f3a-111111111111",
            Some(&body),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "quantity must be a positive number");
    Ok(())
}

#[tokio::test]
async fn negative_quantity_is_rejected() -> Result<()> {
    let app = test_app(MockAuth::allowing(principal()));

    let body = json!({ "symbol": "TCS", "quantity": -5, "purchase_price": 100 });
    let (status, _) = send(
        app,
        authed_json(
            "POST",
            "/api/holdings/6b1f61e2-6bb5-4f0e-8f3a-111111111111",
            Some(&body),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn non_numeric_price_is_rejected() -> Result<()> {
    let app = test_app(MockAuth::allowing(principal()));

    let body = json!({ "symbol": "TCS", "quantity": 10, "purchase_price": "abc" });
    let (status, response) = send(
        app,
        authed_json(
            "POST",
            "/api/holdings/6b1f61e2-6bb5-4f0e-8f3a-111111111111",
            Some(&body),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "purchase_price must be a valid number");
    Ok(())
}

#[tokio::test]
async fn missing_symbol_is_rejected() -> Result<()> {
    let app = test_app(MockAuth::allowing(principal()));

    let body = json!({ "quantity": 10, "purchase_price": 99.5 });
    let (status, response) = send(
        app,
        authed_json(
            "POST",
            "/api/holdings/6b1f61e2-6bb5-4f0e-8f3a-111111111111",
            Some(&body),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Symbol is required");
    Ok(())
}

#[tokio::test]
async fn non_uuid_holding_id_is_rejected() -> Result<()> {
    let app = test_app(MockAuth::allowing(principal()));

    let (status, response) = send(app, authed_json("DELETE", "/api/holdings/42", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid holding id");
    Ok(())
}
