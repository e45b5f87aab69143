#![allow(dead_code)]

use actix_web::{test, web};
use serde_json::Value;
use taskapi::{db, AppState, Config};

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        // Lowest bcrypt cost keeps the suite fast.
        "BCRYPT_COST" => Some("4".to_string()),
        _ => None,
    })
    .expect("test configuration should be valid")
}

/// Fresh application state backed by its own in-memory database.
pub async fn test_state() -> web::Data<AppState> {
    let pool = db::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    web::Data::new(AppState::new(pool, &test_config()))
}

/// Registers `username` and returns the status and parsed JSON body.
pub async fn register(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
    >,
    username: &str,
    password: &str,
) -> (actix_web::http::StatusCode, Value) {
    let req = test::TestRequest::post()
        .uri("/register/")
        .set_json(serde_json::json!({ "username": username, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Logs in through the form endpoint and returns the status and parsed JSON body.
pub async fn login(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
    >,
    username: &str,
    password: &str,
) -> (actix_web::http::StatusCode, Value) {
    let req = test::TestRequest::post()
        .uri("/token/")
        .set_form([("username", username), ("password", password)])
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
