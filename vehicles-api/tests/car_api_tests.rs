// tests/car_api_tests.rs

use actix_web::http::StatusCode;
use actix_web::{test, App, ResponseError};
use vehicles_api::clients::{MapsClient, PricingClient};
use vehicles_api::errors::AppError;
use vehicles_api::web;

// Nothing listens here; connections are refused immediately.
const DEAD_SERVICE_URL: &str = "http://127.0.0.1:9";

#[actix_web::test]
async fn health_endpoint_reports_ok() {
  let app = test::init_service(App::new().configure(web::configure_app_routes)).await;

  let req = test::TestRequest::get().uri("/health").to_request();
  let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

  assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn unreachable_pricing_service_reports_upstream_failure() {
  let client = PricingClient::new(reqwest::Client::new(), DEAD_SERVICE_URL);

  let err = client.get_price(1).await.unwrap_err();

  match err {
    AppError::Upstream(m) => assert!(m.contains("pricing service")),
    other => panic!("expected an upstream error, got {:?}", other),
  }
}

#[actix_web::test]
async fn unreachable_maps_service_reports_upstream_failure() {
  let client = MapsClient::new(reqwest::Client::new(), DEAD_SERVICE_URL);

  let err = client.get_address(40.73061, -73.935242).await.unwrap_err();

  match err {
    AppError::Upstream(m) => assert!(m.contains("maps service")),
    other => panic!("expected an upstream error, got {:?}", other),
  }
}

#[actix_web::test]
async fn upstream_failure_renders_bad_gateway() {
  let resp = AppError::Upstream("pricing service request failed".to_string()).error_response();

  assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn missing_car_renders_not_found() {
  let resp = AppError::NotFound("Car with id 42 not found.".to_string()).error_response();

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
