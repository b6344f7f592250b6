// tests/auth_gate_tests.rs

//! Verifies the bearer-token gate on the protected /api routes. None of
//! these requests get past the extractor, so no live database is needed;
//! the pool is constructed lazily and never connects.

use actix_web::http::StatusCode;
use actix_web::{test, web as actix_data, App};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use commerce::config::AppConfig;
use commerce::services::auth_service;
use commerce::state::AppState;
use commerce::web;

const SECRET: &str = "auth-gate-test-secret";

fn test_state() -> actix_data::Data<AppState> {
  let config = AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "postgres://localhost/unused".to_string(),
    jwt_secret: SECRET.to_string(),
    jwt_expiry_seconds: 3600,
    seed_db: false,
  };
  let db_pool = PgPoolOptions::new()
    .connect_lazy("postgres://localhost/unused")
    .unwrap();
  actix_data::Data::new(AppState {
    db_pool,
    config: Arc::new(config),
  })
}

#[actix_web::test]
async fn health_is_open() {
  let app = test::init_service(
    App::new()
      .app_data(test_state())
      .configure(web::configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/health").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn item_listing_requires_a_token() {
  let app = test::init_service(
    App::new()
      .app_data(test_state())
      .configure(web::configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/api/item").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn user_lookup_requires_a_token() {
  let app = test::init_service(
    App::new()
      .app_data(test_state())
      .configure(web::configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/api/user/testuser").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn order_history_rejects_an_expired_token() {
  let app = test::init_service(
    App::new()
      .app_data(test_state())
      .configure(web::configure_app_routes),
  )
  .await;

  let expired = auth_service::issue_token("testuser", SECRET, -7200).unwrap();
  let req = test::TestRequest::get()
    .uri("/api/order/history/testuser")
    .insert_header(("Authorization", format!("Bearer {}", expired)))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
