// commerce/src/web/auth.rs

//! Bearer-token authentication for protected routes, expressed as an actix
//! extractor: handlers that take an `AuthenticatedUser` reject requests
//! without a valid token before any business logic runs.

use actix_web::{http::header, web, FromRequest, HttpRequest};

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

#[derive(Debug)]
pub struct AuthenticatedUser {
  pub username: String,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    futures_util::future::ready(authenticate(req))
  }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
  let app_state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;

  let header_value = req
    .headers()
    .get(header::AUTHORIZATION)
    .and_then(|value| value.to_str().ok())
    .ok_or_else(|| AppError::Auth("Missing bearer token.".to_string()))?;

  let token = header_value
    .strip_prefix("Bearer ")
    .ok_or_else(|| AppError::Auth("Authorization header must carry a bearer token.".to_string()))?;

  let claims = auth_service::decode_token(token, &app_state.config.jwt_secret)?;
  Ok(AuthenticatedUser { username: claims.sub })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::AppConfig;
  use actix_web::test::TestRequest;
  use sqlx::postgres::PgPoolOptions;
  use std::sync::Arc;

  const SECRET: &str = "extractor-test-secret";

  fn test_state() -> web::Data<AppState> {
    let config = AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 0,
      database_url: "postgres://localhost/unused".to_string(),
      jwt_secret: SECRET.to_string(),
      jwt_expiry_seconds: 3600,
      seed_db: false,
    };
    // Lazy pool: never connects, the extractor does not touch the database.
    let db_pool = PgPoolOptions::new()
      .connect_lazy("postgres://localhost/unused")
      .unwrap();
    web::Data::new(AppState {
      db_pool,
      config: Arc::new(config),
    })
  }

  #[actix_web::test]
  async fn valid_bearer_token_authenticates_its_subject() {
    let token = auth_service::issue_token("testuser", SECRET, 3600).unwrap();
    let req = TestRequest::default()
      .app_data(test_state())
      .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
      .to_http_request();

    let user = authenticate(&req).expect("token should authenticate");
    assert_eq!(user.username, "testuser");
  }

  #[actix_web::test]
  async fn missing_header_is_rejected() {
    let req = TestRequest::default().app_data(test_state()).to_http_request();
    assert!(matches!(authenticate(&req), Err(AppError::Auth(_))));
  }

  #[actix_web::test]
  async fn non_bearer_scheme_is_rejected() {
    let req = TestRequest::default()
      .app_data(test_state())
      .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
      .to_http_request();
    assert!(matches!(authenticate(&req), Err(AppError::Auth(_))));
  }

  #[actix_web::test]
  async fn token_signed_with_another_secret_is_rejected() {
    let token = auth_service::issue_token("testuser", "another-secret", 3600).unwrap();
    let req = TestRequest::default()
      .app_data(test_state())
      .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
      .to_http_request();
    assert!(matches!(authenticate(&req), Err(AppError::Auth(_))));
  }
}
