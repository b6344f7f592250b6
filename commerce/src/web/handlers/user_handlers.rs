// commerce/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::{auth_service, user_service};
use crate::state::AppState;
use crate::web::auth::AuthenticatedUser;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequestPayload {
  pub username: String,
  pub password: String,
  pub confirm_password: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub username: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(
  name = "handler::create_user",
  skip(app_state, req_payload),
  fields(req_username = %req_payload.username)
)]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateUserRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Registration attempt for username: {}", req_payload.username);

  let user = user_service::create_user(
    &app_state.db_pool,
    &req_payload.username,
    &req_payload.password,
    &req_payload.confirm_password,
  )
  .await?;

  Ok(HttpResponse::Created().json(user))
}

#[instrument(
  name = "handler::login",
  skip(app_state, req_payload),
  fields(req_username = %req_payload.username)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Login attempt for username: {}", req_payload.username);

  // Unknown users and wrong passwords get the same response; do not leak
  // which usernames exist.
  let user = match user_service::find_by_username(&app_state.db_pool, &req_payload.username).await {
    Ok(user) => user,
    Err(AppError::NotFound(_)) => {
      warn!("Login attempt for unknown username: {}", req_payload.username);
      return Err(AppError::Auth("Invalid username or password.".to_string()));
    }
    Err(e) => return Err(e),
  };

  if !auth_service::verify_password(&user.password_hash, &req_payload.password)? {
    warn!("Failed login for username: {}", req_payload.username);
    return Err(AppError::Auth("Invalid username or password.".to_string()));
  }

  let token = auth_service::issue_token(
    &user.username,
    &app_state.config.jwt_secret,
    app_state.config.jwt_expiry_seconds,
  )?;

  info!("Login successful for username: {}", user.username);

  // The token travels both as the stamped header and in the body.
  Ok(
    HttpResponse::Ok()
      .insert_header(("Authorization", format!("Bearer {}", token)))
      .json(json!({
          "username": user.username,
          "token": token,
      })),
  )
}

#[instrument(name = "handler::get_user_by_username", skip(app_state, path, _auth_user), fields(req_username = %path.as_ref()))]
pub async fn get_user_by_username_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let username = path.into_inner();
  let user = user_service::find_by_username(&app_state.db_pool, &username).await?;
  Ok(HttpResponse::Ok().json(user))
}

#[instrument(name = "handler::get_user_by_id", skip(app_state, path, _auth_user), fields(req_user_id = %path.as_ref()))]
pub async fn get_user_by_id_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let user = user_service::find_by_id(&app_state.db_pool, user_id).await?;
  Ok(HttpResponse::Ok().json(user))
}
