// commerce/src/web/handlers/item_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::item_service;
use crate::state::AppState;
use crate::web::auth::AuthenticatedUser;

#[instrument(name = "handler::list_items", skip(app_state, _auth_user))]
pub async fn list_items_handler(
  app_state: web::Data<AppState>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let items = item_service::list(&app_state.db_pool).await?;
  info!("Listing {} items.", items.len());
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::get_item", skip(app_state, path, _auth_user), fields(item_id = %path.as_ref()))]
pub async fn get_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let item_id = path.into_inner();
  let item = item_service::find_by_id(&app_state.db_pool, item_id).await?;
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::get_items_by_name", skip(app_state, path, _auth_user), fields(item_name = %path.as_ref()))]
pub async fn get_items_by_name_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let name = path.into_inner();
  let items = item_service::find_by_name(&app_state.db_pool, &name).await?;
  Ok(HttpResponse::Ok().json(items))
}
