// vehicles-api/src/web/handlers/car_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::CarInput;
use crate::state::AppState;

#[instrument(name = "handler::list_cars", skip(app_state))]
pub async fn list_cars_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let cars = app_state.car_service.list().await?;
  info!("Listing {} cars.", cars.len());
  Ok(HttpResponse::Ok().json(cars))
}

#[instrument(name = "handler::get_car", skip(app_state, path), fields(car_id = %path.as_ref()))]
pub async fn get_car_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let car_id = path.into_inner();
  let car = app_state.car_service.find_by_id(car_id).await?;
  Ok(HttpResponse::Ok().json(car))
}

#[instrument(name = "handler::create_car", skip(app_state, req_payload))]
pub async fn create_car_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CarInput>,
) -> Result<HttpResponse, AppError> {
  let car = app_state.car_service.create(req_payload.into_inner()).await?;
  info!("Created car {}.", car.id);
  Ok(HttpResponse::Created().json(car))
}

#[instrument(name = "handler::update_car", skip(app_state, path, req_payload), fields(car_id = %path.as_ref()))]
pub async fn update_car_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<CarInput>,
) -> Result<HttpResponse, AppError> {
  let car_id = path.into_inner();
  let car = app_state.car_service.update(car_id, req_payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(car))
}

#[instrument(name = "handler::delete_car", skip(app_state, path), fields(car_id = %path.as_ref()))]
pub async fn delete_car_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let car_id = path.into_inner();
  app_state.car_service.delete(car_id).await?;
  Ok(HttpResponse::NoContent().finish())
}
