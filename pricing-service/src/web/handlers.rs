// pricing-service/src/web/handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::pricing;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct PriceQuery {
  #[serde(rename = "vehicleId")]
  pub vehicle_id: i64,
}

// A missing or unparsable `vehicleId` never reaches this handler; actix
// rejects it with a 400 while deserializing the query string.
#[instrument(name = "handler::get_price", skip(query), fields(vehicle_id = %query.vehicle_id))]
pub async fn get_price_handler(query: web::Query<PriceQuery>) -> Result<HttpResponse, AppError> {
  let price = pricing::get_price(query.vehicle_id)?;
  info!(
    "Quoted {} {} for vehicle {}.",
    price.currency, price.price, price.vehicle_id
  );
  Ok(HttpResponse::Ok().json(price))
}
