// vehicles-api/src/clients/prices.rs

use crate::errors::{AppError, Result};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Quote payload returned by the pricing service.
#[derive(Debug, Clone, Deserialize)]
pub struct Price {
  pub currency: String,
  pub price: String,
  #[serde(rename = "vehicleId")]
  pub vehicle_id: i64,
}

#[derive(Debug, Clone)]
pub struct PricingClient {
  http: reqwest::Client,
  base_url: String,
}

impl PricingClient {
  pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }

  /// Fetches the current quote for a vehicle.
  #[instrument(name = "pricing_client::get_price", skip(self), err(Display))]
  pub async fn get_price(&self, vehicle_id: i64) -> Result<Price> {
    let url = format!("{}/services/price", self.base_url);
    debug!(%url, "Requesting quote from pricing service.");

    let price = self
      .http
      .get(&url)
      .query(&[("vehicleId", vehicle_id)])
      .send()
      .await
      .map_err(|e| AppError::Upstream(format!("pricing service request failed: {}", e)))?
      .error_for_status()
      .map_err(|e| AppError::Upstream(format!("pricing service returned an error status: {}", e)))?
      .json::<Price>()
      .await
      .map_err(|e| AppError::Upstream(format!("pricing service returned an invalid payload: {}", e)))?;

    Ok(price)
  }
}
