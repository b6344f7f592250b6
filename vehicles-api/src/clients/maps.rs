// vehicles-api/src/clients/maps.rs

use crate::errors::{AppError, Result};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Address payload returned by the maps service for a lat/lon pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
  pub address: String,
  pub city: String,
  pub state: String,
  pub zip: String,
}

#[derive(Debug, Clone)]
pub struct MapsClient {
  http: reqwest::Client,
  base_url: String,
}

impl MapsClient {
  pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
    Self {
      http,
      base_url: base_url.into(),
    }
  }

  /// Resolves the address for the given coordinates.
  #[instrument(name = "maps_client::get_address", skip(self), err(Display))]
  pub async fn get_address(&self, lat: f64, lon: f64) -> Result<Address> {
    let url = format!("{}/maps", self.base_url);
    debug!(%url, "Requesting address from maps service.");

    let address = self
      .http
      .get(&url)
      .query(&[("lat", lat), ("lon", lon)])
      .send()
      .await
      .map_err(|e| AppError::Upstream(format!("maps service request failed: {}", e)))?
      .error_for_status()
      .map_err(|e| AppError::Upstream(format!("maps service returned an error status: {}", e)))?
      .json::<Address>()
      .await
      .map_err(|e| AppError::Upstream(format!("maps service returned an invalid payload: {}", e)))?;

    Ok(address)
  }
}
