// pricing-service/src/pricing.rs

//! Price quoting for vehicles. Quotes are pseudo-random per request and are
//! not stored anywhere; two requests for the same vehicle may disagree.

use crate::errors::{AppError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The quote payload returned to clients (and consumed by the vehicles API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
  pub currency: String,
  pub price: String,
  #[serde(rename = "vehicleId")]
  pub vehicle_id: i64,
}

/// Quotes a price for the given vehicle. Vehicle IDs start at 1; zero and
/// negative IDs are rejected with a validation error.
#[instrument(name = "pricing::get_price", err(Display))]
pub fn get_price(vehicle_id: i64) -> Result<Price> {
  if vehicle_id < 1 {
    warn!("Rejecting price request for invalid vehicle id {}.", vehicle_id);
    return Err(AppError::Validation(format!(
      "Cannot get price for vehicle {}.",
      vehicle_id
    )));
  }

  let price = random_price();
  debug!(%price, "Quoted price for vehicle {}.", vehicle_id);
  Ok(Price {
    currency: "USD".to_string(),
    price,
    vehicle_id,
  })
}

/// A whole-dollar base drawn from 1..=20 times 5000, plus random cents.
fn random_price() -> String {
  let mut rng = rand::thread_rng();
  let dollars = i64::from(rng.gen_range(1..=20u32)) * 5000;
  let cents = rng.gen_range(0..100u32);
  format!("{}.{:02}", dollars, cents)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quotes_a_price_for_a_valid_vehicle() {
    let price = get_price(1).expect("vehicle 1 should be quotable");
    assert_eq!(price.currency, "USD");
    assert_eq!(price.vehicle_id, 1);
    assert!(!price.price.is_empty());
  }

  #[test]
  fn price_string_always_has_two_fraction_digits() {
    for _ in 0..100 {
      let quoted = random_price();
      let (dollars, cents) = quoted.split_once('.').expect("price must contain a decimal point");
      assert!(dollars.parse::<i64>().is_ok(), "dollar part must be numeric: {}", quoted);
      assert_eq!(cents.len(), 2, "cents must be two digits: {}", quoted);
      assert!(cents.parse::<u32>().is_ok(), "cents must be numeric: {}", quoted);
    }
  }

  #[test]
  fn quoted_dollars_stay_in_the_expected_band() {
    for _ in 0..100 {
      let quoted = random_price();
      let dollars: i64 = quoted.split_once('.').unwrap().0.parse().unwrap();
      assert!((5000..=100_000).contains(&dollars), "unexpected quote {}", quoted);
      assert_eq!(dollars % 5000, 0, "quote base must be a multiple of 5000: {}", quoted);
    }
  }

  #[test]
  fn zero_vehicle_id_is_rejected() {
    let err = get_price(0).expect_err("vehicle 0 must not be quotable");
    assert!(matches!(err, AppError::Validation(_)));
  }

  #[test]
  fn negative_vehicle_id_is_rejected() {
    assert!(get_price(-3).is_err());
  }
}
