// vehicles-api/src/models/car.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the vehicle is new or used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
  Used,
  New,
}

impl Condition {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Used => "USED",
      Self::New => "NEW",
    }
  }
}

impl std::str::FromStr for Condition {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "USED" => Ok(Self::Used),
      "NEW" => Ok(Self::New),
      other => Err(format!("unknown vehicle condition '{}'", other)),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
  pub code: i32,
  pub name: String,
}

/// Static vehicle details supplied by the client on create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
  pub body: String,
  pub model: String,
  pub manufacturer: Manufacturer,
  pub number_of_doors: i32,
  pub fuel_type: String,
  pub engine: String,
  pub mileage: i32,
  pub model_year: i32,
  pub production_year: i32,
  pub external_color: String,
}

/// Vehicle position. Only `lat`/`lon` are persisted; the address fields are
/// filled in at read time from the maps service and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
  pub lat: f64,
  pub lon: f64,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub address: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub city: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub state: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub zip: Option<String>,
}

/// A stored vehicle, optionally enriched with a price quote and a resolved
/// address on single-car reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
  pub id: i64,
  pub condition: Condition,
  pub details: Details,
  pub location: Location,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price: Option<String>,
  pub created_at: DateTime<Utc>,
  pub modified_at: DateTime<Utc>,
}

/// Client payload for creating or updating a vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct CarInput {
  pub condition: Condition,
  pub details: Details,
  pub location: Location,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn condition_round_trips_through_their_wire_names() {
    assert_eq!("USED".parse::<Condition>().unwrap(), Condition::Used);
    assert_eq!("NEW".parse::<Condition>().unwrap(), Condition::New);
    assert_eq!(Condition::New.as_str(), "NEW");
    assert!("Mint".parse::<Condition>().is_err());
  }

  #[test]
  fn details_serialize_with_camel_case_field_names() {
    let details = Details {
      body: "sedan".to_string(),
      model: "Impala".to_string(),
      manufacturer: Manufacturer {
        code: 101,
        name: "Chevrolet".to_string(),
      },
      number_of_doors: 4,
      fuel_type: "Gasoline".to_string(),
      engine: "3.6L V6".to_string(),
      mileage: 32280,
      model_year: 2018,
      production_year: 2018,
      external_color: "white".to_string(),
    };

    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(json["numberOfDoors"], 4);
    assert_eq!(json["fuelType"], "Gasoline");
    assert_eq!(json["externalColor"], "white");
    assert_eq!(json["manufacturer"]["code"], 101);
  }

  #[test]
  fn unresolved_address_fields_are_omitted_from_json() {
    let location = Location {
      lat: 40.73061,
      lon: -73.935242,
      address: None,
      city: None,
      state: None,
      zip: None,
    };

    let json = serde_json::to_value(&location).unwrap();
    assert!(json.get("address").is_none());
    assert!(json.get("zip").is_none());
    assert_eq!(json["lat"], 40.73061);
  }

  #[test]
  fn car_input_deserializes_from_client_json() {
    let payload = serde_json::json!({
      "condition": "USED",
      "details": {
        "body": "sedan",
        "model": "Impala",
        "manufacturer": { "code": 101, "name": "Chevrolet" },
        "numberOfDoors": 4,
        "fuelType": "Gasoline",
        "engine": "3.6L V6",
        "mileage": 32280,
        "modelYear": 2018,
        "productionYear": 2018,
        "externalColor": "white"
      },
      "location": { "lat": 40.73061, "lon": -73.935242 }
    });

    let input: CarInput = serde_json::from_value(payload).unwrap();
    assert_eq!(input.condition, Condition::Used);
    assert_eq!(input.details.number_of_doors, 4);
    assert!(input.location.address.is_none());
  }
}
