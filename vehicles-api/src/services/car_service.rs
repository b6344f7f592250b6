// vehicles-api/src/services/car_service.rs

//! Create, read, update and delete vehicles, gathering related location and
//! price data from the downstream services on single-car reads.

use crate::clients::{Address, MapsClient, Price, PricingClient};
use crate::errors::{AppError, Result};
use crate::models::{Car, CarInput, Condition, Details, Location, Manufacturer};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{info, instrument, warn};

const CAR_COLUMNS: &str = "id, condition, body, model, manufacturer_code, manufacturer_name, \
                           number_of_doors, fuel_type, engine, mileage, model_year, production_year, \
                           external_color, lat, lon, created_at, modified_at";

/// Flat row shape of the `cars` table; nested `Details`/`Location` are
/// rebuilt when converting to the domain `Car`.
#[derive(Debug, FromRow)]
struct CarRow {
  id: i64,
  condition: String,
  body: String,
  model: String,
  manufacturer_code: i32,
  manufacturer_name: String,
  number_of_doors: i32,
  fuel_type: String,
  engine: String,
  mileage: i32,
  model_year: i32,
  production_year: i32,
  external_color: String,
  lat: f64,
  lon: f64,
  created_at: DateTime<Utc>,
  modified_at: DateTime<Utc>,
}

impl TryFrom<CarRow> for Car {
  type Error = AppError;

  fn try_from(row: CarRow) -> Result<Self> {
    let condition: Condition = row
      .condition
      .parse()
      .map_err(|e: String| AppError::Internal(format!("corrupt car row {}: {}", row.id, e)))?;

    Ok(Car {
      id: row.id,
      condition,
      details: Details {
        body: row.body,
        model: row.model,
        manufacturer: Manufacturer {
          code: row.manufacturer_code,
          name: row.manufacturer_name,
        },
        number_of_doors: row.number_of_doors,
        fuel_type: row.fuel_type,
        engine: row.engine,
        mileage: row.mileage,
        model_year: row.model_year,
        production_year: row.production_year,
        external_color: row.external_color,
      },
      location: Location {
        lat: row.lat,
        lon: row.lon,
        address: None,
        city: None,
        state: None,
        zip: None,
      },
      price: None,
      created_at: row.created_at,
      modified_at: row.modified_at,
    })
  }
}

/// Copies the downstream responses into the car: address fields onto the
/// location, the quote string onto `price`.
fn apply_enrichment(car: &mut Car, price: &Price, address: &Address) {
  car.location.address = Some(address.address.clone());
  car.location.city = Some(address.city.clone());
  car.location.state = Some(address.state.clone());
  car.location.zip = Some(address.zip.clone());
  car.price = Some(price.price.clone());
}

#[derive(Debug, Clone)]
pub struct CarService {
  db_pool: PgPool,
  maps: MapsClient,
  pricing: PricingClient,
}

impl CarService {
  pub fn new(db_pool: PgPool, maps: MapsClient, pricing: PricingClient) -> Self {
    Self { db_pool, maps, pricing }
  }

  /// Gathers a list of all vehicles. List reads skip the downstream
  /// fan-out; enrichment happens on single-car reads only.
  #[instrument(name = "car_service::list", skip(self), err(Display))]
  pub async fn list(&self) -> Result<Vec<Car>> {
    let rows: Vec<CarRow> = sqlx::query_as(&format!("SELECT {} FROM cars ORDER BY id ASC", CAR_COLUMNS))
      .fetch_all(&self.db_pool)
      .await?;

    rows.into_iter().map(Car::try_from).collect()
  }

  /// Gets car information by ID, including location and price data fetched
  /// concurrently from the maps and pricing services.
  #[instrument(name = "car_service::find_by_id", skip(self), err(Display))]
  pub async fn find_by_id(&self, id: i64) -> Result<Car> {
    let mut car = self.fetch_car(id).await?;

    // Both downstream calls run concurrently; either failure fails the read.
    let (price, address) = tokio::try_join!(
      self.pricing.get_price(id),
      self.maps.get_address(car.location.lat, car.location.lon)
    )?;

    apply_enrichment(&mut car, &price, &address);
    info!("Car {} enriched with price {} and resolved address.", id, price.price);
    Ok(car)
  }

  /// Stores a new vehicle and returns it with its assigned ID.
  #[instrument(name = "car_service::create", skip(self, input), err(Display))]
  pub async fn create(&self, input: CarInput) -> Result<Car> {
    let row: CarRow = sqlx::query_as(&format!(
      "INSERT INTO cars (condition, body, model, manufacturer_code, manufacturer_name, \
       number_of_doors, fuel_type, engine, mileage, model_year, production_year, \
       external_color, lat, lon) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
       RETURNING {}",
      CAR_COLUMNS
    ))
    .bind(input.condition.as_str())
    .bind(&input.details.body)
    .bind(&input.details.model)
    .bind(input.details.manufacturer.code)
    .bind(&input.details.manufacturer.name)
    .bind(input.details.number_of_doors)
    .bind(&input.details.fuel_type)
    .bind(&input.details.engine)
    .bind(input.details.mileage)
    .bind(input.details.model_year)
    .bind(input.details.production_year)
    .bind(&input.details.external_color)
    .bind(input.location.lat)
    .bind(input.location.lon)
    .fetch_one(&self.db_pool)
    .await?;

    info!("Car {} created.", row.id);
    Car::try_from(row)
  }

  /// Replaces the condition, details and location of an existing vehicle.
  #[instrument(name = "car_service::update", skip(self, input), err(Display))]
  pub async fn update(&self, id: i64, input: CarInput) -> Result<Car> {
    let row: Option<CarRow> = sqlx::query_as(&format!(
      "UPDATE cars SET condition = $1, body = $2, model = $3, manufacturer_code = $4, \
       manufacturer_name = $5, number_of_doors = $6, fuel_type = $7, engine = $8, \
       mileage = $9, model_year = $10, production_year = $11, external_color = $12, \
       lat = $13, lon = $14, modified_at = NOW() \
       WHERE id = $15 \
       RETURNING {}",
      CAR_COLUMNS
    ))
    .bind(input.condition.as_str())
    .bind(&input.details.body)
    .bind(&input.details.model)
    .bind(input.details.manufacturer.code)
    .bind(&input.details.manufacturer.name)
    .bind(input.details.number_of_doors)
    .bind(&input.details.fuel_type)
    .bind(&input.details.engine)
    .bind(input.details.mileage)
    .bind(input.details.model_year)
    .bind(input.details.production_year)
    .bind(&input.details.external_color)
    .bind(input.location.lat)
    .bind(input.location.lon)
    .bind(id)
    .fetch_optional(&self.db_pool)
    .await?;

    match row {
      Some(row) => {
        info!("Car {} updated.", id);
        Car::try_from(row)
      }
      None => {
        warn!("Update requested for unknown car {}.", id);
        Err(AppError::NotFound(format!("Car with id {} is missing.", id)))
      }
    }
  }

  /// Deletes a vehicle by ID, or reports not-found for unknown IDs.
  #[instrument(name = "car_service::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM cars WHERE id = $1")
      .bind(id)
      .execute(&self.db_pool)
      .await?;

    if result.rows_affected() == 0 {
      warn!("Delete requested for unknown car {}.", id);
      return Err(AppError::NotFound(format!("Car with id {} is missing.", id)));
    }

    info!("Car {} deleted.", id);
    Ok(())
  }

  async fn fetch_car(&self, id: i64) -> Result<Car> {
    let row: Option<CarRow> = sqlx::query_as(&format!("SELECT {} FROM cars WHERE id = $1", CAR_COLUMNS))
      .bind(id)
      .fetch_optional(&self.db_pool)
      .await?;

    match row {
      Some(row) => Car::try_from(row),
      None => Err(AppError::NotFound(format!("Car with id {} is missing.", id))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_row() -> CarRow {
    CarRow {
      id: 7,
      condition: "USED".to_string(),
      body: "sedan".to_string(),
      model: "Impala".to_string(),
      manufacturer_code: 101,
      manufacturer_name: "Chevrolet".to_string(),
      number_of_doors: 4,
      fuel_type: "Gasoline".to_string(),
      engine: "3.6L V6".to_string(),
      mileage: 32280,
      model_year: 2018,
      production_year: 2018,
      external_color: "white".to_string(),
      lat: 40.73061,
      lon: -73.935242,
      created_at: Utc::now(),
      modified_at: Utc::now(),
    }
  }

  #[test]
  fn car_row_maps_into_the_nested_domain_shape() {
    let car = Car::try_from(sample_row()).unwrap();
    assert_eq!(car.id, 7);
    assert_eq!(car.condition, Condition::Used);
    assert_eq!(car.details.manufacturer.name, "Chevrolet");
    assert_eq!(car.location.lat, 40.73061);
    assert!(car.location.address.is_none(), "address is enrichment-only");
    assert!(car.price.is_none(), "price is enrichment-only");
  }

  #[test]
  fn corrupt_condition_column_is_an_internal_error() {
    let mut row = sample_row();
    row.condition = "SCRAPPED".to_string();
    assert!(matches!(Car::try_from(row), Err(AppError::Internal(_))));
  }

  #[test]
  fn enrichment_copies_quote_and_address_onto_the_car() {
    let mut car = Car::try_from(sample_row()).unwrap();
    let price = Price {
      currency: "USD".to_string(),
      price: "15000.74".to_string(),
      vehicle_id: 7,
    };
    let address = Address {
      address: "1 Main St".to_string(),
      city: "New York".to_string(),
      state: "NY".to_string(),
      zip: "10044".to_string(),
    };

    apply_enrichment(&mut car, &price, &address);

    assert_eq!(car.price.as_deref(), Some("15000.74"));
    assert_eq!(car.location.address.as_deref(), Some("1 Main St"));
    assert_eq!(car.location.city.as_deref(), Some("New York"));
    assert_eq!(car.location.state.as_deref(), Some("NY"));
    assert_eq!(car.location.zip.as_deref(), Some("10044"));
  }
}
