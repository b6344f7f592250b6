// vehicles-api/src/db.rs

use crate::errors::Result;
use sqlx::PgPool;
use tracing::info;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS cars (
  id                BIGSERIAL PRIMARY KEY,
  condition         TEXT NOT NULL,
  body              TEXT NOT NULL,
  model             TEXT NOT NULL,
  manufacturer_code INTEGER NOT NULL,
  manufacturer_name TEXT NOT NULL,
  number_of_doors   INTEGER NOT NULL,
  fuel_type         TEXT NOT NULL,
  engine            TEXT NOT NULL,
  mileage           INTEGER NOT NULL,
  model_year        INTEGER NOT NULL,
  production_year   INTEGER NOT NULL,
  external_color    TEXT NOT NULL,
  lat               DOUBLE PRECISION NOT NULL,
  lon               DOUBLE PRECISION NOT NULL,
  created_at        TIMESTAMPTZ NOT NULL DEFAULT NOW(),
  modified_at       TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;

const SEED_SQL: &str = r#"
INSERT INTO cars (condition, body, model, manufacturer_code, manufacturer_name,
                  number_of_doors, fuel_type, engine, mileage, model_year,
                  production_year, external_color, lat, lon)
SELECT 'USED', 'sedan', 'Impala', 101, 'Chevrolet',
       4, 'Gasoline', '3.6L V6', 32280, 2018,
       2018, 'white', 40.73061, -73.935242
WHERE NOT EXISTS (SELECT 1 FROM cars);
"#;

/// Creates the `cars` table when missing and optionally seeds a first car.
pub async fn initialize(pool: &PgPool, seed: bool) -> Result<()> {
  sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
  info!("Database schema is in place.");

  if seed {
    sqlx::raw_sql(SEED_SQL).execute(pool).await?;
    info!("Database seeded with a starter vehicle.");
  }

  Ok(())
}
