// commerce/src/db.rs

use crate::errors::Result;
use sqlx::PgPool;
use tracing::info;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  id            BIGSERIAL PRIMARY KEY,
  username      TEXT NOT NULL UNIQUE,
  password_hash TEXT NOT NULL,
  created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS items (
  id          BIGSERIAL PRIMARY KEY,
  name        TEXT NOT NULL,
  description TEXT,
  price_cents BIGINT NOT NULL
);

CREATE TABLE IF NOT EXISTS carts (
  id          BIGSERIAL PRIMARY KEY,
  user_id     BIGINT NOT NULL UNIQUE REFERENCES users (id) ON DELETE CASCADE,
  total_cents BIGINT NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS cart_items (
  id       BIGSERIAL PRIMARY KEY,
  cart_id  BIGINT NOT NULL REFERENCES carts (id) ON DELETE CASCADE,
  item_id  BIGINT NOT NULL REFERENCES items (id),
  quantity INTEGER NOT NULL,
  UNIQUE (cart_id, item_id)
);

CREATE TABLE IF NOT EXISTS orders (
  id          BIGSERIAL PRIMARY KEY,
  user_id     BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
  total_cents BIGINT NOT NULL,
  created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS order_items (
  id               BIGSERIAL PRIMARY KEY,
  order_id         BIGINT NOT NULL REFERENCES orders (id) ON DELETE CASCADE,
  item_id          BIGINT NOT NULL,
  item_name        TEXT NOT NULL,
  item_description TEXT,
  price_cents      BIGINT NOT NULL,
  quantity         INTEGER NOT NULL
);
"#;

const SEED_SQL: &str = r#"
INSERT INTO items (name, description, price_cents)
SELECT v.name, v.description, v.price_cents
FROM (VALUES
  ('Round Widget',  'A widget that is round',  299),
  ('Square Widget', 'A widget that is square', 199)
) AS v (name, description, price_cents)
WHERE NOT EXISTS (SELECT 1 FROM items);
"#;

/// Creates the schema when missing and optionally seeds the item catalog.
pub async fn initialize(pool: &PgPool, seed: bool) -> Result<()> {
  sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
  info!("Database schema is in place.");

  if seed {
    sqlx::raw_sql(SEED_SQL).execute(pool).await?;
    info!("Database seeded with the starter item catalog.");
  }

  Ok(())
}
