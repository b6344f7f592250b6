// commerce/src/services/user_service.rs

use crate::errors::{AppError, Result};
use crate::models::User;
use crate::services::auth_service;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

const MIN_PASSWORD_LENGTH: usize = 7;

/// Registration rules: non-empty username, password of at least seven
/// characters matching its confirmation.
pub fn validate_new_user(username: &str, password: &str, confirm_password: &str) -> Result<()> {
  if username.trim().is_empty() {
    return Err(AppError::Validation("Username is required.".to_string()));
  }
  if password.len() < MIN_PASSWORD_LENGTH {
    return Err(AppError::Validation(format!(
      "Password must be at least {} characters long.",
      MIN_PASSWORD_LENGTH
    )));
  }
  if password != confirm_password {
    return Err(AppError::Validation(
      "Password and confirmation do not match.".to_string(),
    ));
  }
  Ok(())
}

/// Creates a user together with their (empty) cart in one transaction.
#[instrument(name = "user_service::create_user", skip(db_pool, password, confirm_password), err(Display))]
pub async fn create_user(db_pool: &PgPool, username: &str, password: &str, confirm_password: &str) -> Result<User> {
  validate_new_user(username, password, confirm_password)?;

  let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
    .bind(username)
    .fetch_one(db_pool)
    .await?;
  if exists {
    warn!("Attempt to register an already taken username: {}", username);
    return Err(AppError::Validation(format!(
      "Username '{}' is already taken.",
      username
    )));
  }

  let password_hash = auth_service::hash_password(password)?;

  let mut tx = db_pool.begin().await?;

  // Two registrations can race past the EXISTS check; the unique index on
  // username decides the loser, which must still surface as a validation
  // failure rather than a server error.
  let user: User = sqlx::query_as(
    "INSERT INTO users (username, password_hash) VALUES ($1, $2) \
     RETURNING id, username, password_hash, created_at",
  )
  .bind(username)
  .bind(&password_hash)
  .fetch_one(&mut *tx)
  .await
  .map_err(|e| registration_insert_error(e, username))?;

  sqlx::query("INSERT INTO carts (user_id, total_cents) VALUES ($1, 0)")
    .bind(user.id)
    .execute(&mut *tx)
    .await?;

  tx.commit().await?;

  info!("User {} created with id {}.", username, user.id);
  Ok(user)
}

fn registration_insert_error(err: sqlx::Error, username: &str) -> AppError {
  if let sqlx::Error::Database(db_err) = &err {
    if db_err.is_unique_violation() {
      warn!("Concurrent registration lost the race for username: {}", username);
      return AppError::Validation(format!("Username '{}' is already taken.", username));
    }
  }
  AppError::Sqlx(err)
}

/// Looks a user up by username.
#[instrument(name = "user_service::find_by_username", skip(db_pool), err(Display))]
pub async fn find_by_username(db_pool: &PgPool, username: &str) -> Result<User> {
  let user: Option<User> = sqlx::query_as("SELECT id, username, password_hash, created_at FROM users WHERE username = $1")
    .bind(username)
    .fetch_optional(db_pool)
    .await?;

  user.ok_or_else(|| AppError::NotFound(format!("User '{}' not found.", username)))
}

/// Looks a user up by numeric id.
#[instrument(name = "user_service::find_by_id", skip(db_pool), err(Display))]
pub async fn find_by_id(db_pool: &PgPool, id: i64) -> Result<User> {
  let user: Option<User> = sqlx::query_as("SELECT id, username, password_hash, created_at FROM users WHERE id = $1")
    .bind(id)
    .fetch_optional(db_pool)
    .await?;

  user.ok_or_else(|| AppError::NotFound(format!("User with id {} not found.", id)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_a_well_formed_registration() {
    assert!(validate_new_user("testuser", "longenough", "longenough").is_ok());
  }

  #[test]
  fn rejects_blank_usernames() {
    assert!(validate_new_user("", "longenough", "longenough").is_err());
    assert!(validate_new_user("   ", "longenough", "longenough").is_err());
  }

  #[test]
  fn rejects_short_passwords() {
    // Six characters is one short of the minimum.
    let err = validate_new_user("testuser", "sixchr", "sixchr").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    // Exactly seven is fine.
    assert!(validate_new_user("testuser", "sevench", "sevench").is_ok());
  }

  #[test]
  fn rejects_mismatched_confirmation() {
    let err = validate_new_user("testuser", "longenough", "different").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
  }

  // Stand-in for the driver error Postgres raises on a duplicate username.
  #[derive(Debug)]
  struct DuplicateKey;

  impl std::fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "duplicate key value violates unique constraint \"users_username_key\"")
    }
  }

  impl std::error::Error for DuplicateKey {}

  impl sqlx::error::DatabaseError for DuplicateKey {
    fn message(&self) -> &str {
      "duplicate key value violates unique constraint \"users_username_key\""
    }

    fn kind(&self) -> sqlx::error::ErrorKind {
      sqlx::error::ErrorKind::UniqueViolation
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
      self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
      self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
      self
    }
  }

  #[test]
  fn duplicate_username_insert_surfaces_as_validation() {
    // Concurrent registrations can both pass the EXISTS check; the losing
    // INSERT must still be reported as a taken username, not a 500.
    let err = registration_insert_error(sqlx::Error::Database(Box::new(DuplicateKey)), "testuser");
    match err {
      AppError::Validation(m) => assert!(m.contains("already taken")),
      other => panic!("expected a validation error, got {:?}", other),
    }
  }

  #[test]
  fn other_insert_errors_stay_database_errors() {
    let err = registration_insert_error(sqlx::Error::RowNotFound, "testuser");
    assert!(matches!(err, AppError::Sqlx(_)));
  }
}
