// commerce/src/services/auth_service.rs

//! Authentication primitives: password hashing/verification and bearer
//! token issuance/decoding.

use crate::errors::AppError;
use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,
    PasswordVerifier,
    SaltString,
  },
  Argon2,
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Hashes a plain-text password using Argon2 with a fresh random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty for hashing.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| {
      error!(error = %e, "Argon2 password hashing failed.");
      AppError::Internal(format!("Password hashing process failed: {}", e))
    })
}

/// Verifies a plain-text password against a stored Argon2 hash. Returns
/// `Ok(false)` on a mismatch; errors are reserved for malformed hashes.
#[instrument(name = "auth_service::verify_password", skip_all, err(Display))]
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool, AppError> {
  if provided_password.is_empty() {
    return Ok(false);
  }

  let parsed_hash = PasswordHash::new(hashed_password_str).map_err(|e| {
    error!(error = %e, "Failed to parse stored password hash string.");
    AppError::Internal(format!("Invalid stored password hash format: {}", e))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(e) => {
      error!(error = %e, "Argon2 password verification process failed.");
      Err(AppError::Internal(format!("Password verification process failed: {}", e)))
    }
  }
}

/// Token payload: the username as subject plus the expiry timestamp.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  pub exp: i64,
}

/// Issues an HS512-signed bearer token for the given username.
#[instrument(name = "auth_service::issue_token", skip(secret), err(Display))]
pub fn issue_token(username: &str, secret: &str, expiry_seconds: i64) -> Result<String, AppError> {
  let claims = Claims {
    sub: username.to_string(),
    exp: Utc::now().timestamp() + expiry_seconds,
  };

  jsonwebtoken::encode(
    &Header::new(Algorithm::HS512),
    &claims,
    &EncodingKey::from_secret(secret.as_bytes()),
  )
  .map_err(|e| AppError::Internal(format!("Token issuance failed: {}", e)))
}

/// Decodes and validates a bearer token, returning its claims.
#[instrument(name = "auth_service::decode_token", skip_all, err(Display))]
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
  let validation = Validation::new(Algorithm::HS512);
  jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
    .map(|data| data.claims)
    .map_err(|e| AppError::Auth(format!("Invalid or expired token: {}", e)))
}

#[cfg(test)]
mod tests {
  use super::*;

  const SECRET: &str = "test-signing-secret";

  #[test]
  fn hashing_never_stores_the_plain_password() {
    let hash = hash_password("hunter2longer").unwrap();
    assert_ne!(hash, "hunter2longer");
    assert!(hash.starts_with("$argon2"));
  }

  #[test]
  fn matching_password_verifies() {
    let hash = hash_password("correct horse battery").unwrap();
    assert!(verify_password(&hash, "correct horse battery").unwrap());
  }

  #[test]
  fn wrong_password_does_not_verify() {
    let hash = hash_password("correct horse battery").unwrap();
    assert!(!verify_password(&hash, "tr0ub4dor").unwrap());
    assert!(!verify_password(&hash, "").unwrap());
  }

  #[test]
  fn empty_password_cannot_be_hashed() {
    assert!(matches!(hash_password(""), Err(AppError::Validation(_))));
  }

  #[test]
  fn malformed_stored_hash_is_an_internal_error() {
    assert!(matches!(
      verify_password("not-a-phc-string", "anything"),
      Err(AppError::Internal(_))
    ));
  }

  #[test]
  fn issued_token_round_trips_to_its_subject() {
    let token = issue_token("testuser", SECRET, 3600).unwrap();
    let claims = decode_token(&token, SECRET).unwrap();
    assert_eq!(claims.sub, "testuser");
    assert!(claims.exp > Utc::now().timestamp());
  }

  #[test]
  fn token_signed_with_another_secret_is_rejected() {
    let token = issue_token("testuser", "some-other-secret", 3600).unwrap();
    assert!(matches!(decode_token(&token, SECRET), Err(AppError::Auth(_))));
  }

  #[test]
  fn expired_token_is_rejected() {
    // Two hours in the past, well beyond the default validation leeway.
    let token = issue_token("testuser", SECRET, -7200).unwrap();
    assert!(matches!(decode_token(&token, SECRET), Err(AppError::Auth(_))));
  }

  #[test]
  fn garbage_token_is_rejected() {
    assert!(matches!(decode_token("definitely.not.ajwt", SECRET), Err(AppError::Auth(_))));
  }
}
