use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// JWT Claims structure.
///
/// Tokens are issued by the identity provider; the server only verifies them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,      // External identity
    pub username: String, // Display name chosen at the provider
    pub exp: usize,       // Expiration timestamp
}

/// Sign a token for the given identity.
///
/// The provider normally does this; kept here for tests and local tooling.
pub fn sign(external_id: &str, username: &str, secret: &str) -> Result<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::days(7))
        .expect("valid timestamp")
        .timestamp();

    let claims = Claims {
        sub: external_id.to_owned(),
        username: username.to_owned(),
        exp: expiration as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode a token.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
