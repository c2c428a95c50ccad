use crate::{AuthError, Claims, JwtAlgorithm, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerance in seconds
const LEEWAY_SECS: u64 = 30;

pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl JwtValidator {
    #[track_caller]
    pub fn new(algorithm: JwtAlgorithm) -> AuthErrorResult<Self> {
        match algorithm {
            JwtAlgorithm::HS256 { secret } => Ok(Self::with_hs256(&secret)),
            JwtAlgorithm::RS256 { public_key_pem } => Self::with_rs256(&public_key_pem),
        }
    }

    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Self::validation_for(Algorithm::HS256),
            algorithm: Algorithm::HS256,
        }
    }

    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            decoding_key,
            validation: Self::validation_for(Algorithm::RS256),
            algorithm: Algorithm::RS256,
        })
    }

    fn validation_for(algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;
        validation
    }

    /// Verifies signature and expiry, then the claims themselves.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            },
        )?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// For logging
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}
