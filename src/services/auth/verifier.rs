use std::collections::BTreeMap;
use std::{error::Error as StdError, fmt};

use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::pipeline::Claims;

// Errors returned by bearer-token verification.
#[derive(Debug)]
pub enum VerifyError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
        }
    }
}

impl StdError for VerifyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// HS256 bearer-token verifier standing in for the platform's authentication step.
///
/// - Signature, `exp`, `iss` and `aud` are checked by `jsonwebtoken::Validation`.
/// - Scalar claims (strings, numbers, booleans) become the request's `Claims`;
///   arrays and objects are dropped.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct ClaimsVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for ClaimsVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimsVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl ClaimsVerifier {
    pub fn new(
        secret: &str,
        issuer: &str,
        audience: &str,
        leeway_seconds: u64,
    ) -> Result<Self, String> {
        if secret.trim().is_empty() {
            return Err("jwt secret must not be empty".to_string());
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.leeway = leeway_seconds;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        let data = jsonwebtoken::decode::<BTreeMap<String, serde_json::Value>>(
            token,
            &self.decoding_key,
            &self.validation,
        )?;

        let claims: Claims = data
            .claims
            .into_iter()
            .filter_map(|(name, value)| scalar_to_string(value).map(|v| (name, v)))
            .collect();

        if !claims.contains("sub") && !claims.contains("email") {
            return Err(VerifyError::EmptyClaim("sub"));
        }

        Ok(claims)
    }
}

fn scalar_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
