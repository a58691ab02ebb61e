//! Authenticated request envelope.
//!
//! Holds the untrusted body and the trusted claims side by side and only lets a handler
//! reach them through two separate steps: `decode` (body → shape) and `authorize`
//! (claims → final request). Identity fields therefore have to be copied from claims
//! explicitly; a body field can never stand in for them.

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::pipeline::{claims::Claims, error::ActivityError};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("request body is empty")]
    EmptyBody,
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct AuthenticatedRequest {
    body: Bytes,
    claims: Claims,
}

impl AuthenticatedRequest {
    pub fn new(body: impl Into<Bytes>, claims: Claims) -> Self {
        Self {
            body: body.into(),
            claims,
        }
    }

    /// Parse the raw body as `T`.
    ///
    /// Only checks shape (well-formed JSON, required fields present). Value semantics are
    /// left to the activity.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Err(DecodeError::EmptyBody);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Build the authorized request from the verified claims.
    ///
    /// `combiner` runs exactly once; whatever it returns (including its error) is handed
    /// back unchanged.
    pub fn authorize<T, F>(&self, combiner: F) -> Result<T, ActivityError>
    where
        F: FnOnce(&Claims) -> Result<T, ActivityError>,
    {
        combiner(&self.claims)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
