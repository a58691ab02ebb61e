//! Response envelope returned to the platform.
//!
//! Built exactly once per invocation from the terminal outcome of the runner and never
//! modified afterwards. Building one cannot fail: when a payload refuses to serialize the
//! envelope degrades to a static server-error body.

use std::collections::BTreeMap;

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ErrorBody, ErrorResponse};
use crate::pipeline::error::ActivityError;

const SERVER_ERROR_BODY: &str =
    r#"{"error":{"code":"INTERNAL_SERVER_ERROR","message":"internal server error"}}"#;

/// Closed set of outcome classes a response can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Success,
    ClientError,
    NotFound,
    Forbidden,
    ServerError,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 5] = [
        Self::Success,
        Self::ClientError,
        Self::NotFound,
        Self::Forbidden,
        Self::ServerError,
    ];

    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ClientError => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    status: StatusCategory,
    body: String,
    headers: BTreeMap<String, String>,
}

impl ResponseEnvelope {
    fn json(status: StatusCategory, body: String) -> Self {
        let headers = BTreeMap::from([(
            header::CONTENT_TYPE.as_str().to_string(),
            "application/json".to_string(),
        )]);
        Self {
            status,
            body,
            headers,
        }
    }

    pub fn success<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self::json(StatusCategory::Success, body),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize activity result");
                Self::server_error()
            }
        }
    }

    pub fn failure(status: StatusCategory, code: &'static str, message: impl Into<String>) -> Self {
        let payload = ErrorResponse {
            error: ErrorBody {
                code,
                message: message.into(),
            },
        };
        match serde_json::to_string(&payload) {
            Ok(body) => Self::json(status, body),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize error payload");
                Self::server_error()
            }
        }
    }

    pub fn from_error(err: &ActivityError) -> Self {
        Self::failure(err.category(), err.code(), err.public_message())
    }

    pub fn server_error() -> Self {
        Self::json(StatusCategory::ServerError, SERVER_ERROR_BODY.to_string())
    }

    pub fn status(&self) -> StatusCategory {
        self.status
    }

    pub fn status_code(&self) -> StatusCode {
        self.status.status_code()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn parse_body<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "dropping invalid response header"),
            }
        }

        (self.status.status_code(), headers, self.body).into_response()
    }
}
