use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::StatusCode,
};

use crate::error::AppError;
use crate::pipeline::{AuthenticatedRequest, Claims};

/// Handler で、AuthenticatedRequest を受け取るための extractor
/// middleware が Claims を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（認証がかかってない・ミドルウェア未設定）
///
/// Consumes the body, so it must be the last extractor of a handler.
impl<S> FromRequest<S> for AuthenticatedRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let claims = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .ok_or(AppError::Unauthorized)?;

        let body = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        Ok(AuthenticatedRequest::new(body, claims))
    }
}

fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::bad_request("INVALID_REQUEST_BODY", rejection.body_text())
    }
}
