//! API error types with IntoResponse
//!
//! Each book operation has its own failure message and status code. The
//! underlying cause is logged and never sent to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;

/// Book operation a storage failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOp {
    Create,
    Delete,
    Fetch,
    List,
}

impl BookOp {
    /// Status reported when storage fails during this operation.
    pub fn failure_status(self) -> StatusCode {
        match self {
            Self::Create | Self::Delete | Self::List => StatusCode::BAD_REQUEST,
            Self::Fetch => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "couldn't create book",
            Self::Delete => "couldn't delete book",
            Self::Fetch => "couldn't fetched book",
            Self::List => "couldn't get books",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be parsed (422)
    RequestParse(JsonRejection),

    /// Path id segment was empty (500)
    EmptyId,

    /// Storage call failed (status depends on the operation)
    Storage { op: BookOp, source: StoreError },
}

impl ApiError {
    pub fn storage(op: BookOp, source: StoreError) -> Self {
        Self::Storage { op, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::RequestParse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::EmptyId => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Storage { op, .. } => op.failure_status(),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::RequestParse(_) => "request failed",
            Self::EmptyId => "id cannot be empty",
            Self::Storage { op, .. } => op.failure_message(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::RequestParse(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::RequestParse(rejection) => {
                tracing::warn!("Request body rejected: {}", rejection.body_text());
            }
            Self::EmptyId => tracing::warn!("Request without book id"),
            Self::Storage { op, source } => {
                tracing::error!(?op, "Storage error: {}", source);
            }
        }

        let body = Json(json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookId;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn empty_id_is_500() {
        let response = ApiError::EmptyId.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "id cannot be empty" })
        );
    }

    #[tokio::test]
    async fn fetch_not_found_is_500() {
        let err = ApiError::storage(BookOp::Fetch, StoreError::NotFound { id: BookId(9999) });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "couldn't fetched book" })
        );
    }

    #[tokio::test]
    async fn storage_statuses_per_operation() {
        for (op, status) in [
            (BookOp::Create, StatusCode::BAD_REQUEST),
            (BookOp::Delete, StatusCode::BAD_REQUEST),
            (BookOp::List, StatusCode::BAD_REQUEST),
            (BookOp::Fetch, StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let response = ApiError::storage(op, StoreError::Unavailable).into_response();
            assert_eq!(response.status(), status, "{:?}", op);
        }
    }

    #[tokio::test]
    async fn storage_cause_is_not_leaked() {
        let err = ApiError::storage(
            BookOp::Delete,
            StoreError::InvalidId {
                raw: "drop table".into(),
            },
        );
        let body = body_json(err.into_response()).await;
        assert_eq!(body, json!({ "error": "couldn't delete book" }));
    }
}
