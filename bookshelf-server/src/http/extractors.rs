//! Custom Axum extractors

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::{ApiError, BookOp};
use crate::db::StoreError;
use crate::models::BookId;

/// Raw `id` path segment, empty only when the route has none.
///
/// Never rejects; handlers decide what an empty or malformed id means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParam(pub String);

impl IdParam {
    /// Parse into a [`BookId`] for `op`.
    ///
    /// An empty segment is [`ApiError::EmptyId`]. A non-numeric segment is a
    /// storage failure of `op`, since the database would reject it as well.
    pub fn parse(&self, op: BookOp) -> Result<BookId, ApiError> {
        if self.0.is_empty() {
            return Err(ApiError::EmptyId);
        }

        self.0.parse().map_err(|_| {
            ApiError::storage(
                op,
                StoreError::InvalidId {
                    raw: self.0.clone(),
                },
            )
        })
    }
}

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Path(mut params)) => params.remove("id").unwrap_or_default(),
            // undecodable segment: keep it raw so parsing rejects it as an id
            Err(_) => last_segment(parts.uri.path()).to_owned(),
        };

        Ok(Self(id))
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
