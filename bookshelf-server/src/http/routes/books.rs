//! Book endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::{ApiError, BookOp};
use crate::http::extractors::IdParam;
use crate::http::server::AppState;
use crate::models::{Book, NewBook};

/// Success envelope without a payload
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Success envelope carrying `data`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub message: &'static str,
    pub data: T,
}

/// POST /api/create_book
async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(book) = payload?;

    let book = state
        .books
        .create(book)
        .await
        .map_err(|e| ApiError::storage(BookOp::Create, e))?;
    tracing::debug!(id = book.id, "Book created");

    Ok(Json(MessageResponse {
        message: "book created successfully",
    }))
}

/// DELETE /api/delete_book/{id}
async fn delete_book(
    State(state): State<Arc<AppState>>,
    id: IdParam,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = id.parse(BookOp::Delete)?;

    let removed = state
        .books
        .delete(id)
        .await
        .map_err(|e| ApiError::storage(BookOp::Delete, e))?;
    tracing::debug!(%id, removed, "Book deleted");

    Ok(Json(MessageResponse {
        message: "book deleted successfully",
    }))
}

/// GET /api/get_books/{id}
async fn get_book(
    State(state): State<Arc<AppState>>,
    id: IdParam,
) -> Result<Json<DataResponse<Book>>, ApiError> {
    let id = id.parse(BookOp::Fetch)?;

    let book = state
        .books
        .get(id)
        .await
        .map_err(|e| ApiError::storage(BookOp::Fetch, e))?;

    Ok(Json(DataResponse {
        message: "book fetched successfully",
        data: book,
    }))
}

/// GET /api/books
async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataResponse<Vec<Book>>>, ApiError> {
    let books = state
        .books
        .list()
        .await
        .map_err(|e| ApiError::storage(BookOp::List, e))?;

    Ok(Json(DataResponse {
        message: "books fetched successfully",
        data: books,
    }))
}

/// Book routes, relative to the `/api` prefix.
///
/// The trailing-slash routes carry no id and answer with the empty-id error.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create_book", post(create_book))
        .route("/delete_book/", delete(delete_book))
        .route("/delete_book/{id}", delete(delete_book))
        .route("/get_books/", get(get_book))
        .route("/get_books/{id}", get(get_book))
        .route("/books", get(list_books))
}
