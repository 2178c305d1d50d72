//! Book listing and CRUD endpoints

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Query string carrying the target book id
#[derive(Debug, Deserialize, IntoParams)]
#[serde(from = "Vec<(String, String)>")]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book ID
    pub id: Option<String>,
}

/// Keeps the first `id` pair; repeated keys are ignored
impl From<Vec<(String, String)>> for BookIdQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            id: pairs.into_iter().find(|(key, _)| key == "id").map(|(_, value)| value),
        }
    }
}

impl BookIdQuery {
    fn parse(&self) -> AppResult<i64> {
        self.id
            .as_deref()
            .and_then(|id| id.parse().ok())
            .ok_or_else(|| AppError::BadRequest("Invalid book ID".to_string()))
    }
}

/// Decode a JSON book body regardless of the request content type
fn decode_book(body: &[u8]) -> AppResult<Book> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid input: {}", e)))
}

/// Render the listing page, seeding the store on first use
pub async fn index(State(state): State<crate::AppState>) -> AppResult<Html<String>> {
    let books = state.services.books.list().await?;
    let page = state.services.renderer.render(&books).await?;
    Ok(Html(page))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/add",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Stored book with its assigned id", body = Book),
        (status = 400, description = "Malformed JSON body"),
        (status = 405, description = "Wrong method")
    )
)]
pub async fn add_book(State(state): State<crate::AppState>, body: Bytes) -> AppResult<Json<Book>> {
    let book = decode_book(&body)?;
    let stored = state.services.books.insert(book).await?;
    Ok(Json(stored))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/update",
    tag = "books",
    params(BookIdQuery),
    request_body = Book,
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Missing or invalid id, or malformed JSON body"),
        (status = 404, description = "No book with this id"),
        (status = 405, description = "Wrong method")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Query(query): Query<BookIdQuery>,
    body: Bytes,
) -> AppResult<Json<Book>> {
    let id = query.parse()?;
    let book = decode_book(&body)?;
    let updated = state.services.books.update(id, book).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/delete",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Missing or invalid id"),
        (status = 404, description = "No book with this id"),
        (status = 405, description = "Wrong method")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Query(query): Query<BookIdQuery>,
) -> AppResult<StatusCode> {
    let id = query.parse()?;
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Discard all changes and restore the fetched catalog
#[utoipa::path(
    post,
    path = "/reset",
    tag = "books",
    responses(
        (status = 204, description = "Working set restored")
    )
)]
pub async fn reset_books(State(state): State<crate::AppState>) -> StatusCode {
    state.services.books.reset().await;
    StatusCode::NO_CONTENT
}

/// Fallback for CRUD routes hit with the wrong method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
