use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        book::{BookDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        controller::PathId,
        error::AppError,
        model::book::{Book, BookFilter, CreateBookParams, UpdateBookParams},
        service::book::BookService,
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Create a new book.
///
/// # Returns
/// - `201 Created` - The persisted book
/// - `400 Bad Request` - Missing or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/book",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Successfully created book", body = BookDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBookParams::from_dto(payload)?;

    let service = BookService::new(&state.db);
    let book = service.create(params).await?;
    state.cache.invalidate_all();

    Ok((StatusCode::CREATED, Json(book.into_dto())))
}

/// List or search books.
///
/// When `title` or `description` is present the request is a search matching those fields
/// case-insensitively; otherwise every non-deleted book is listed. Both honor pagination
/// and sorting.
///
/// # Returns
/// - `200 OK` - Array of books
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/book",
    tag = BOOK_TAG,
    params(
        ("title" = Option<String>, Query, description = "Case-insensitive substring of the title"),
        ("description" = Option<String>, Query, description = "Case-insensitive substring of the description"),
        ("sort" = Option<String>, Query, description = "Repeatable `field,asc|desc`; fields: title, published_date, created_at, updated_at"),
        ("page" = Option<u64>, Query, description = "1-based page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 30); alias `size`"),
        ("offset" = Option<u64>, Query, description = "Explicit offset, overrides `page`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = BookFilter::from_query(&query);

    let service = BookService::new(&state.db);
    let books = if filter.is_search() {
        service.search(&filter).await?
    } else {
        service.list(&filter).await?
    };

    let books: Vec<BookDto> = books.into_iter().map(Book::into_dto).collect();

    Ok((StatusCode::OK, Json(books)))
}

/// Get a book by ID.
///
/// # Returns
/// - `200 OK` - The book
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - Book missing or deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/book/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookDto),
        (status = 400, description = "Invalid book ID", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {

    let service = BookService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(book) => Ok((StatusCode::OK, Json(book.into_dto()))),
        None => Err(AppError::NotFound("Book not found".to_string())),
    }
}

/// Update a book.
///
/// Replaces every field of the book.
///
/// # Returns
/// - `200 OK` - The updated book
/// - `400 Bad Request` - Invalid ID or fields
/// - `404 Not Found` - Book missing or deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/book/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Successfully updated book", body = BookDto),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    PathId(id): PathId,
    Json(payload): Json<UpdateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateBookParams::from_dto(id, payload)?;

    let service = BookService::new(&state.db);

    match service.update(params).await? {
        Some(book) => {
            state.cache.invalidate_all();
            Ok((StatusCode::OK, Json(book.into_dto())))
        }
        None => Err(AppError::NotFound("Book not found".to_string())),
    }
}

/// Delete a book.
///
/// Soft-deletes the book; it also disappears from its authors' book lists.
///
/// # Returns
/// - `200 OK` - Book deleted, empty body
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - Book missing or already deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/book/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted book"),
        (status = 400, description = "Invalid book ID", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {

    let service = BookService::new(&state.db);

    if service.delete(id).await? {
        state.cache.invalidate_all();
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound("Book not found".to_string()))
    }
}
