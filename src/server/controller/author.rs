use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDto, CreateAuthorDto, PaginatedAuthorsDto, UpdateAuthorDto},
    },
    server::{
        controller::PathId,
        error::AppError,
        model::author::{AuthorFilter, CreateAuthorParams, UpdateAuthorParams},
        service::author::AuthorService,
        state::AppState,
    },
};

/// Tag for grouping author endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "author";

/// Create a new author.
///
/// Creates an author together with any books listed in the payload. The author, the books
/// and their links are written in one transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection and response cache
/// - `payload` - Author names and optional initial books
///
/// # Returns
/// - `201 Created` - The persisted author with its books
/// - `400 Bad Request` - Missing or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/author",
    tag = AUTHOR_TAG,
    request_body = CreateAuthorDto,
    responses(
        (status = 201, description = "Successfully created author", body = AuthorDto),
        (status = 400, description = "Invalid author data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<CreateAuthorDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateAuthorParams::from_dto(payload)?;

    let service = AuthorService::new(&state.db);
    let author = service.create(params).await?;
    state.cache.invalidate_all();

    Ok((StatusCode::CREATED, Json(author.into_dto())))
}

/// List authors.
///
/// Returns one page of authors matching the name filters. Responses are served from the
/// URL-keyed response cache when possible.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Raw query pairs; `sort` may repeat and applies in order
///
/// # Returns
/// - `200 OK` - Page of authors plus pagination metadata
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/author",
    tag = AUTHOR_TAG,
    params(
        ("first_name" = Option<String>, Query, description = "Case-insensitive substring of the first name"),
        ("middle_name" = Option<String>, Query, description = "Case-insensitive substring of the middle name"),
        ("last_name" = Option<String>, Query, description = "Case-insensitive substring of the last name"),
        ("sort" = Option<String>, Query, description = "Repeatable `field,asc|desc`; fields: first_name, last_name, created_at, updated_at"),
        ("page" = Option<u64>, Query, description = "1-based page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 30); alias `size`"),
        ("offset" = Option<u64>, Query, description = "Explicit offset, overrides `page`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved authors", body = PaginatedAuthorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authors(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = AuthorFilter::from_query(&query);

    let service = AuthorService::new(&state.db);
    let authors = service.get_paginated(&filter).await?;

    Ok((StatusCode::OK, Json(authors.into_dto())))
}

/// Get an author by ID.
///
/// # Returns
/// - `200 OK` - The author with its non-deleted books
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - Author missing or deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/author/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved author", body = AuthorDto),
        (status = 400, description = "Invalid author ID", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {

    let service = AuthorService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(author) => Ok((StatusCode::OK, Json(author.into_dto()))),
        None => Err(AppError::NotFound("Author not found".to_string())),
    }
}

/// Update an author.
///
/// Replaces the author's names. Books are not touched.
///
/// # Returns
/// - `200 OK` - The updated author
/// - `400 Bad Request` - Invalid ID or fields
/// - `404 Not Found` - Author missing or deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/author/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = UpdateAuthorDto,
    responses(
        (status = 200, description = "Successfully updated author", body = AuthorDto),
        (status = 400, description = "Invalid author data", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_author(
    State(state): State<AppState>,
    PathId(id): PathId,
    Json(payload): Json<UpdateAuthorDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateAuthorParams::from_dto(id, payload)?;

    let service = AuthorService::new(&state.db);

    match service.update(params).await? {
        Some(author) => {
            state.cache.invalidate_all();
            Ok((StatusCode::OK, Json(author.into_dto())))
        }
        None => Err(AppError::NotFound("Author not found".to_string())),
    }
}

/// Delete an author.
///
/// Soft-deletes the author; it disappears from every read.
///
/// # Returns
/// - `200 OK` - Author deleted, empty body
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - Author missing or already deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/author/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted author"),
        (status = 400, description = "Invalid author ID", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_author(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {

    let service = AuthorService::new(&state.db);

    if service.delete(id).await? {
        state.cache.invalidate_all();
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound("Author not found".to_string()))
    }
}
