use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ListMetaDto},
        author::{AuthorDto, CreateAuthorDto, PaginatedAuthorsDto, UpdateAuthorDto},
        book::{BookDto, CreateBookDto},
        health::HealthDto,
    },
    server::{
        controller::{
            author::{create_author, delete_author, get_author_by_id, get_authors, update_author},
            book::{create_book, delete_book, get_book_by_id, get_books, update_book},
            health::{liveness, readiness},
        },
        error::config::ConfigError,
        middleware::cache::cache_by_url,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        description = "Authors and their books, with soft delete, filtering and pagination"
    ),
    paths(
        crate::server::controller::author::create_author,
        crate::server::controller::author::get_authors,
        crate::server::controller::author::get_author_by_id,
        crate::server::controller::author::update_author,
        crate::server::controller::author::delete_author,
        crate::server::controller::book::create_book,
        crate::server::controller::book::get_books,
        crate::server::controller::book::get_book_by_id,
        crate::server::controller::book::update_book,
        crate::server::controller::book::delete_book,
        crate::server::controller::health::liveness,
        crate::server::controller::health::readiness,
    ),
    components(schemas(
        AuthorDto,
        CreateAuthorDto,
        UpdateAuthorDto,
        PaginatedAuthorsDto,
        BookDto,
        CreateBookDto,
        ListMetaDto,
        ErrorDto,
        HealthDto
    )),
    tags(
        (name = "author", description = "Authors and their embedded books"),
        (name = "book", description = "Books"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

/// Builds the application router with all API routes, docs and request tracing.
///
/// Only the author list route sits behind the response cache.
pub fn router(state: AppState) -> Router {
    let cache = from_fn_with_state(state.cache.clone(), cache_by_url);

    Router::new()
        .route(
            "/api/v1/author",
            post(create_author).merge(get(get_authors).layer(cache)),
        )
        .route(
            "/api/v1/author/{id}",
            get(get_author_by_id)
                .put(update_author)
                .delete(delete_author),
        )
        .route("/api/v1/book", post(create_book).get(get_books))
        .route(
            "/api/v1/book/{id}",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
        .route("/api/health/liveness", get(liveness))
        .route("/api/health/readiness", get(readiness))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer.
///
/// Restricts requests to `allowed_origin` when set, otherwise allows any origin.
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match allowed_origin {
        None => Ok(layer.allow_origin(Any)),
        Some(origin) => {
            let origin =
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    value: origin.to_string(),
                })?;
            Ok(layer.allow_origin(origin))
        }
    }
}
