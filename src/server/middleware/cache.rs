//! URL-keyed HTTP response cache.
//!
//! Caches successful `GET` responses in memory, keyed by the request path plus query string.
//! Entries expire after a fixed TTL and the cache holds a bounded number of entries. Any
//! mutation of authors or books clears the whole cache via `ResponseCache::invalidate_all`.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{OriginalUri, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use moka::future::Cache;
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

/// Response header reporting whether the body came from the cache.
pub const CACHE_STATUS_HEADER: &str = "x-cache";

/// Largest response body the middleware will buffer and store.
const MAX_CACHED_BODY_BYTES: usize = 8 * 1024 * 1024;

/// A buffered response ready to be replayed.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl CachedResponse {
    fn into_response(self, cache_status: &'static str) -> Response {
        let mut response = (self.status, Body::from(self.body)).into_response();
        let headers = response.headers_mut();
        if let Some(content_type) = self.content_type {
            headers.insert(header::CONTENT_TYPE, content_type);
        }
        headers.insert(
            CACHE_STATUS_HEADER,
            HeaderValue::from_static(cache_status),
        );
        response
    }
}

/// Shared in-memory response cache.
///
/// Cloning is cheap; all clones share the same entries.
///
/// `generation` is bumped by every invalidation. A response computed while an invalidation
/// happened is never left in the cache.
#[derive(Clone)]
pub struct ResponseCache {
    inner: Cache<String, CachedResponse>,
    generation: Arc<AtomicU64>,
}

impl ResponseCache {
    /// Creates a cache holding at most `capacity` entries, each living for `ttl`.
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();

        Self {
            inner,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current invalidation generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub async fn get(&self, key: &str) -> Option<CachedResponse> {
        self.inner.get(key).await
    }

    /// Stores `response` unless the cache was invalidated since `generation` was read.
    ///
    /// Returns whether the entry was kept.
    pub async fn insert(&self, key: String, response: CachedResponse, generation: u64) -> bool {
        if self.generation() != generation {
            return false;
        }

        self.inner.insert(key.clone(), response).await;

        // An invalidation between the check and the insert may have missed this entry
        if self.generation() != generation {
            self.inner.invalidate(&key).await;
            return false;
        }

        true
    }

    /// Drops every entry. Entries stored before this call, and responses still being computed
    /// when it runs, are never served.
    pub fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.invalidate_all();
        tracing::debug!("Response cache invalidated");
    }
}

/// Builds the cache key from the full request URI.
///
/// Nested routers strip their prefix from `request.uri()`, so the original URI recorded by
/// axum is preferred.
fn cache_key(request: &Request) -> String {
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or_else(|| request.uri());

    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// Middleware serving `GET` requests from the response cache.
///
/// Non-`GET` requests pass through untouched. On a miss the inner response is buffered and
/// stored only when its status is `200 OK`.
pub async fn cache_by_url(
    State(cache): State<ResponseCache>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = cache_key(&request);

    if let Some(cached) = cache.get(&key).await {
        tracing::debug!(key = %key, "Response cache hit");
        return cached.into_response("HIT");
    }

    let generation = cache.generation();
    let response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let body = match to_bytes(body, MAX_CACHED_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(key = %key, "Failed to buffer response for caching: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let stored = cache
        .insert(
            key.clone(),
            CachedResponse {
                status: parts.status,
                content_type: parts.headers.get(header::CONTENT_TYPE).cloned(),
                body: body.clone(),
            },
            generation,
        )
        .await;
    if !stored {
        tracing::debug!(key = %key, "Cache invalidated during request, response not stored");
    }

    parts
        .headers
        .insert(CACHE_STATUS_HEADER, HeaderValue::from_static("MISS"));
    Response::from_parts(parts, Body::from(body))
}
