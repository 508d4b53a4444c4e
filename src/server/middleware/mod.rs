//! HTTP middleware layered onto the API router.

pub mod cache;
