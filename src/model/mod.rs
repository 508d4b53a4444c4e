//! Data transfer objects exchanged over the HTTP API.
//!
//! These types describe the JSON request and response bodies. The server converts them
//! to and from its domain models at the controller boundary.

pub mod api;
pub mod author;
pub mod book;
pub mod health;
