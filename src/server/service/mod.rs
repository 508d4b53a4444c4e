//! Service layer between the controllers and the repositories.
//!
//! Services work with domain models rather than DTOs or entity models. They mostly forward
//! to a repository; create and update re-read the record after the write so callers always
//! receive the persisted state.

pub mod author;
pub mod book;
