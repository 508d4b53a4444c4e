//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_author(&db).await?;
//! let book = factory::create_book(&db).await?;
//! factory::link_book_to_author(&db, book.id, author.id).await?;
//!
//! // Or everything at once
//! let (author, books) = factory::helpers::create_author_with_books(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let author = factory::author::AuthorFactory::new(&db)
//!     .first_name("Ursula")
//!     .last_name("Le Guin")
//!     .deleted()
//!     .build()
//!     .await?;
//! ```

pub mod author;
pub mod book;
pub mod helpers;

pub use author::create_author;
pub use book::{create_book, link_book_to_author};
