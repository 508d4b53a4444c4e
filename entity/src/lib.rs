//! SeaORM entity definitions for the bookshelf schema.
//!
//! Authors and books are linked many-to-many through `book_author`. Both sides
//! carry a nullable `deleted_at` timestamp used for soft deletion.

pub mod prelude;

pub mod author;
pub mod book;
pub mod book_author;
