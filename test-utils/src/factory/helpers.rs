//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author together with `count` linked books.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of books to create and link to the author
///
/// # Returns
/// - `Ok((author, books))` - The author and its books in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_author_with_books(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::author::Model, Vec<entity::book::Model>), DbErr> {
    let author = crate::factory::author::create_author(db).await?;

    let mut books = Vec::with_capacity(count);
    for _ in 0..count {
        let book = crate::factory::book::create_book(db).await?;
        crate::factory::book::link_book_to_author(db, book.id, author.id).await?;
        books.push(book);
    }

    Ok((author, books))
}
