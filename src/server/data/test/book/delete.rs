use super::*;

/// Tests soft-deleting a book.
///
/// Expected: Ok(true) then Ok(false) on a repeat delete, with `updated_at` refreshed
#[tokio::test]
async fn soft_deletes_book_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    assert!(repo.delete(book.id).await?);
    assert!(!repo.delete(book.id).await?);

    let db_book = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_book.deleted_at.is_some());
    assert!(db_book.updated_at > book.updated_at);

    Ok(())
}

/// Tests that a deleted book disappears from its author's books.
///
/// Expected: Ok with the author's book list empty
#[tokio::test]
async fn hides_deleted_book_from_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, books) = factory::helpers::create_author_with_books(db, 1).await?;

    let repo = BookRepository::new(db);
    assert!(repo.delete(books[0].id).await?);

    let author_repo = crate::server::data::author::AuthorRepository::new(db);
    let found = author_repo.get_by_id(author.id).await?.unwrap();
    assert!(found.books.is_empty());

    Ok(())
}
