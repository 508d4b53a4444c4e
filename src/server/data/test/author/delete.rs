use super::*;

/// Tests soft-deleting an author.
///
/// Verifies the row is kept with `deleted_at` set, `updated_at` refreshed and book links
/// remain.
///
/// Expected: Ok(true)
#[tokio::test]
async fn soft_deletes_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::author::AuthorFactory::new(db)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let book = factory::create_book(db).await?;
    factory::link_book_to_author(db, book.id, author.id).await?;

    let repo = AuthorRepository::new(db);
    let deleted = repo.delete(author.id).await?;

    assert!(deleted);
    let db_author = entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_author.deleted_at.is_some());
    assert!(db_author.updated_at > author.updated_at);
    assert!(repo.get_by_id(author.id).await?.is_none());

    let links = entity::prelude::BookAuthor::find()
        .filter(entity::book_author::Column::AuthorId.eq(author.id))
        .count(db)
        .await?;
    assert_eq!(links, 1);

    Ok(())
}

/// Tests deleting an author twice.
///
/// Expected: Ok(false) on the second call
#[tokio::test]
async fn returns_false_when_already_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    assert!(repo.delete(author.id).await?);
    assert!(!repo.delete(author.id).await?);

    Ok(())
}

/// Tests deleting a missing author.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
