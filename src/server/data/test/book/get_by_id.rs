use super::*;

/// Tests getting an existing book.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn returns_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let repo = BookRepository::new(db);
    let found = repo.get_by_id(book.id).await?;

    assert_eq!(found.map(|b| b.title), Some(book.title));

    Ok(())
}

/// Tests getting a soft-deleted book.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db).deleted().build().await?;

    let repo = BookRepository::new(db);

    assert!(repo.get_by_id(book.id).await?.is_none());
    assert!(repo.get_by_id(book.id + 100).await?.is_none());

    Ok(())
}
