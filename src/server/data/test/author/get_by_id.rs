use super::*;

/// Tests getting an existing author with books.
///
/// Expected: Ok(Some) with books ordered by id
#[tokio::test]
async fn returns_author_with_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, books) = factory::helpers::create_author_with_books(db, 3).await?;

    let repo = AuthorRepository::new(db);
    let result = repo.get_by_id(author.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, author.id);
    assert_eq!(found.first_name, author.first_name);
    let ids: Vec<i32> = found.books.iter().map(|b| b.id).collect();
    let expected: Vec<i32> = books.iter().map(|b| b.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that soft-deleted books are not embedded.
///
/// Expected: Ok(Some) with only the live book
#[tokio::test]
async fn excludes_deleted_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let live = factory::create_book(db).await?;
    let gone = factory::book::BookFactory::new(db).deleted().build().await?;
    factory::link_book_to_author(db, live.id, author.id).await?;
    factory::link_book_to_author(db, gone.id, author.id).await?;

    let repo = AuthorRepository::new(db);
    let found = repo.get_by_id(author.id).await?.unwrap();

    assert_eq!(found.books.len(), 1);
    assert_eq!(found.books[0].id, live.id);

    Ok(())
}

/// Tests getting a soft-deleted author.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::author::AuthorFactory::new(db).deleted().build().await?;

    let repo = AuthorRepository::new(db);
    let result = repo.get_by_id(author.id).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests getting an author that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
