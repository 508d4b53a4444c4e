use super::*;

/// Tests searching by title.
///
/// Expected: Ok with case-insensitive substring matches only
#[tokio::test]
async fn searches_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dune = factory::book::BookFactory::new(db)
        .title("Dune Messiah")
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .title("Solaris")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo
        .search(&BookFilter {
            title: Some("dUNE".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, dune.id);

    Ok(())
}

/// Tests that title and description filters combine with AND.
///
/// Expected: Ok with only the book matching both
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::book::BookFactory::new(db)
        .title("Dune")
        .description("A desert planet.")
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .title("Dune Messiah")
        .description("The emperor.")
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .title("Arrakis Atlas")
        .description("Maps of a desert planet.")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo
        .search(&BookFilter {
            title: Some("dune".to_string()),
            description: Some("DESERT".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, matching.id);

    Ok(())
}

/// Tests that deleted books never match a search.
///
/// Expected: Ok with an empty result
#[tokio::test]
async fn skips_deleted_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db)
        .title("Dune")
        .deleted()
        .build()
        .await?;

    let repo = BookRepository::new(db);
    let books = repo
        .search(&BookFilter {
            title: Some("dune".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(books.is_empty());

    Ok(())
}
