use super::*;

/// Tests creating a standalone book.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let published = Utc.with_ymd_and_hms(1974, 5, 1, 0, 0, 0).unwrap();
    let repo = BookRepository::new(db);
    let book = repo
        .create(CreateBookParams {
            fields: BookFields {
                title: "The Dispossessed".to_string(),
                published_date: published,
                image_url: Some("https://example.com/cover.png".to_string()),
                description: "An ambiguous utopia.".to_string(),
            },
        })
        .await?;

    assert_eq!(book.title, "The Dispossessed");
    assert_eq!(book.published_date, published);
    assert_eq!(book.image_url.as_deref(), Some("https://example.com/cover.png"));

    let db_book = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_book.description, "An ambiguous utopia.");
    assert!(db_book.deleted_at.is_none());

    Ok(())
}
