use super::*;

fn fields() -> BookFields {
    BookFields {
        title: "Children of Dune".to_string(),
        published_date: Utc.with_ymd_and_hms(1976, 4, 1, 0, 0, 0).unwrap(),
        image_url: None,
        description: "Leto and Ghanima.".to_string(),
    }
}

/// Tests replacing every field of a book.
///
/// Expected: Ok with fields replaced and image_url cleared
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db)
        .image_url(Some("https://example.com/old.png".to_string()))
        .build()
        .await?;

    let repo = BookRepository::new(db);
    repo.update(UpdateBookParams {
        id: book.id,
        fields: fields(),
    })
    .await?;

    let db_book = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_book.title, "Children of Dune");
    assert_eq!(db_book.description, "Leto and Ghanima.");
    assert!(db_book.image_url.is_none());
    assert!(db_book.updated_at >= book.updated_at);

    Ok(())
}

/// Tests updating a soft-deleted book.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_deleted_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db).deleted().build().await?;

    let repo = BookRepository::new(db);
    let result = repo
        .update(UpdateBookParams {
            id: book.id,
            fields: fields(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
