use super::*;

fn book_fields(title: &str) -> BookFields {
    BookFields {
        title: title.to_string(),
        published_date: Utc.with_ymd_and_hms(1969, 3, 1, 0, 0, 0).unwrap(),
        image_url: None,
        description: format!("About {}", title),
    }
}

/// Tests creating an author without books.
///
/// Expected: Ok with author persisted, timestamps set and no books
#[tokio::test]
async fn creates_author_without_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let author = repo
        .create(CreateAuthorParams {
            first_name: "Ursula".to_string(),
            middle_name: Some("Kroeber".to_string()),
            last_name: "Le Guin".to_string(),
            books: vec![],
        })
        .await?;

    assert_eq!(author.first_name, "Ursula");
    assert_eq!(author.middle_name.as_deref(), Some("Kroeber"));
    assert_eq!(author.created_at, author.updated_at);
    assert!(author.books.is_empty());

    let db_author = entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_author.last_name, "Le Guin");
    assert!(db_author.deleted_at.is_none());

    Ok(())
}

/// Tests creating an author with nested books.
///
/// Verifies that every book is inserted and linked through the join table.
///
/// Expected: Ok with books returned in creation order
#[tokio::test]
async fn creates_author_with_linked_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let author = repo
        .create(CreateAuthorParams {
            first_name: "Ursula".to_string(),
            middle_name: None,
            last_name: "Le Guin".to_string(),
            books: vec![
                book_fields("The Left Hand of Darkness"),
                book_fields("The Dispossessed"),
            ],
        })
        .await?;

    assert_eq!(author.books.len(), 2);
    assert_eq!(author.books[0].title, "The Left Hand of Darkness");
    assert_eq!(author.books[1].title, "The Dispossessed");
    assert!(author.books[0].id < author.books[1].id);

    let links = entity::prelude::BookAuthor::find()
        .filter(entity::book_author::Column::AuthorId.eq(author.id))
        .count(db)
        .await?;
    assert_eq!(links, 2);

    Ok(())
}

/// Tests that a failed insert leaves nothing behind.
///
/// Without the join table the link insert fails, so the transaction must roll back the
/// author and book rows inserted before it.
///
/// Expected: Err and no author or book rows
#[tokio::test]
async fn rolls_back_when_link_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Author)
        .with_table(entity::prelude::Book)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let result = repo
        .create(CreateAuthorParams {
            first_name: "Ursula".to_string(),
            middle_name: None,
            last_name: "Le Guin".to_string(),
            books: vec![book_fields("Lavinia")],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Author::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Book::find().count(db).await?, 0);

    Ok(())
}
