use super::*;

fn params(id: i32) -> UpdateAuthorParams {
    UpdateAuthorParams {
        id,
        first_name: "Octavia".to_string(),
        middle_name: Some("Estelle".to_string()),
        last_name: "Butler".to_string(),
    }
}

/// Tests updating an author's names.
///
/// Expected: Ok with names replaced and updated_at refreshed
#[tokio::test]
async fn updates_names_and_timestamp() -> Result<(), DbErr> {
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

    let repo = AuthorRepository::new(db);
    repo.update(params(author.id)).await?;

    let db_author = entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_author.first_name, "Octavia");
    assert_eq!(db_author.middle_name.as_deref(), Some("Estelle"));
    assert_eq!(db_author.last_name, "Butler");
    assert_eq!(db_author.created_at, author.created_at);
    assert!(db_author.updated_at > author.updated_at);

    Ok(())
}

/// Tests updating a missing author.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let result = repo.update(params(42)).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests updating a soft-deleted author.
///
/// Expected: Err(RecordNotFound) and the row left untouched
#[tokio::test]
async fn fails_for_deleted_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::author::AuthorFactory::new(db).deleted().build().await?;

    let repo = AuthorRepository::new(db);
    let result = repo.update(params(author.id)).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    let db_author = entity::prelude::Author::find_by_id(author.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_author.first_name, author.first_name);

    Ok(())
}
