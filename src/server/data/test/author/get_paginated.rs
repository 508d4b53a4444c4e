use super::*;

fn filter() -> AuthorFilter {
    AuthorFilter::default()
}

/// Tests the default listing.
///
/// Expected: Ok with live authors ordered by id and total excluding deleted ones
#[tokio::test]
async fn lists_live_authors_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_author(db).await?;
    factory::author::AuthorFactory::new(db).deleted().build().await?;
    let second = factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    let (authors, total) = repo.get_paginated(&filter()).await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests case-insensitive substring filtering on names.
///
/// Expected: Ok with only matching authors and a filtered total
#[tokio::test]
async fn filters_by_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let le_guin = factory::author::AuthorFactory::new(db)
        .first_name("Ursula")
        .last_name("Le Guin")
        .build()
        .await?;
    factory::author::AuthorFactory::new(db)
        .first_name("Ursula")
        .last_name("Vernon")
        .build()
        .await?;
    factory::author::AuthorFactory::new(db)
        .first_name("Frank")
        .last_name("Herbert")
        .build()
        .await?;

    let repo = AuthorRepository::new(db);

    let (authors, total) = repo
        .get_paginated(&AuthorFilter {
            first_name: Some("URS".to_string()),
            ..filter()
        })
        .await?;
    assert_eq!(total, 2);
    assert_eq!(authors.len(), 2);

    let (authors, total) = repo
        .get_paginated(&AuthorFilter {
            first_name: Some("urs".to_string()),
            last_name: Some("guin".to_string()),
            ..filter()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(authors[0].id, le_guin.id);

    Ok(())
}

/// Tests name filtering on names containing non-ASCII letters.
///
/// Expected: Ok with the author found by exact case, upper case and a partial match
#[tokio::test]
async fn filters_names_with_non_ascii_letters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let emile = factory::author::AuthorFactory::new(db)
        .first_name("Émile")
        .last_name("Zola")
        .build()
        .await?;
    factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    for query in ["Émile", "ÉMILE", "mil"] {
        let (authors, total) = repo
            .get_paginated(&AuthorFilter {
                first_name: Some(query.to_string()),
                ..filter()
            })
            .await?;
        assert_eq!(total, 1, "query {query}");
        assert_eq!(authors[0].id, emile.id);
    }

    Ok(())
}

/// Tests that LIKE wildcards in a filter match literally.
///
/// Expected: Ok with no matches for a bare `%`
#[tokio::test]
async fn escapes_wildcards_in_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    let (authors, total) = repo
        .get_paginated(&AuthorFilter {
            last_name: Some("%".to_string()),
            ..filter()
        })
        .await?;

    assert_eq!(total, 0);
    assert!(authors.is_empty());

    Ok(())
}

/// Tests sorting by a requested field.
///
/// Expected: Ok with authors ordered by descending creation time
#[tokio::test]
async fn sorts_by_requested_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::author::AuthorFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = factory::author::AuthorFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::author::AuthorFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = AuthorRepository::new(db);
    let (authors, _) = repo
        .get_paginated(&AuthorFilter {
            sort: vec![(AuthorSortField::CreatedAt, SortDirection::Desc)],
            ..filter()
        })
        .await?;

    let ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, older.id]);

    Ok(())
}

/// Tests limit and offset handling.
///
/// Expected: Ok with the second page and total covering all pages
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(factory::create_author(db).await?);
    }

    let repo = AuthorRepository::new(db);
    let (authors, total) = repo
        .get_paginated(&AuthorFilter {
            pagination: Pagination {
                page: 2,
                limit: 2,
                offset: 2,
            },
            ..filter()
        })
        .await?;

    assert_eq!(total, 5);
    let ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![created[2].id, created[3].id]);

    Ok(())
}

/// Tests that each author on the page gets its own books.
///
/// Expected: Ok with books grouped per author
#[tokio::test]
async fn embeds_books_per_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, first_books) = factory::helpers::create_author_with_books(db, 2).await?;
    let (second, second_books) = factory::helpers::create_author_with_books(db, 1).await?;

    let repo = AuthorRepository::new(db);
    let (authors, _) = repo.get_paginated(&filter()).await?;

    assert_eq!(authors[0].id, first.id);
    assert_eq!(authors[0].books.len(), first_books.len());
    assert_eq!(authors[1].id, second.id);
    assert_eq!(authors[1].books[0].id, second_books[0].id);

    Ok(())
}
