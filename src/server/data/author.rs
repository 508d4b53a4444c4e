//! Author data repository for database operations.
//!
//! This module provides the `AuthorRepository` for managing author records together with
//! their many-to-many book links. Reads return only non-deleted authors and embed only
//! non-deleted books, ordered by book id.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::contains_ignore_case,
    model::author::{Author, AuthorFilter, CreateAuthorParams, UpdateAuthorParams},
};

/// Repository providing database operations for author management.
pub struct AuthorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorRepository<'a> {
    /// Creates a new AuthorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an author along with its initial books.
    ///
    /// The author row, every book row and every `book_author` link are inserted in a single
    /// transaction; a failure on any insert rolls back the whole operation.
    ///
    /// # Arguments
    /// - `params` - Validated author fields and books to create
    ///
    /// # Returns
    /// - `Ok(Author)` - The created author with its books in creation order
    /// - `Err(DbErr)` - Database error during any insert
    pub async fn create(&self, params: CreateAuthorParams) -> Result<Author, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let author = entity::author::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            middle_name: ActiveValue::Set(params.middle_name),
            last_name: ActiveValue::Set(params.last_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut books = Vec::with_capacity(params.books.len());
        for fields in params.books {
            let book = entity::book::ActiveModel {
                title: ActiveValue::Set(fields.title),
                published_date: ActiveValue::Set(fields.published_date),
                image_url: ActiveValue::Set(fields.image_url),
                description: ActiveValue::Set(fields.description),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                deleted_at: ActiveValue::Set(None),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            entity::book_author::ActiveModel {
                book_id: ActiveValue::Set(book.id),
                author_id: ActiveValue::Set(author.id),
            }
            .insert(&txn)
            .await?;

            books.push(book);
        }

        txn.commit().await?;

        Ok(Author::from_entity(author, books))
    }

    /// Gets a non-deleted author by id with its non-deleted books.
    ///
    /// # Returns
    /// - `Ok(Some(Author))` - Author found
    /// - `Ok(None)` - No author with that id, or the author is soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Author>, DbErr> {
        let Some(author) = entity::prelude::Author::find_by_id(id)
            .filter(entity::author::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut books = books_for_authors(self.db, &[author.id]).await?;
        let books = books.remove(&author.id).unwrap_or_default();

        Ok(Some(Author::from_entity(author, books)))
    }

    /// Gets one page of non-deleted authors matching the filter.
    ///
    /// Name filters are case-insensitive substring matches combined with AND. Requested sort
    /// fields apply in order and ties always break by ascending id.
    ///
    /// # Returns
    /// - `Ok((authors, total))` - Authors for the requested page and the number of matches
    ///   across all pages
    /// - `Err(DbErr)` - Database error during count or select
    pub async fn get_paginated(&self, filter: &AuthorFilter) -> Result<(Vec<Author>, u64), DbErr> {
        let mut query =
            entity::prelude::Author::find().filter(entity::author::Column::DeletedAt.is_null());

        let name_filters = [
            (entity::author::Column::FirstName, &filter.first_name),
            (entity::author::Column::MiddleName, &filter.middle_name),
            (entity::author::Column::LastName, &filter.last_name),
        ];
        for (column, value) in name_filters {
            if let Some(value) = value {
                query = query.filter(contains_ignore_case(
                    (entity::prelude::Author, column),
                    value,
                ));
            }
        }

        let total = query.clone().count(self.db).await?;

        for (field, direction) in &filter.sort {
            query = query.order_by(field.column(), direction.into_order());
        }

        let authors = query
            .order_by_asc(entity::author::Column::Id)
            .limit(filter.pagination.limit)
            .offset(filter.pagination.offset)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
        let mut books = books_for_authors(self.db, &ids).await?;

        let authors = authors
            .into_iter()
            .map(|author| {
                let author_books = books.remove(&author.id).unwrap_or_default();
                Author::from_entity(author, author_books)
            })
            .collect();

        Ok((authors, total))
    }

    /// Replaces the name fields of a non-deleted author and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(())` - Author updated
    /// - `Err(DbErr::RecordNotFound)` - No author with that id, or the author is soft-deleted
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateAuthorParams) -> Result<(), DbErr> {
        let author = entity::prelude::Author::find_by_id(params.id)
            .filter(entity::author::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Author with id {} not found",
                params.id
            )))?;

        let mut active: entity::author::ActiveModel = author.into();
        active.first_name = ActiveValue::Set(params.first_name);
        active.middle_name = ActiveValue::Set(params.middle_name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    /// Soft-deletes an author by setting `deleted_at`.
    ///
    /// Book links are kept; the author simply disappears from every read.
    ///
    /// # Returns
    /// - `Ok(true)` - Author marked as deleted
    /// - `Ok(false)` - No author with that id, or it was already deleted
    /// - `Err(DbErr)` - Database error during update
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::Author::update_many()
            .col_expr(entity::author::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::author::Column::UpdatedAt, Expr::value(now))
            .filter(entity::author::Column::Id.eq(id))
            .filter(entity::author::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Loads the non-deleted books of each given author, keyed by author id and ordered by book id.
async fn books_for_authors<C: ConnectionTrait>(
    conn: &C,
    author_ids: &[i32],
) -> Result<HashMap<i32, Vec<entity::book::Model>>, DbErr> {
    let mut books: HashMap<i32, Vec<entity::book::Model>> = HashMap::new();
    if author_ids.is_empty() {
        return Ok(books);
    }

    let links = entity::prelude::BookAuthor::find()
        .filter(entity::book_author::Column::AuthorId.is_in(author_ids.iter().copied()))
        .find_also_related(entity::prelude::Book)
        .filter(entity::book::Column::DeletedAt.is_null())
        .order_by_asc(entity::book::Column::Id)
        .all(conn)
        .await?;

    for (link, book) in links {
        if let Some(book) = book {
            books.entry(link.author_id).or_default().push(book);
        }
    }

    Ok(books)
}
