use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::author::AuthorRepository,
    error::AppError,
    model::author::{
        Author, AuthorFilter, CreateAuthorParams, PaginatedAuthors, UpdateAuthorParams,
    },
};

pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an author with its initial books and returns the persisted record
    pub async fn create(&self, params: CreateAuthorParams) -> Result<Author, AppError> {
        let repo = AuthorRepository::new(self.db);

        let author = repo.create(params).await?;
        tracing::info!(
            author_id = author.id,
            books = author.books.len(),
            "Created author"
        );

        repo.get_by_id(author.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found after creation".to_string()))
    }

    /// Gets a non-deleted author by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Author>, AppError> {
        let repo = AuthorRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets one page of authors matching the filter
    pub async fn get_paginated(&self, filter: &AuthorFilter) -> Result<PaginatedAuthors, AppError> {
        let repo = AuthorRepository::new(self.db);

        let (authors, total) = repo.get_paginated(filter).await?;

        Ok(PaginatedAuthors {
            authors,
            total,
            page: filter.pagination.page,
            limit: filter.pagination.limit,
        })
    }

    /// Updates an author's names
    /// Returns None if the author doesn't exist or is deleted
    pub async fn update(&self, params: UpdateAuthorParams) -> Result<Option<Author>, AppError> {
        let repo = AuthorRepository::new(self.db);
        let id = params.id;

        match repo.update(params).await {
            Ok(()) => {}
            Err(DbErr::RecordNotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        }
        tracing::info!(author_id = id, "Updated author");

        Ok(repo.get_by_id(id).await?)
    }

    /// Soft-deletes an author
    /// Returns false if the author doesn't exist or is already deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AuthorRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!(author_id = id, "Deleted author");
        }

        Ok(deleted)
    }
}
