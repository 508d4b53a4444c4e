use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{Book, BookFilter, CreateBookParams, UpdateBookParams},
};

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a standalone book and returns the persisted record
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);

        let book = repo.create(params).await?;
        tracing::info!(book_id = book.id, "Created book");

        repo.get_by_id(book.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found after creation".to_string()))
    }

    /// Gets a non-deleted book by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Lists books, ignoring text filters
    pub async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        Ok(repo.list(filter).await?)
    }

    /// Searches books by title and description
    pub async fn search(&self, filter: &BookFilter) -> Result<Vec<Book>, AppError> {
        let repo = BookRepository::new(self.db);

        Ok(repo.search(filter).await?)
    }

    /// Replaces a book's fields
    /// Returns None if the book doesn't exist or is deleted
    pub async fn update(&self, params: UpdateBookParams) -> Result<Option<Book>, AppError> {
        let repo = BookRepository::new(self.db);
        let id = params.id;

        match repo.update(params).await {
            Ok(()) => {}
            Err(DbErr::RecordNotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        }
        tracing::info!(book_id = id, "Updated book");

        Ok(repo.get_by_id(id).await?)
    }

    /// Soft-deletes a book
    /// Returns false if the book doesn't exist or is already deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = BookRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!(book_id = id, "Deleted book");
        }

        Ok(deleted)
    }
}
