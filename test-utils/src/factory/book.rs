//! Book factory for creating test book entities and author links.

use crate::factory::helpers::next_id;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db)
///     .title("The Dispossessed")
///     .image_url(Some("https://example.com/cover.png".to_string()))
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    published_date: DateTime<Utc>,
    image_url: Option<String>,
    description: String,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"` where id is auto-incremented
    /// - published_date: 2020-01-01T00:00:00Z
    /// - image_url: `None`
    /// - description: `"Description of book {id}"`
    /// - created_at: `Utc::now()`
    /// - deleted_at: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
            published_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            image_url: None,
            description: format!("Description of book {}", id),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn published_date(mut self, published_date: DateTime<Utc>) -> Self {
        self.published_date = published_date;
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets both creation and update timestamps.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the book as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            published_date: ActiveValue::Set(self.published_date),
            image_url: ActiveValue::Set(self.image_url),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
///
/// Shorthand for `BookFactory::new(db).build().await`.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}

/// Links an existing book to an existing author.
///
/// # Returns
/// - `Ok(entity::book_author::Model)` - The created join row
/// - `Err(DbErr)` - Database error, including foreign key violations
pub async fn link_book_to_author(
    db: &DatabaseConnection,
    book_id: i32,
    author_id: i32,
) -> Result<entity::book_author::Model, DbErr> {
    entity::book_author::ActiveModel {
        book_id: ActiveValue::Set(book_id),
        author_id: ActiveValue::Set(author_id),
    }
    .insert(db)
    .await
}
