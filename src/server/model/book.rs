//! Book domain models and parameters.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::book::{BookDto, CreateBookDto},
    server::{
        error::validation::ValidationErrors,
        model::filter::{parse_sort, query_value, Pagination, QueryPairs, SortDirection},
        util::parse::{is_http_url, parse_date},
    },
};

/// A persisted, non-deleted book.
#[derive(Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub published_date: DateTime<Utc>,
    pub image_url: Option<String>,
    /// Marked sensitive; excluded from `Debug` output.
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            published_date: entity.published_date,
            image_url: entity.image_url,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            published_date: self.published_date,
            image_url: self.image_url,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl fmt::Debug for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Book")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("published_date", &self.published_date)
            .field("image_url", &self.image_url)
            .field("description", &"<sensitive>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Validated book fields shared by create and update operations.
#[derive(Clone, PartialEq)]
pub struct BookFields {
    pub title: String,
    pub published_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub description: String,
}

impl BookFields {
    /// Validates a book payload.
    ///
    /// `title`, `published_date` and `description` are required; `published_date` must be
    /// an RFC 3339 timestamp or `YYYY-MM-DD`; a non-blank `image_url` must be an http(s) URL.
    /// A blank `image_url` is stored as `None`.
    ///
    /// # Returns
    /// - `Ok(BookFields)` - Trimmed, parsed fields
    /// - `Err(ValidationErrors)` - Every failing field
    pub fn from_dto(dto: CreateBookDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("title", &dto.title);
        errors.require("description", &dto.description);
        errors.require("published_date", &dto.published_date);

        let published_date = parse_date(&dto.published_date);
        if published_date.is_none() {
            errors.add(
                "published_date",
                "must be an RFC 3339 timestamp or a YYYY-MM-DD date",
            );
        }

        let image_url = dto
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = &image_url {
            if !is_http_url(url) {
                errors.add("image_url", "must be a valid http(s) URL");
            }
        }

        match published_date {
            Some(published_date) if errors.is_empty() => Ok(Self {
                title: dto.title.trim().to_string(),
                published_date,
                image_url,
                description: dto.description,
            }),
            _ => Err(errors),
        }
    }
}

impl fmt::Debug for BookFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookFields")
            .field("title", &self.title)
            .field("published_date", &self.published_date)
            .field("image_url", &self.image_url)
            .field("description", &"<sensitive>")
            .finish()
    }
}

/// Parameters for creating a new book.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookParams {
    pub fields: BookFields,
}

impl CreateBookParams {
    pub fn from_dto(dto: CreateBookDto) -> Result<Self, ValidationErrors> {
        Ok(Self {
            fields: BookFields::from_dto(dto)?,
        })
    }
}

/// Parameters for replacing an existing book's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBookParams {
    pub id: i32,
    pub fields: BookFields,
}

impl UpdateBookParams {
    pub fn from_dto(id: i32, dto: CreateBookDto) -> Result<Self, ValidationErrors> {
        Ok(Self {
            id,
            fields: BookFields::from_dto(dto)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSortField {
    Title,
    PublishedDate,
    CreatedAt,
    UpdatedAt,
}

impl BookSortField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "published_date" => Some(Self::PublishedDate),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    pub fn column(self) -> entity::book::Column {
        match self {
            Self::Title => entity::book::Column::Title,
            Self::PublishedDate => entity::book::Column::PublishedDate,
            Self::CreatedAt => entity::book::Column::CreatedAt,
            Self::UpdatedAt => entity::book::Column::UpdatedAt,
        }
    }
}

/// Filters accepted by the book list endpoint.
///
/// Presence of `title` or `description` turns a listing into a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub sort: Vec<(BookSortField, SortDirection)>,
    pub pagination: Pagination,
}

impl BookFilter {
    pub fn from_query(pairs: &QueryPairs) -> Self {
        Self {
            title: query_value(pairs, "title").map(str::to_string),
            description: query_value(pairs, "description").map(str::to_string),
            sort: parse_sort(pairs, BookSortField::from_name),
            pagination: Pagination::from_query(pairs),
        }
    }

    pub fn is_search(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}
