//! Author domain models and parameters.
//!
//! An author owns a list of books through the many-to-many `book_author` link. Domain models
//! only ever contain non-deleted rows.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::ListMetaDto,
        author::{AuthorDto, CreateAuthorDto, PaginatedAuthorsDto, UpdateAuthorDto},
    },
    server::{
        error::validation::ValidationErrors,
        model::{
            book::{Book, BookFields},
            filter::{parse_sort, query_value, Pagination, QueryPairs, SortDirection},
        },
    },
};

/// A persisted, non-deleted author together with its non-deleted books.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Books ordered by ascending id.
    pub books: Vec<Book>,
}

impl Author {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The author entity from the database
    /// - `books` - Book entities already filtered to non-deleted rows
    pub fn from_entity(entity: entity::author::Model, books: Vec<entity::book::Model>) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            middle_name: entity.middle_name,
            last_name: entity.last_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            books: books.into_iter().map(Book::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            books: self.books.into_iter().map(Book::into_dto).collect(),
        }
    }
}

/// Normalizes an optional middle name: blank strings are stored as `None`.
fn normalize_middle_name(middle_name: Option<String>) -> Option<String> {
    middle_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Parameters for creating an author along with any initial books.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAuthorParams {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub books: Vec<BookFields>,
}

impl CreateAuthorParams {
    /// Validates the request and converts it into creation parameters.
    ///
    /// Nested book failures are reported as `books[<index>].<field>`.
    pub fn from_dto(dto: CreateAuthorDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("first_name", &dto.first_name);
        errors.require("last_name", &dto.last_name);

        let mut books = Vec::with_capacity(dto.books.len());
        for (i, book) in dto.books.into_iter().enumerate() {
            match BookFields::from_dto(book) {
                Ok(fields) => books.push(fields),
                Err(nested) => errors.extend_prefixed(&format!("books[{}]", i), nested),
            }
        }

        errors.into_result(Self {
            first_name: dto.first_name.trim().to_string(),
            middle_name: normalize_middle_name(dto.middle_name),
            last_name: dto.last_name.trim().to_string(),
            books,
        })
    }
}

/// Parameters for replacing an author's name fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAuthorParams {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
}

impl UpdateAuthorParams {
    pub fn from_dto(id: i32, dto: UpdateAuthorDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("first_name", &dto.first_name);
        errors.require("last_name", &dto.last_name);

        errors.into_result(Self {
            id,
            first_name: dto.first_name.trim().to_string(),
            middle_name: normalize_middle_name(dto.middle_name),
            last_name: dto.last_name.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorSortField {
    FirstName,
    LastName,
    CreatedAt,
    UpdatedAt,
}

impl AuthorSortField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    pub fn column(self) -> entity::author::Column {
        match self {
            Self::FirstName => entity::author::Column::FirstName,
            Self::LastName => entity::author::Column::LastName,
            Self::CreatedAt => entity::author::Column::CreatedAt,
            Self::UpdatedAt => entity::author::Column::UpdatedAt,
        }
    }
}

/// Filters accepted by the author list endpoint.
///
/// Name filters are case-insensitive substring matches combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorFilter {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub sort: Vec<(AuthorSortField, SortDirection)>,
    pub pagination: Pagination,
}

impl AuthorFilter {
    pub fn from_query(pairs: &QueryPairs) -> Self {
        Self {
            first_name: query_value(pairs, "first_name").map(str::to_string),
            middle_name: query_value(pairs, "middle_name").map(str::to_string),
            last_name: query_value(pairs, "last_name").map(str::to_string),
            sort: parse_sort(pairs, AuthorSortField::from_name),
            pagination: Pagination::from_query(pairs),
        }
    }
}

/// One page of authors plus the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAuthors {
    pub authors: Vec<Author>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PaginatedAuthors {
    pub fn into_dto(self) -> PaginatedAuthorsDto {
        PaginatedAuthorsDto {
            meta: ListMetaDto {
                size: self.authors.len() as u64,
                total: self.total,
                page: self.page,
                limit: self.limit,
            },
            data: self.authors.into_iter().map(Author::into_dto).collect(),
        }
    }
}
