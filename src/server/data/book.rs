use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::contains_ignore_case,
    model::book::{Book, BookFilter, CreateBookParams, UpdateBookParams},
};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new book with no author links
    pub async fn create(&self, params: CreateBookParams) -> Result<Book, DbErr> {
        let now = Utc::now();
        let fields = params.fields;

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
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(book))
    }

    /// Gets a non-deleted book by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        let book = entity::prelude::Book::find_by_id(id)
            .filter(entity::book::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(book.map(Book::from_entity))
    }

    /// Lists one page of non-deleted books, ignoring any text filters
    pub async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, DbErr> {
        let query =
            entity::prelude::Book::find().filter(entity::book::Column::DeletedAt.is_null());

        self.fetch_page(query, filter).await
    }

    /// Searches non-deleted books by case-insensitive substring on title and description.
    ///
    /// Both filters combine with AND; an absent filter matches everything.
    pub async fn search(&self, filter: &BookFilter) -> Result<Vec<Book>, DbErr> {
        let mut query =
            entity::prelude::Book::find().filter(entity::book::Column::DeletedAt.is_null());

        if let Some(title) = &filter.title {
            query = query.filter(contains_ignore_case(
                (entity::prelude::Book, entity::book::Column::Title),
                title,
            ));
        }
        if let Some(description) = &filter.description {
            query = query.filter(contains_ignore_case(
                (entity::prelude::Book, entity::book::Column::Description),
                description,
            ));
        }

        self.fetch_page(query, filter).await
    }

    /// Replaces all fields of a non-deleted book and refreshes `updated_at`
    pub async fn update(&self, params: UpdateBookParams) -> Result<(), DbErr> {
        let book = entity::prelude::Book::find_by_id(params.id)
            .filter(entity::book::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Book with id {} not found",
                params.id
            )))?;

        let fields = params.fields;
        let mut active: entity::book::ActiveModel = book.into();
        active.title = ActiveValue::Set(fields.title);
        active.published_date = ActiveValue::Set(fields.published_date);
        active.image_url = ActiveValue::Set(fields.image_url);
        active.description = ActiveValue::Set(fields.description);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    /// Soft-deletes a book, returning false when it was missing or already deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::Book::update_many()
            .col_expr(entity::book::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::book::Column::UpdatedAt, Expr::value(now))
            .filter(entity::book::Column::Id.eq(id))
            .filter(entity::book::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn fetch_page(
        &self,
        mut query: Select<entity::book::Entity>,
        filter: &BookFilter,
    ) -> Result<Vec<Book>, DbErr> {
        for (field, direction) in &filter.sort {
            query = query.order_by(field.column(), direction.into_order());
        }

        let books = query
            .order_by_asc(entity::book::Column::Id)
            .limit(filter.pagination.limit)
            .offset(filter.pagination.offset)
            .all(self.db)
            .await?;

        Ok(books.into_iter().map(Book::from_entity).collect())
    }
}
