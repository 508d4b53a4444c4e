use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_author_table::Author, m20260301_000002_create_book_table::Book};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookAuthor::Table)
                    .if_not_exists()
                    .col(integer(BookAuthor::BookId))
                    .col(integer(BookAuthor::AuthorId))
                    .primary_key(
                        Index::create()
                            .col(BookAuthor::BookId)
                            .col(BookAuthor::AuthorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_author_book_id")
                            .from(BookAuthor::Table, BookAuthor::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_author_author_id")
                            .from(BookAuthor::Table, BookAuthor::AuthorId)
                            .to(Author::Table, Author::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookAuthor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookAuthor {
    Table,
    BookId,
    AuthorId,
}
