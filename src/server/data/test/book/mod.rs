use crate::server::{
    data::book::BookRepository,
    model::{
        book::{BookFields, BookFilter, BookSortField, CreateBookParams, UpdateBookParams},
        filter::{Pagination, SortDirection},
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod search;
mod update;
