//! Book Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort};
use crate::application::queries::{GetBook, ListBooks};

// ============================================================================
// Response DTOs
// ============================================================================

/// 图书详情响应
#[derive(Debug, Clone)]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<BookRecord> for BookResponse {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            genre: record.genre,
            cover_url: record.cover_url,
            description: record.description,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<BookResponse, ApplicationError> {
        let book = self
            .book_repo
            .find_by_id(query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.book_id))?;

        Ok(BookResponse::from(book))
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, _query: ListBooks) -> Result<Vec<BookResponse>, ApplicationError> {
        let books = self.book_repo.find_all().await?;
        Ok(books.into_iter().map(BookResponse::from).collect())
    }
}
