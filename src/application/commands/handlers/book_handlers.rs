//! Book Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{DeleteBook, RegisterBook};
use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort};
use crate::domain::book::{Author, Book, CoverUrl, Genre, Title};

// ============================================================================
// RegisterBook
// ============================================================================

/// 登记图书响应
#[derive(Debug, Clone)]
pub struct RegisterBookResponse {
    pub id: Uuid,
    pub title: String,
}

/// RegisterBook Handler - 校验后入库
pub struct RegisterBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl RegisterBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 通过领域值对象校验字段，构建聚合并持久化
    pub async fn handle(
        &self,
        command: RegisterBook,
    ) -> Result<RegisterBookResponse, ApplicationError> {
        let title = Title::new(command.title)
            .map_err(|e| ApplicationError::validation(e.to_string()))?;
        let author = Author::new(command.author)
            .map_err(|e| ApplicationError::validation(e.to_string()))?;
        let genre = Genre::new(command.genre)
            .map_err(|e| ApplicationError::validation(e.to_string()))?;

        let mut book = Book::new(title, author, genre);
        if let Some(url) = command.cover_url {
            book = book.with_cover(CoverUrl::new(url));
        }
        if let Some(description) = command.description {
            book = book.with_description(description);
        }

        let record = BookRecord::from(&book);
        self.book_repo.save(&record).await?;

        tracing::info!(
            book_id = %record.id,
            title = %record.title,
            genre = %record.genre,
            "Book registered"
        );

        Ok(RegisterBookResponse {
            id: record.id,
            title: record.title,
        })
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// 删除图书响应
#[derive(Debug, Clone)]
pub struct DeleteBookResponse {
    pub id: Uuid,
}

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(
        &self,
        command: DeleteBook,
    ) -> Result<DeleteBookResponse, ApplicationError> {
        // 先确认存在，保证 NotFound 语义
        self.book_repo
            .find_by_id(command.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", command.book_id))?;

        self.book_repo.delete(command.book_id).await?;

        tracing::info!(book_id = %command.book_id, "Book deleted");

        Ok(DeleteBookResponse {
            id: command.book_id,
        })
    }
}
