//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::book::Book;
use crate::domain::Categorized;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 图书实体（用于持久化）
#[derive(Debug, Clone)]
pub struct BookRecord {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: *book.id().as_uuid(),
            title: book.title().as_str().to_string(),
            author: book.author().as_str().to_string(),
            genre: book.genre().as_str().to_string(),
            cover_url: book.cover_url().map(|c| c.as_str().to_string()),
            description: book.description().map(String::from),
            created_at: book.created_at(),
            updated_at: book.updated_at(),
        }
    }
}

impl Categorized for BookRecord {
    fn genre(&self) -> &str {
        &self.genre
    }
}

/// Book Repository Port
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 保存图书（存在则更新）
    async fn save(&self, book: &BookRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找图书
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, RepositoryError>;

    /// 获取全部图书（目录顺序）
    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError>;

    /// 删除图书
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
