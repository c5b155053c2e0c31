//! Book Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, BookId, CoverUrl, Genre, Title};

/// Book 聚合根
///
/// 不变量:
/// - 标题、作者、体裁均已通过值对象校验
/// - 分类归属不落库，由分类匹配按需计算
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: Title,
    author: Author,
    genre: Genre,
    cover_url: Option<CoverUrl>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Book {
    /// 创建新图书
    pub fn new(title: Title, author: Author, genre: Genre) -> Self {
        let now = Utc::now();
        Self {
            id: BookId::new(),
            title,
            author,
            genre,
            cover_url: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 设置封面
    pub fn with_cover(mut self, cover_url: CoverUrl) -> Self {
        self.cover_url = Some(cover_url);
        self.updated_at = Utc::now();
        self
    }

    /// 设置简介
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self.updated_at = Utc::now();
        self
    }

    // Getters
    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn genre(&self) -> &Genre {
        &self.genre
    }

    pub fn cover_url(&self) -> Option<&CoverUrl> {
        self.cover_url.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new(
            Title::new("三体").unwrap(),
            Author::new("刘慈欣").unwrap(),
            Genre::new("Science Fiction").unwrap(),
        )
    }

    #[test]
    fn test_book_creation() {
        let book = sample_book();
        assert_eq!(book.title().as_str(), "三体");
        assert_eq!(book.genre().as_str(), "Science Fiction");
        assert!(book.cover_url().is_none());
    }

    #[test]
    fn test_book_with_cover_and_description() {
        let book = sample_book()
            .with_cover(CoverUrl::from("/covers/santi.jpg"))
            .with_description("地球往事三部曲第一部");

        assert_eq!(book.cover_url().unwrap().as_str(), "/covers/santi.jpg");
        assert_eq!(book.description().unwrap(), "地球往事三部曲第一部");
    }
}
