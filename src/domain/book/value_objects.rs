//! Book Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::BookError;

/// 图书唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 图书标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, BookError> {
        let title = title.into();
        if title.is_empty() {
            return Err(BookError::InvalidTitle("标题不能为空".into()));
        }
        if title.chars().count() > 200 {
            return Err(BookError::InvalidTitle("标题长度不能超过200字符".into()));
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author(String);

impl Author {
    pub fn new(author: impl Into<String>) -> Result<Self, BookError> {
        let author = author.into();
        if author.is_empty() {
            return Err(BookError::InvalidAuthor("作者不能为空".into()));
        }
        if author.chars().count() > 120 {
            return Err(BookError::InvalidAuthor("作者长度不能超过120字符".into()));
        }
        Ok(Self(author))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 体裁 - 自由文本，分类匹配的比较对象
///
/// 不做大小写或标点归一化，匹配时才做大小写折叠
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre(String);

impl Genre {
    pub fn new(genre: impl Into<String>) -> Result<Self, BookError> {
        let genre = genre.into();
        if genre.is_empty() {
            return Err(BookError::InvalidGenre("体裁不能为空".into()));
        }
        if genre.chars().count() > 100 {
            return Err(BookError::InvalidGenre("体裁长度不能超过100字符".into()));
        }
        Ok(Self(genre))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 封面图片地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverUrl(String);

impl CoverUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CoverUrl {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}
