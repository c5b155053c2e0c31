//! In-Memory Book Repository
//!
//! DashMap 实现的图书仓储，不落盘。目录顺序由插入序号维护，
//! 与 SQLite 实现的"登记时间顺序"语义一致。

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::application::ports::{BookRecord, BookRepositoryPort, RepositoryError};

/// 内存图书仓储
pub struct InMemoryBookRepository {
    books: DashMap<Uuid, (u64, BookRecord)>,
    next_seq: AtomicU64,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookRepository {
    async fn save(&self, book: &BookRecord) -> Result<(), RepositoryError> {
        // 更新时保留原插入序号，目录位置不变
        let seq = match self.books.get(&book.id) {
            Some(existing) => existing.0,
            None => self.next_seq.fetch_add(1, Ordering::Relaxed),
        };
        self.books.insert(book.id, (seq, book.clone()));
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, RepositoryError> {
        Ok(self.books.get(&id).map(|entry| entry.1.clone()))
    }

    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        let mut entries: Vec<(u64, BookRecord)> = self
            .books
            .iter()
            .map(|entry| (entry.0, entry.1.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, record)| record).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.books
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Book {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(title: &str) -> BookRecord {
        let now = Utc::now();
        BookRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: "author".to_string(),
            genre: "Fantasy".to_string(),
            cover_url: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = InMemoryBookRepository::new();
        for title in ["a", "b", "c"] {
            repo.save(&record(title)).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let titles: Vec<&str> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_keeps_catalog_position() {
        let repo = InMemoryBookRepository::new();
        let mut first = record("a");
        repo.save(&first).await.unwrap();
        repo.save(&record("b")).await.unwrap();

        first.title = "a2".to_string();
        repo.save(&first).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let titles: Vec<&str> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a2", "b"]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryBookRepository::new();
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
